use super::{render_png, ChartError};
use crate::core::{percent_label, shares, value_counts};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

/// Distance of the name label from the center, relative to the radius
const LABEL_DISTANCE: f64 = 1.1;
/// Distance of the percentage label from the center, relative to the radius
const PERCENT_DISTANCE: f64 = 0.6;

/// Pie chart with one slice per distinct label.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    /// Angle of the first slice edge, in degrees counter-clockwise from 3 o'clock
    pub start_angle: f64,
}

/// One wedge of a pie, angles in degrees counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub share: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl PieSlice {
    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    pub fn percent_label(&self) -> String {
        percent_label(self.share)
    }
}

/// Lay out slices counter-clockwise from `start_angle`, sized by label frequency.
pub fn pie_slices<I>(labels: I, start_angle: f64) -> Vec<PieSlice>
where
    I: IntoIterator<Item = &'static str>,
{
    let counts = value_counts(labels);
    let mut angle = start_angle;
    counts
        .iter()
        .zip(shares(&counts))
        .map(|(&(label, _), share)| {
            let slice = PieSlice {
                label,
                share,
                start_deg: angle,
                sweep_deg: share * 360.0,
            };
            angle += slice.sweep_deg;
            slice
        })
        .collect()
}

/// Pixel position at `radius` from `center` along `deg`, with screen y pointing down.
fn polar(center: (i32, i32), radius: f64, deg: f64) -> (i32, i32) {
    let rad = deg.to_radians();
    (
        center.0 + (radius * rad.cos()).round() as i32,
        center.1 - (radius * rad.sin()).round() as i32,
    )
}

/// Outline of a slice: center, then the arc in steps of at most one degree.
fn wedge(center: (i32, i32), radius: f64, slice: &PieSlice) -> Vec<(i32, i32)> {
    let steps = slice.sweep_deg.abs().ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let deg = slice.start_deg + slice.sweep_deg * step as f64 / steps as f64;
        points.push(polar(center, radius, deg));
    }
    points
}

impl PieChart {
    pub fn slices(&self) -> Vec<PieSlice> {
        pie_slices(self.labels.iter().copied(), self.start_angle)
    }

    pub fn render(&self) -> Result<Vec<u8>, ChartError> {
        let slices = self.slices();
        render_png(self.title, |root| self.draw(root, &slices))
    }

    fn draw(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        slices: &[PieSlice],
    ) -> Result<(), Box<dyn Error>> {
        let area = root.titled(self.title, ("sans-serif", 24))?;
        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.38;

        for (i, slice) in slices.iter().enumerate() {
            let color = Palette99::pick(i);
            area.draw(&Polygon::new(wedge(center, radius, slice), color.filled()))?;
        }

        let percent_style = ("sans-serif", 12)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        for slice in slices {
            let mid = slice.mid_deg();

            // names hang off the side of the pie they sit on
            let h_pos = if mid.to_radians().cos() >= 0.0 {
                HPos::Left
            } else {
                HPos::Right
            };
            let label_style = ("sans-serif", 13)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(h_pos, VPos::Center));
            area.draw(&Text::new(
                slice.label,
                polar(center, radius * LABEL_DISTANCE, mid),
                label_style,
            ))?;
            area.draw(&Text::new(
                slice.percent_label(),
                polar(center, radius * PERCENT_DISTANCE, mid),
                percent_style.clone(),
            ))?;
        }

        Ok(())
    }
}
