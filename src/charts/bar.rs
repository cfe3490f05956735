use super::{render_png, ChartError};
use crate::core::value_counts;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

/// Horizontal count plot: one bar per distinct label, most frequent on top.
#[derive(Debug, Clone)]
pub struct CountPlot {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub labels: Vec<&'static str>,
}

impl CountPlot {
    /// Bars from top to bottom with their counts.
    pub fn bars(&self) -> Vec<(&'static str, usize)> {
        value_counts(self.labels.iter().copied())
    }

    pub fn render(&self) -> Result<Vec<u8>, ChartError> {
        let bars = self.bars();
        render_png(self.title, |root| self.draw(root, &bars))
    }

    fn draw(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        bars: &[(&str, usize)],
    ) -> Result<(), Box<dyn Error>> {
        let rows = bars.len() as i32;
        let max = bars.iter().map(|(_, n)| *n).max().unwrap_or(1) as f64;

        let mut chart = ChartBuilder::on(root)
            .caption(self.title, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(190)
            .build_cartesian_2d(0f64..max * 1.05, category_range(rows).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(bars.len())
            .y_label_formatter(&|v| match v {
                SegmentValue::CenterOf(row) => bar_label(bars, *row).to_string(),
                _ => String::new(),
            })
            .x_desc(self.x_desc)
            .y_desc(self.y_desc)
            .axis_desc_style(("sans-serif", 16))
            .label_style(("sans-serif", 13))
            .draw()?;

        // row 0 sits at the bottom of the axis, so the first bar gets the top row
        chart.draw_series(
            Histogram::horizontal(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(4)
                .data(
                    bars.iter()
                        .enumerate()
                        .map(|(i, (_, n))| (rows - 1 - i as i32, *n as f64)),
                ),
        )?;

        Ok(())
    }
}

/// Axis rows `0..=rows - 1`, one per bar. Integer axes include their end value.
fn category_range(rows: i32) -> Range<i32> {
    0..(rows - 1).max(0)
}

/// Label of the bar drawn at axis row `row`.
fn bar_label<'a>(bars: &[(&'a str, usize)], row: i32) -> &'a str {
    let index = bars.len() as i32 - 1 - row;
    usize::try_from(index)
        .ok()
        .and_then(|i| bars.get(i))
        .map_or("", |(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;
    use plotters::coord::ranged1d::DiscreteRanged;
    use plotters::coord::types::RangedCoordi32;

    fn sleep_plot() -> CountPlot {
        CountPlot {
            title: "Number of Metrics Tracked for Sleep",
            x_desc: "Number of Metrics",
            y_desc: "Sleep Metric",
            labels: Dataset::Sleep.labels(),
        }
    }

    #[test]
    fn one_bar_per_label_in_definition_order() {
        let bars = sleep_plot().bars();
        assert_eq!(bars.len(), 8);
        assert_eq!(bars[0], ("Total Sleep Time", 1));
        assert_eq!(bars[7], ("Sleep Latency", 1));
    }

    #[test]
    fn one_axis_row_per_bar() {
        let bars = sleep_plot().bars();
        let axis: RangedCoordi32 = category_range(bars.len() as i32).into();
        assert_eq!(axis.size(), bars.len());
        assert_eq!(axis.index_of(&7), Some(7));
        assert_eq!(axis.index_of(&8), None);

        let axis: RangedCoordi32 = category_range(18).into();
        assert_eq!(axis.size(), 18);
    }

    #[test]
    fn top_row_shows_first_bar() {
        let bars = sleep_plot().bars();
        assert_eq!(bar_label(&bars, 7), "Total Sleep Time");
        assert_eq!(bar_label(&bars, 0), "Sleep Latency");
        assert_eq!(bar_label(&bars, 8), "");
        assert_eq!(bar_label(&bars, -1), "");
    }
}
