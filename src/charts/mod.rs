//! PNG chart rendering.
//!
//! Each chart draws into its own RGB buffer with the plotters bitmap backend
//! and is encoded to PNG in memory. Nothing here touches the filesystem.

mod bar;
mod pie;

pub use bar::CountPlot;
pub use pie::PieChart;

use crate::core::Dataset;
use crate::output::{ACTIVITY_CHART_FILE, HEALTH_CHART_FILE, SLEEP_CHART_FILE};
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

/// 10x6 inch figure at 100 dpi
pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 600;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to draw chart '{title}': {message}")]
    Draw { title: String, message: String },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// A rendered chart ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub file_name: &'static str,
    pub png: Vec<u8>,
}

/// Render the three charts, in output order.
pub fn render_all() -> Result<Vec<RenderedChart>, ChartError> {
    let activity = CountPlot {
        title: "Number of Metrics Tracked per Activity",
        x_desc: "Number of Metrics",
        y_desc: "Activity",
        labels: Dataset::Activity.labels(),
    };
    let health = PieChart {
        title: "Distribution of Health Metrics",
        labels: Dataset::Health.labels(),
        start_angle: 140.0,
    };
    let sleep = CountPlot {
        title: "Number of Metrics Tracked for Sleep",
        x_desc: "Number of Metrics",
        y_desc: "Sleep Metric",
        labels: Dataset::Sleep.labels(),
    };

    Ok(vec![
        RenderedChart {
            file_name: ACTIVITY_CHART_FILE,
            png: activity.render()?,
        },
        RenderedChart {
            file_name: HEALTH_CHART_FILE,
            png: health.render()?,
        },
        RenderedChart {
            file_name: SLEEP_CHART_FILE,
            png: sleep.render()?,
        },
    ])
}

/// Run `draw` against a fresh white canvas and return the PNG bytes.
fn render_png<F>(title: &str, draw: F) -> Result<Vec<u8>, ChartError>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), Box<dyn Error>>,
{
    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_error(title, e))?;
        draw(&root).map_err(|e| draw_error(title, e))?;
        root.present().map_err(|e| draw_error(title, e))?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&pixels, WIDTH, HEIGHT, ColorType::Rgb8)?;
    log::debug!("Rendered '{}' ({} bytes)", title, png.len());
    Ok(png)
}

fn draw_error<E: std::fmt::Display>(title: &str, e: E) -> ChartError {
    ChartError::Draw {
        title: title.to_string(),
        message: e.to_string(),
    }
}
