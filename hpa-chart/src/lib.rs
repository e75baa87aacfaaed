//! Chart rendering for hydropower records.
//!
//! Each chart implements [`Chart`] against any plotters backend; [`render`]
//! picks the backend from the requested [`ImageFormat`].

pub mod monthly;
pub mod regression;
pub mod trend;

use hpa_core::error::{HpaError, Result};
use log::info;
use plotters::{coord::Shift, drawing::DrawingAreaErrorKind, prelude::*};
use std::{ops::Range, path::Path};

/// Output image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    #[cfg(feature = "bitmap")]
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            #[cfg(feature = "bitmap")]
            ImageFormat::Png => "png",
        }
    }
}

impl Default for ImageFormat {
    #[cfg(feature = "bitmap")]
    fn default() -> Self {
        ImageFormat::Png
    }

    #[cfg(not(feature = "bitmap"))]
    fn default() -> Self {
        ImageFormat::Svg
    }
}

/// A figure that can be drawn onto any plotters drawing area.
pub trait Chart {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Pixel dimensions of the figure.
    fn size(&self) -> (u32, u32);

    fn is_empty(&self) -> bool;

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<(), DB>;
}

fn chart_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> HpaError {
    HpaError::Chart(err.to_string())
}

/// Draw `chart` into a new image file at `path`.
pub fn render<C: Chart>(chart: &C, path: &Path, format: ImageFormat) -> Result<()> {
    if chart.is_empty() {
        return Err(HpaError::Chart(format!("{} chart has no data", chart.name())));
    }
    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, chart.size()).into_drawing_area();
            chart.draw(&root).map_err(chart_error)?;
        }
        #[cfg(feature = "bitmap")]
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, chart.size()).into_drawing_area();
            chart.draw(&root).map_err(chart_error)?;
        }
    }
    info!("{} chart saved as {}", chart.name(), path.display());
    Ok(())
}

/// Axis range spanning `values` with 5% headroom on both sides.
pub(crate) fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}
