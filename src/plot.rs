//! Multi-panel distribution plot rendering.
//!
//! One panel per requested variable on a grid of at most 2 columns. Numeric
//! variables get a histogram (Freedman-Diaconis binning, clamped to 5..50
//! bins) with an overlaid Gaussian-KDE density curve scaled to count space;
//! categorical variables get a horizontal bar chart of the top 20 values.
//! Variables with no valid data leave their cell blank, as do unused cells
//! when the variable count is odd.

use crate::analyser::profiling;
use crate::analyser::types::VariableKind;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use polars::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

const PANEL_WIDTH: u32 = 700;
const PANEL_HEIGHT: u32 = 500;
const TOP_CATEGORIES: usize = 20;
const KDE_STEPS: usize = 200;

const BAR_COLOR: RGBColor = RGBColor(91, 155, 213);
const DENSITY_COLOR: RGBColor = RGBColor(237, 125, 49);

/// Render the plot grid to `path`, overwriting any previous image.
pub fn render_plots(df: &DataFrame, variables: &[String], path: &Path) -> Result<()> {
    if variables.is_empty() {
        return Ok(());
    }
    let cols = variables.len().min(2);
    let rows = variables.len().div_ceil(cols);

    let size = (PANEL_WIDTH * cols as u32, PANEL_HEIGHT * rows as u32);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("Failed to initialize plot canvas: {e}"))?;

    let areas = root.split_evenly((rows, cols));
    for (area, name) in areas.iter().zip(variables) {
        let col = df.column(name)?;
        match profiling::classify_column(col) {
            VariableKind::Numeric => draw_numeric_panel(area, name, col)?,
            VariableKind::Categorical => draw_categorical_panel(area, name, col)?,
        }
    }

    root.present()
        .map_err(|e| anyhow::anyhow!("Failed to write plot image: {e}"))?;
    tracing::info!("Plot image written to {}", path.display());
    Ok(())
}

fn draw_numeric_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    name: &str,
    col: &Column,
) -> Result<()> {
    let values = profiling::numeric_values(col)?;
    if values.is_empty() {
        return Ok(());
    }

    let (bin_width, bins) = histogram_bins(&values);
    let x_min = bins[0].0;
    let x_max = bins[bins.len() - 1].0 + bin_width;
    let y_max = (bins.iter().map(|b| b.1).max().unwrap_or(1) as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("Distribution of {name}"), ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(|e| anyhow::anyhow!("Failed to build chart for '{name}': {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Value")
        .y_desc("Frequency")
        .draw()
        .map_err(|e| anyhow::anyhow!("Failed to draw mesh for '{name}': {e}"))?;

    chart
        .draw_series(bins.iter().map(|&(x, count)| {
            Rectangle::new(
                [(x, 0.0), (x + bin_width, count as f64)],
                BAR_COLOR.mix(0.8).filled(),
            )
        }))
        .map_err(|e| anyhow::anyhow!("Failed to draw histogram for '{name}': {e}"))?;

    let curve = density_curve(&values, x_min, x_max, bin_width);
    if !curve.is_empty() {
        chart
            .draw_series(LineSeries::new(curve, DENSITY_COLOR.stroke_width(2)))
            .map_err(|e| anyhow::anyhow!("Failed to draw density curve for '{name}': {e}"))?;
    }

    Ok(())
}

fn draw_categorical_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    name: &str,
    col: &Column,
) -> Result<()> {
    let values = profiling::string_values(col)?;
    if values.is_empty() {
        return Ok(());
    }

    let table = profiling::frequency_table(&values);
    let top: Vec<_> = table.into_iter().take(TOP_CATEGORIES).collect();
    let n = top.len();
    let x_max = (top[0].count as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("Distribution of {name}"), ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..x_max, 0f64..n as f64)
        .map_err(|e| anyhow::anyhow!("Failed to build chart for '{name}': {e}"))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_label_formatter(&|_| String::new())
        .x_desc("Frequency")
        .y_desc(name)
        .draw()
        .map_err(|e| anyhow::anyhow!("Failed to draw mesh for '{name}': {e}"))?;

    // Most frequent value on the top band.
    chart
        .draw_series(top.iter().enumerate().map(|(rank, entry)| {
            let y0 = (n - 1 - rank) as f64 + 0.1;
            let y1 = (n - rank) as f64 - 0.1;
            Rectangle::new([(0.0, y0), (entry.count as f64, y1)], BAR_COLOR.filled())
        }))
        .map_err(|e| anyhow::anyhow!("Failed to draw bars for '{name}': {e}"))?;

    chart
        .draw_series(top.iter().enumerate().map(|(rank, entry)| {
            let y_mid = (n - rank) as f64 - 0.55;
            Text::new(entry.value.clone(), (x_max * 0.01, y_mid), ("sans-serif", 14))
        }))
        .map_err(|e| anyhow::anyhow!("Failed to draw bar labels for '{name}': {e}"))?;

    Ok(())
}

/// Freedman-Diaconis histogram over the clean series. Returns the bin width
/// and per-bin `(start, count)` pairs; a constant series gets a single
/// unit-width bin centred on the value.
fn histogram_bins(values: &[f64]) -> (f64, Vec<(f64, usize)>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let n = values.len();

    if (max - min).abs() < f64::EPSILON {
        return (1.0, vec![(min - 0.5, n)]);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let iqr = percentile(&sorted, 0.75) - percentile(&sorted, 0.25);
    let h = if iqr > 0.0 {
        2.0 * iqr / (n as f64).cbrt()
    } else {
        (max - min) / (n as f64).sqrt()
    };

    let num_bins = (((max - min) / h).ceil() as usize).clamp(5, 50);
    let bin_width = (max - min) / num_bins as f64;

    let mut bins = vec![0usize; num_bins];
    for &value in values {
        let idx = ((value - min) / bin_width).floor() as usize;
        if idx < num_bins {
            bins[idx] += 1;
        } else if (value - max).abs() < f64::EPSILON {
            bins[num_bins - 1] += 1;
        }
    }

    let bins = bins
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + i as f64 * bin_width, count))
        .collect();
    (bin_width, bins)
}

/// Linear-interpolated percentile over a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Gaussian KDE with Silverman's bandwidth, evaluated across the histogram
/// range and scaled to count space so the curve overlays the bars. Empty for
/// series too short or too flat to estimate a bandwidth.
fn density_curve(values: &[f64], x0: f64, x1: f64, bin_width: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let iqr = percentile(&sorted, 0.75) - percentile(&sorted, 0.25);

    let spread = if iqr > 0.0 {
        std_dev.min(iqr / 1.34)
    } else {
        std_dev
    };
    if spread <= 0.0 {
        return Vec::new();
    }
    let bandwidth = 0.9 * spread * (n as f64).powf(-0.2);

    let norm = n as f64 * bandwidth * (2.0 * PI).sqrt();
    (0..=KDE_STEPS)
        .map(|i| {
            let x = x0 + (x1 - x0) * i as f64 / KDE_STEPS as f64;
            let density = values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                / norm;
            (x, density * n as f64 * bin_width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bins_cover_all_values() {
        let values = vec![1.0, 1.0, 2.0, 3.0, 10.0];
        let (bin_width, bins) = histogram_bins(&values);
        assert!(bin_width > 0.0);
        let total: usize = bins.iter().map(|b| b.1).sum();
        assert_eq!(total, 5);
        assert!(bins.len() >= 5 && bins.len() <= 50);
    }

    #[test]
    fn test_histogram_single_value() {
        let (bin_width, bins) = histogram_bins(&[2.0, 2.0, 2.0]);
        assert_eq!(bin_width, 1.0);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].1, 3);
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&sorted, 0.5) - 2.5).abs() < 1e-9);
        assert!((percentile(&sorted, 0.0) - 1.0).abs() < 1e-9);
        assert!((percentile(&sorted, 1.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_curve_empty_for_constant_series() {
        assert!(density_curve(&[5.0, 5.0, 5.0], 0.0, 10.0, 1.0).is_empty());
    }

    #[test]
    fn test_density_curve_integrates_to_count() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let curve = density_curve(&values, -5.0, 15.0, 1.0);
        assert!(!curve.is_empty());
        // Riemann sum of density over the range approximates n * bin_width.
        let step = 20.0 / KDE_STEPS as f64;
        let mass: f64 = curve.iter().map(|&(_, y)| y * step).sum();
        assert!((mass - 8.0).abs() < 0.5, "mass = {mass}");
    }
}
