use crate::domain::model::{RiskSet, StatisticsSummary};
use crate::utils::error::{Result, SimError};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::full_palette::ORANGE;

/// 6.4 x 4.8 inch figure at 300 dpi.
const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1440;

pub const DEFAULT_BINS: usize = 50;

/// Render the risk distribution histogram with the four statistic markers
/// and return the encoded PNG bytes. Binning is the only computation done
/// here; all statistics come in via the summary.
pub fn render_histogram(
    risks: &RiskSet,
    summary: &StatisticsSummary,
    bins: usize,
) -> Result<Vec<u8>> {
    if risks.is_empty() {
        return Err(SimError::EmptyInput {
            what: "cannot draw a histogram of zero samples".to_string(),
        });
    }
    if bins == 0 {
        return Err(SimError::RenderError {
            message: "bin count must be positive".to_string(),
        });
    }

    let (lo, hi, counts) = bin_counts(risks.values(), bins);
    let bin_width = (hi - lo) / bins as f64;
    let y_top = counts.iter().copied().max().unwrap_or(1).max(1) as f64 * 1.05;

    let mut frame = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut frame, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Distribution of Risk from Monte Carlo Simulation",
                ("sans-serif", 44),
            )
            .margin(24)
            .x_label_area_size(64)
            .y_label_area_size(80)
            .build_cartesian_2d(lo..hi, 0.0..y_top)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Risk ($)")
            .y_desc("Frequency")
            .axis_desc_style(("sans-serif", 28))
            .label_style(("sans-serif", 22))
            .draw()
            .map_err(render_err)?;

        // Semi-transparent bars with black edges.
        chart
            .draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x0 = lo + bin_width * i as f64;
                Rectangle::new([(x0, 0.0), (x0 + bin_width, count as f64)], BLUE.mix(0.7).filled())
            }))
            .map_err(render_err)?;
        chart
            .draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x0 = lo + bin_width * i as f64;
                Rectangle::new([(x0, 0.0), (x0 + bin_width, count as f64)], BLACK.stroke_width(1))
            }))
            .map_err(render_err)?;

        // Vertical markers: dashed for mean/median, dotted for the tails.
        chart
            .draw_series(DashedLineSeries::new(
                [(summary.mean, 0.0), (summary.mean, y_top)],
                8,
                6,
                RED.stroke_width(3),
            ))
            .map_err(render_err)?
            .label(format!("Mean: {:.2}", summary.mean))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(3)));

        chart
            .draw_series(DashedLineSeries::new(
                [(summary.median, 0.0), (summary.median, y_top)],
                8,
                6,
                BLUE.stroke_width(3),
            ))
            .map_err(render_err)?
            .label(format!("Median: {:.2}", summary.median))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(3)));

        chart
            .draw_series(DashedLineSeries::new(
                [(summary.p5, 0.0), (summary.p5, y_top)],
                2,
                6,
                GREEN.stroke_width(3),
            ))
            .map_err(render_err)?
            .label(format!("5th %: {:.2}", summary.p5))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(3)));

        chart
            .draw_series(DashedLineSeries::new(
                [(summary.p95, 0.0), (summary.p95, y_top)],
                2,
                6,
                ORANGE.stroke_width(3),
            ))
            .map_err(render_err)?
            .label(format!("95th %: {:.2}", summary.p95))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORANGE.stroke_width(3)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font(("sans-serif", 24))
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&frame, WIDTH, HEIGHT, ExtendedColorType::Rgb8)?;

    Ok(png)
}

/// Equal-width bins over the observed value range. An all-equal data set
/// gets a widened range so the bars keep a drawable width.
fn bin_counts(values: &[f64], bins: usize) -> (f64, f64, Vec<u32>) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    (lo, hi, counts)
}

fn render_err<E: std::fmt::Display>(e: E) -> SimError {
    SimError::RenderError {
        message: e.to_string(),
    }
}
