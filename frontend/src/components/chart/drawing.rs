use std::fmt;

use plotters::coord::Shift;
use plotters::prelude::*;
use shared::{ChartPoint, InsightsDataset, MetricKind, MAX_PERCENT, MIN_PERCENT};
use thiserror::Error;

use super::layout::PlotLayout;

const FONT: &str = "Lato, sans-serif";
const AXIS_TEXT: RGBColor = RGBColor(0x6b, 0x72, 0x80);
const AXIS_LINE: RGBColor = RGBColor(0xd1, 0xd5, 0xdb);
const GRID_LINE: RGBColor = RGBColor(0xe5, 0xe7, 0xeb);
const HOVER_LINE: RGBColor = RGBColor(0x9c, 0xa3, 0xaf);
const MAX_X_LABELS: usize = 15;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart surface is not mounted")]
    CanvasUnavailable,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

fn draw_error(e: impl fmt::Display) -> ChartError {
    ChartError::Draw(e.to_string())
}

pub fn series_color(kind: MetricKind) -> RGBColor {
    let (r, g, b) = kind.rgb();
    RGBColor(r, g, b)
}

/// Day label for an x tick; ticks between days stay blank
fn tick_label(points: &[ChartPoint], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    points
        .get(nearest as usize)
        .map(|point| point.day.clone())
        .unwrap_or_default()
}

/// (day index, value) pairs of one metric
fn series_coords(points: &[ChartPoint], kind: MetricKind) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.value(kind)))
        .collect()
}

/// Draw the three metric lines onto any plotters backend.
///
/// Y is fixed to 0-100% with horizontal grid lines only. When `hovered` is
/// set a guide line and a dot per series mark that day.
pub fn draw_insights<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    dataset: &InsightsDataset,
    layout: &PlotLayout,
    hovered: Option<usize>,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(draw_error)?;
    let points = dataset.points();

    let mut chart = ChartBuilder::on(root)
        .margin(layout.margin)
        .x_label_area_size(layout.x_label_area)
        .y_label_area_size(layout.y_label_area)
        .build_cartesian_2d(0f64..layout.x_span(points.len()), MIN_PERCENT..MAX_PERCENT)
        .map_err(draw_error)?;

    let x_formatter = |x: &f64| tick_label(&points, *x);
    let y_formatter = |y: &f64| format!("{:.0}%", y);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len().min(MAX_X_LABELS))
        .y_labels(6)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style((FONT, 12, &AXIS_TEXT))
        .axis_style(&AXIS_LINE)
        .bold_line_style(&GRID_LINE)
        .max_light_lines(0)
        .draw()
        .map_err(draw_error)?;

    let hovered = hovered.and_then(|index| Some((index, points.get(index)?)));
    if let Some((index, _)) = hovered {
        let x = index as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, MIN_PERCENT), (x, MAX_PERCENT)],
                HOVER_LINE.stroke_width(1),
            )))
            .map_err(draw_error)?;
    }

    for kind in MetricKind::ALL {
        let color = series_color(kind);

        chart
            .draw_series(LineSeries::new(series_coords(&points, kind), color.stroke_width(2)))
            .map_err(draw_error)?;

        if let Some((index, point)) = hovered {
            chart
                .draw_series(std::iter::once(Circle::new(
                    (index as f64, point.value(kind)),
                    4,
                    color.filled(),
                )))
                .map_err(draw_error)?;
        }
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{generate, CurveSet};

    #[test]
    fn test_tick_label_on_whole_days() {
        let points = generate(7, CurveSet::Ramp).unwrap().points();
        assert_eq!(tick_label(&points, 0.0), "01");
        assert_eq!(tick_label(&points, 6.0), "07");
        assert_eq!(tick_label(&points, 2.5), "");
        assert_eq!(tick_label(&points, 9.0), "");
    }

    #[test]
    fn test_series_coords_follow_points() {
        let points = generate(30, CurveSet::Wave).unwrap().points();
        let coords = series_coords(&points, MetricKind::OfferAcceptance);
        assert_eq!(coords.len(), 30);
        assert_eq!(coords[0], (0.0, 75.0));
        assert_eq!(coords[29].0, 29.0);
        assert!(series_coords(&[], MetricKind::Rejection).is_empty());
    }

    #[test]
    fn test_series_colors_match_metrics() {
        let color = series_color(MetricKind::OfferAcceptance);
        assert_eq!((color.0, color.1, color.2), (0x8b, 0x5c, 0xf6));
    }

    #[test]
    fn test_chart_error_messages() {
        assert_eq!(ChartError::CanvasUnavailable.to_string(), "chart surface is not mounted");
        assert_eq!(draw_error("bad font").to_string(), "failed to draw chart: bad font");
    }
}
