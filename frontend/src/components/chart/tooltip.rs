use shared::{format_percent, InsightsDataset, MetricKind};
use yew::prelude::*;

use super::layout::PlotLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub name: &'static str,
    pub value: String,
    pub color: String,
}

/// Everything the hover tooltip shows for one day
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub day: String,
    pub rows: Vec<TooltipRow>,
}

impl TooltipContent {
    pub fn for_day(dataset: &InsightsDataset, index: usize) -> Option<Self> {
        let point = dataset.point(index)?;
        let rows = MetricKind::ALL
            .into_iter()
            .map(|kind| TooltipRow {
                name: kind.display_name(),
                value: format_percent(point.value(kind)),
                color: kind.css_color(),
            })
            .collect();

        Some(Self {
            day: point.day,
            rows,
        })
    }

    pub fn heading(&self) -> String {
        format!("Day: {}", self.day)
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    pub content: TooltipContent,
    /// Horizontal anchor as a percentage of the chart width
    pub left_percent: f64,
}

#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    // Flip to the left of the guide line on the right-hand side of the chart
    let shift = if props.left_percent > 60.0 {
        "translateX(calc(-100% - 12px))"
    } else {
        "translateX(12px)"
    };
    let style = format!(
        "position: absolute; top: 16px; left: {:.2}%; transform: {}; pointer-events: none;",
        props.left_percent, shift
    );

    html! {
        <div class="insights-tooltip" style={style}>
            <p class="insights-tooltip-day">{props.content.heading()}</p>
            {for props.content.rows.iter().map(|row| html! {
                <p class="insights-tooltip-row" style={format!("color: {};", row.color)}>
                    {format!("{}: {}", row.name, row.value)}
                </p>
            })}
        </div>
    }
}

/// Tooltip for the hovered day, or nothing
pub fn tooltip_overlay(dataset: &InsightsDataset, layout: &PlotLayout, hovered: Option<usize>) -> Html {
    let Some(index) = hovered else {
        return html! {};
    };
    match TooltipContent::for_day(dataset, index) {
        Some(content) => html! {
            <ChartTooltip
                content={content}
                left_percent={layout.x_percent(index, dataset.len())}
            />
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{generate, CurveSet};

    #[test]
    fn test_tooltip_lists_every_series() {
        let dataset = generate(30, CurveSet::Wave).unwrap();
        let content = TooltipContent::for_day(&dataset, 0).unwrap();

        assert_eq!(content.heading(), "Day: 01");
        let lines: Vec<String> = content
            .rows
            .iter()
            .map(|row| format!("{}: {}", row.name, row.value))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Application to Interview Rate: 40%",
                "Offer Acceptance Rate: 75%",
                "Rejection Rate: 87%",
            ]
        );
        assert_eq!(content.rows[2].color, "#f97316");
    }

    #[test]
    fn test_tooltip_out_of_range_day() {
        let dataset = generate(7, CurveSet::Ramp).unwrap();
        assert!(TooltipContent::for_day(&dataset, 7).is_none());
    }
}
