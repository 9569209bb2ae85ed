pub mod canvas_chart;
pub mod drawing;
pub mod layout;
pub mod legend;
pub mod svg_chart;
pub mod tooltip;

use std::rc::Rc;

use shared::InsightsDataset;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::ChartRenderer;

pub use canvas_chart::CanvasChart;
pub use layout::PlotLayout;
pub use legend::ChartLegend;
pub use svg_chart::SvgChart;

#[derive(Properties, PartialEq)]
pub struct InsightsChartProps {
    pub dataset: Rc<InsightsDataset>,
    pub layout: PlotLayout,
    #[prop_or_default]
    pub renderer: ChartRenderer,
}

/// Line chart plus legend, drawn by the configured backend
#[function_component(InsightsChart)]
pub fn insights_chart(props: &InsightsChartProps) -> Html {
    let chart = match props.renderer {
        ChartRenderer::Canvas => html! {
            <CanvasChart dataset={props.dataset.clone()} layout={props.layout} />
        },
        ChartRenderer::Svg => html! {
            <SvgChart dataset={props.dataset.clone()} layout={props.layout} />
        },
    };

    html! {
        <div class="insights-chart-container">
            {chart}
            <ChartLegend />
        </div>
    }
}

/// Pointer x in chart pixels, accounting for CSS scaling of the element
pub(crate) fn pointer_x(event: &MouseEvent, element: &Element, layout_width: u32) -> Option<f64> {
    let rect = element.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    Some((event.client_x() as f64 - rect.left()) * layout_width as f64 / rect.width())
}
