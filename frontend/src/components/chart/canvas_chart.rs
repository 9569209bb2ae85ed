use std::rc::Rc;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::InsightsDataset;
use web_sys::{Element, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::drawing::{draw_insights, ChartError};
use super::layout::PlotLayout;
use super::pointer_x;
use super::tooltip::tooltip_overlay;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct CanvasChartProps {
    pub dataset: Rc<InsightsDataset>,
    pub layout: PlotLayout,
}

pub enum Msg {
    PointerMove(MouseEvent),
    PointerLeave,
}

/// Chart drawn onto a `<canvas>` with plotters-canvas
pub struct CanvasChart {
    canvas_ref: NodeRef,
    hovered: Option<usize>,
    needs_redraw: bool,
}

impl Component for CanvasChart {
    type Message = Msg;
    type Properties = CanvasChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            hovered: None,
            needs_redraw: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerMove(event) => {
                let props = ctx.props();
                let hovered = self
                    .canvas_ref
                    .cast::<Element>()
                    .and_then(|canvas| pointer_x(&event, &canvas, props.layout.width))
                    .and_then(|x| props.layout.index_at(x, props.dataset.len()));
                self.set_hovered(hovered)
            }
            Msg::PointerLeave => self.set_hovered(None),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.dataset != old_props.dataset || props.layout != old_props.layout {
            self.hovered = None;
            self.needs_redraw = true;
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !(first_render || self.needs_redraw) {
            return;
        }
        self.needs_redraw = false;

        let props = ctx.props();
        if let Err(e) = self.draw(&props.dataset, &props.layout) {
            Logger::error_with_component("CanvasChart", &format!("Chart draw failed: {}", e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <div class="insights-chart" style="position: relative;">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="insights-chart-canvas"
                    width={props.layout.width.to_string()}
                    height={props.layout.height.to_string()}
                    style="width: 100%; height: auto; display: block;"
                    onmousemove={link.callback(Msg::PointerMove)}
                    onmouseleave={link.callback(|_| Msg::PointerLeave)}
                ></canvas>
                {tooltip_overlay(&props.dataset, &props.layout, self.hovered)}
            </div>
        }
    }
}

impl CanvasChart {
    fn set_hovered(&mut self, hovered: Option<usize>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.needs_redraw = true;
        true
    }

    fn draw(&self, dataset: &InsightsDataset, layout: &PlotLayout) -> Result<(), ChartError> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or(ChartError::CanvasUnavailable)?;
        let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::CanvasUnavailable)?;
        let root = backend.into_drawing_area();

        draw_insights(&root, dataset, layout, self.hovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{generate, CurveSet};

    fn unmounted_chart() -> CanvasChart {
        CanvasChart {
            canvas_ref: NodeRef::default(),
            hovered: None,
            needs_redraw: true,
        }
    }

    #[test]
    fn test_draw_without_canvas_reports_unavailable() {
        let chart = unmounted_chart();
        let dataset = generate(7, CurveSet::Ramp).unwrap();

        let result = chart.draw(&dataset, &PlotLayout::default());
        assert!(matches!(result, Err(ChartError::CanvasUnavailable)));
    }

    #[test]
    fn test_hover_change_requests_redraw() {
        let mut chart = unmounted_chart();
        chart.needs_redraw = false;

        assert!(chart.set_hovered(Some(3)));
        assert!(chart.needs_redraw);

        chart.needs_redraw = false;
        assert!(!chart.set_hovered(Some(3)));
        assert!(!chart.needs_redraw);

        assert!(chart.set_hovered(None));
        assert_eq!(chart.hovered, None);
    }
}
