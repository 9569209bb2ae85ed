use std::rc::Rc;

use plotters::prelude::*;
use shared::InsightsDataset;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::drawing::{draw_insights, ChartError};
use super::layout::PlotLayout;
use super::pointer_x;
use super::tooltip::tooltip_overlay;
use crate::components::loading::InlineError;
use crate::services::logging::Logger;

/// Render the chart to an SVG document string
pub fn render_svg(
    dataset: &InsightsDataset,
    layout: &PlotLayout,
    hovered: Option<usize>,
) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (layout.width, layout.height)).into_drawing_area();
        draw_insights(&root, dataset, layout, hovered)?;
    }
    Ok(svg)
}

#[derive(Properties, PartialEq)]
pub struct SvgChartProps {
    pub dataset: Rc<InsightsDataset>,
    pub layout: PlotLayout,
}

/// Alternative to the canvas chart that inlines plotters' SVG output
#[function_component(SvgChart)]
pub fn svg_chart(props: &SvgChartProps) -> Html {
    let hovered = use_state(|| Option::<usize>::None);
    let container_ref = use_node_ref();

    {
        let hovered = hovered.clone();
        use_effect_with(props.dataset.clone(), move |_| {
            hovered.set(None);
            || ()
        });
    }

    let markup = use_memo(
        (props.dataset.clone(), props.layout, *hovered),
        |(dataset, layout, hovered)| render_svg(dataset, layout, *hovered),
    );

    let on_pointer_move = {
        let hovered = hovered.clone();
        let container_ref = container_ref.clone();
        let dataset = props.dataset.clone();
        let layout = props.layout;
        Callback::from(move |event: MouseEvent| {
            let index = container_ref
                .cast::<Element>()
                .and_then(|container| pointer_x(&event, &container, layout.width))
                .and_then(|x| layout.index_at(x, dataset.len()));
            if *hovered != index {
                hovered.set(index);
            }
        })
    };

    let on_pointer_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let body = match &*markup {
        Ok(svg) => Html::from_html_unchecked(AttrValue::from(svg.clone())),
        Err(e) => {
            Logger::error_with_component("SvgChart", &format!("Chart render failed: {}", e));
            html! { <InlineError message={e.to_string()} /> }
        }
    };

    html! {
        <div
            ref={container_ref}
            class="insights-chart insights-chart-svg"
            style="position: relative;"
            onmousemove={on_pointer_move}
            onmouseleave={on_pointer_leave}
        >
            {body}
            {tooltip_overlay(&props.dataset, &props.layout, *hovered)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{generate, CurveSet};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_svg_contains_every_series_color() {
        let dataset = generate(14, CurveSet::Ramp).unwrap();
        let svg = render_svg(&dataset, &PlotLayout::default(), None).unwrap().to_lowercase();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("#22c55e"));
        assert!(svg.contains("#8b5cf6"));
        assert!(svg.contains("#f97316"));
    }

    #[wasm_bindgen_test]
    fn test_svg_marks_hovered_day() {
        let dataset = generate(7, CurveSet::Wave).unwrap();
        let plain = render_svg(&dataset, &PlotLayout::default(), None).unwrap();
        let hovered = render_svg(&dataset, &PlotLayout::default(), Some(3)).unwrap();

        assert!(hovered.matches("<circle").count() > plain.matches("<circle").count());
    }
}
