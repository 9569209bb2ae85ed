use shared::MetricKind;
use yew::prelude::*;

#[function_component(ChartLegend)]
pub fn chart_legend() -> Html {
    html! {
        <ul class="insights-legend">
            {for MetricKind::ALL.into_iter().map(|kind| html! {
                <li class="insights-legend-item">
                    <span
                        class="insights-legend-dot"
                        style={format!("background-color: {};", kind.css_color())}
                    ></span>
                    <span class="insights-legend-name">{kind.display_name()}</span>
                </li>
            })}
        </ul>
    }
}
