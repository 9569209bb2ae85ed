use shared::InsightsDataset;
use yew::prelude::*;

use super::chart::InsightsChart;
use super::loading::{InlineError, LoadingPlaceholder, WarningBanner};
use super::timeframe_selector::TimeframeSelector;
use crate::config::InsightsConfig;
use crate::hooks::use_hiring_insights;
use crate::services::logging::Logger;
use crate::state::ChartStatus;

#[derive(Properties, PartialEq)]
pub struct HiringInsightsProps {
    /// Dataset to show on mount instead of generating one
    #[prop_or_default]
    pub initial_data: Option<InsightsDataset>,
    #[prop_or_default]
    pub config: InsightsConfig,
}

/// Hiring Insights card: timeframe dropdown over a three-series line chart
#[function_component(HiringInsights)]
pub fn hiring_insights(props: &HiringInsightsProps) -> Html {
    // Declared before the widget hook so the level is set ahead of its mount request
    use_effect_with(props.config.log_level, |level| {
        Logger::set_min_level(*level);
        || ()
    });

    let insights = use_hiring_insights(props.initial_data.clone(), &props.config);
    let state = &insights.state;
    let actions = &insights.actions;

    let body = match &state.status {
        ChartStatus::Loading => html! { <LoadingPlaceholder /> },
        ChartStatus::Failed(message) => html! { <InlineError message={message.clone()} /> },
        ChartStatus::Ready => match state.displayed() {
            Some(dataset) => html! {
                <InsightsChart
                    dataset={dataset.clone()}
                    layout={props.config.layout()}
                    renderer={props.config.renderer}
                />
            },
            None => html! { <LoadingPlaceholder /> },
        },
    };

    html! {
        <section class="hiring-insights" aria-busy={state.is_loading().to_string()}>
            <div class="hiring-insights-header">
                <h2>{"Hiring Insights"}</h2>
                <TimeframeSelector
                    selected={state.timeframe}
                    is_open={state.dropdown_open}
                    on_toggle={actions.toggle_dropdown.clone()}
                    on_close={actions.close_dropdown.clone()}
                    on_select={actions.select_timeframe.clone()}
                />
            </div>

            if let Some(warning) = state.warning.clone() {
                <WarningBanner message={warning} on_dismiss={actions.dismiss_warning.clone()} />
            }

            {body}
        </section>
    }
}
