use shared::{InsightsDataset, Timeframe};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::InsightsConfig;
use crate::services::{InsightsClient, Logger};
use crate::state::{InsightsAction, InsightsState, RequestToken};

const COMPONENT: &str = "use_hiring_insights";

pub struct UseHiringInsightsResult {
    pub state: UseReducerHandle<InsightsState>,
    pub actions: UseHiringInsightsActions,
}

#[derive(Clone)]
pub struct UseHiringInsightsActions {
    pub toggle_dropdown: Callback<MouseEvent>,
    pub close_dropdown: Callback<MouseEvent>,
    pub select_timeframe: Callback<Timeframe>,
    pub dismiss_warning: Callback<MouseEvent>,
}

/// Hook owning the widget state and the generation requests behind it.
///
/// Mounting with `initial_data` shows it straight away; otherwise the
/// configured default timeframe is requested. Every request gets a fresh
/// token and only the newest one is allowed to update the chart.
#[hook]
pub fn use_hiring_insights(
    initial_data: Option<InsightsDataset>,
    config: &InsightsConfig,
) -> UseHiringInsightsResult {
    let has_seed = initial_data.is_some();
    let state = {
        let default_timeframe = config.default_timeframe;
        use_reducer(move || match initial_data {
            Some(dataset) => InsightsState::seeded(dataset, default_timeframe),
            None => InsightsState::loading(default_timeframe),
        })
    };
    let latest_token = use_mut_ref(RequestToken::default);
    let client = InsightsClient::from_config(config);

    let request = {
        let dispatcher = state.dispatcher();
        let latest_token = latest_token.clone();

        Callback::from(move |timeframe: Timeframe| {
            let token = {
                let mut latest = latest_token.borrow_mut();
                *latest = latest.next();
                *latest
            };
            dispatcher.dispatch(InsightsAction::Requested { timeframe, token });
            Logger::info_with_component(
                COMPONENT,
                &format!(
                    "Requesting {} ({:?}, {} ms simulated latency)",
                    timeframe,
                    token,
                    client.latency_ms()
                ),
            );

            let dispatcher = dispatcher.clone();
            let latest_token = latest_token.clone();
            let client = client.clone();
            spawn_local(async move {
                let result = client.get_hiring_insights(timeframe.days()).await;

                if *latest_token.borrow() != token {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Discarding stale response for {} ({:?})", timeframe, token),
                    );
                } else {
                    match &result {
                        Ok(dataset) => Logger::info_with_component(
                            COMPONENT,
                            &format!("Loaded {} days of hiring insights", dataset.len()),
                        ),
                        Err(e) => Logger::warn_with_component(
                            COMPONENT,
                            &format!("Hiring insights request failed: {}", e),
                        ),
                    }
                }

                dispatcher.dispatch(InsightsAction::Resolved { token, result });
            });
        })
    };

    // Initial generation when no dataset was injected
    {
        let request = request.clone();
        let default_timeframe = config.default_timeframe;
        use_effect_with((), move |_| {
            if has_seed {
                Logger::debug_with_component(COMPONENT, "Using injected dataset");
            } else {
                request.emit(default_timeframe);
            }
            || ()
        });
    }

    let toggle_dropdown = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(InsightsAction::ToggleDropdown))
    };

    let close_dropdown = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(InsightsAction::CloseDropdown);
        })
    };

    let dismiss_warning = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(InsightsAction::DismissWarning))
    };

    let actions = UseHiringInsightsActions {
        toggle_dropdown,
        close_dropdown,
        select_timeframe: request,
        dismiss_warning,
    };

    UseHiringInsightsResult {
        state,
        actions,
    }
}
