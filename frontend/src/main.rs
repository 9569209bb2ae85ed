mod components;
mod config;
mod hooks;
mod services;
mod state;

use shared::InsightsDataset;
use web_sys::Element;
use yew::prelude::*;

use crate::components::HiringInsights;
use crate::config::{HostOptions, InsightsConfig};
use crate::services::Logger;

/// Page element that may carry a JSON dataset to show on mount
const SEED_ELEMENT_ID: &str = "hiring-insights-seed";

fn seed_element() -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(SEED_ELEMENT_ID)
}

/// Read `data-renderer` and `data-mock` from the seed element
fn read_host_options(element: Option<&Element>) -> HostOptions {
    match element {
        Some(element) => HostOptions::from_attributes(
            element.get_attribute("data-renderer").as_deref(),
            element.get_attribute("data-mock").as_deref(),
        ),
        None => HostOptions::default(),
    }
}

/// Read the injected dataset, if the page provides a valid one.
///
/// A JSON body wins over `data-mock`; with neither the widget starts loading.
fn read_seed(element: Option<&Element>, options: &HostOptions) -> Option<InsightsDataset> {
    let text = element
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty());

    if let Some(text) = text {
        return match serde_json::from_str::<InsightsDataset>(&text) {
            Ok(dataset) => {
                Logger::info_with_component("App", &format!("Loaded {}-day seed dataset", dataset.len()));
                Some(dataset)
            }
            Err(e) => {
                Logger::warn_with_component("App", &format!("Ignoring invalid seed dataset: {}", e));
                None
            }
        };
    }

    match options.mock_dataset()? {
        Ok(dataset) => {
            Logger::info_with_component("App", &format!("Injecting {}-day mock dataset", dataset.len()));
            Some(dataset)
        }
        Err(e) => {
            Logger::error_with_component("App", &format!("Failed to build mock dataset: {}", e));
            None
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_memo((), |_| {
        let element = seed_element();
        let options = read_host_options(element.as_ref());
        let seed = read_seed(element.as_ref(), &options);
        (options.apply(InsightsConfig::default()), seed)
    });
    let (config, seed) = (*page).clone();

    html! {
        <main class="insights-page">
            <HiringInsights initial_data={seed} config={config} />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
