use web_sys::MouseEvent;
use yew::prelude::*;

/// Shown in place of the chart while a request is pending
#[function_component(LoadingPlaceholder)]
pub fn loading_placeholder() -> Html {
    html! {
        <div class="chart-loading">
            <div class="loading-spinner"></div>
            <p>{"Loading chart..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
    pub message: AttrValue,
}

#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    html! {
        <div class="chart-error" role="alert">
            <i class="fas fa-exclamation-circle"></i>
            <p>{props.message.to_string()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WarningBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(WarningBanner)]
pub fn warning_banner(props: &WarningBannerProps) -> Html {
    html! {
        <div class="insights-warning" role="status">
            <span>{props.message.to_string()}</span>
            <button
                class="insights-warning-dismiss"
                onclick={props.on_dismiss.clone()}
                aria-label="Dismiss warning"
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
