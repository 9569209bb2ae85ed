use shared::Timeframe;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeframeSelectorProps {
    pub selected: Timeframe,
    pub is_open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
    pub on_select: Callback<Timeframe>,
}

/// Dropdown button listing the selectable timeframes
#[function_component(TimeframeSelector)]
pub fn timeframe_selector(props: &TimeframeSelectorProps) -> Html {
    let on_menu_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="timeframe-selector">
            <button
                class="timeframe-selector-button"
                onclick={props.on_toggle.clone()}
                aria-haspopup="listbox"
                aria-expanded={props.is_open.to_string()}
            >
                {props.selected.label()}
                <i class="fas fa-chevron-down"></i>
            </button>

            if props.is_open {
                <>
                    <div class="timeframe-selector-backdrop" onclick={props.on_close.clone()}></div>
                    <ul class="timeframe-selector-dropdown" role="listbox" onclick={on_menu_click}>
                        {for Timeframe::ALL.into_iter().map(|timeframe| {
                            let is_active = timeframe == props.selected;
                            let on_click = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(timeframe))
                            };

                            html! {
                                <li key={timeframe.days()}>
                                    <button
                                        class={classes!("timeframe-selector-item", is_active.then_some("active"))}
                                        role="option"
                                        aria-selected={is_active.to_string()}
                                        onclick={on_click}
                                    >
                                        {timeframe.label()}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                </>
            }
        </div>
    }
}
