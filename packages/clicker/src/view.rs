use crate::ClickState;
use dioxus::prelude::*;

/// Button label while idle.
pub const IDLE_LABEL: &str = "Click Me!";

/// Button label while a click is in flight.
pub const LOADING_LABEL: &str = "Processing...";

/// What the clicker shows, derived from a [`ClickState`] and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickView {
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub error_banner: Option<String>,
    pub result_banner: Option<String>,
    pub count_line: Option<String>,
}

impl ClickView {
    /// A count of zero is never shown - it can't be told apart from "never fetched".
    pub fn from_state(state: &ClickState) -> Self {
        let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_string());

        Self {
            button_label: if state.loading {
                LOADING_LABEL
            } else {
                IDLE_LABEL
            },
            button_disabled: state.loading,
            error_banner: non_empty(&state.error),
            result_banner: non_empty(&state.message),
            count_line: (state.click_count > 0)
                .then(|| format!("Total clicks: {}", state.click_count)),
        }
    }
}

/// Renders a [`ClickView`]. Holds no state of its own.
#[component]
pub fn ClickPanel(view: ClickView, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        if let Some(error) = view.error_banner.as_ref() {
            div { class: "error", "{error}" }
        }
        div { class: "card",
            div { class: "clicker",
                button {
                    class: "btn",
                    disabled: view.button_disabled,
                    onclick: move |evt| onclick.call(evt),
                    "{view.button_label}"
                }
                if let Some(message) = view.result_banner.as_ref() {
                    div { class: "result", "{message}" }
                }
                if let Some(count) = view.count_line.as_ref() {
                    div { class: "count", "{count}" }
                }
            }
        }
    }
}
