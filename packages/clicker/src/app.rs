use crate::{ClickController, ClickPanel, ClickState, ClickView, ClientConfig};
use dioxus::prelude::*;

/// The clicker itself: a button wired to a [`ClickController`] found in context.
///
/// The controller is provided by an ancestor (usually [`App`]), which is what lets tests drive the
/// component with a fake transport.
#[component]
pub fn Clicker() -> Element {
    let controller = use_context::<ClickController>();
    let mut state = use_signal(ClickState::default);

    let view = ClickView::from_state(&state.read());

    rsx! {
        ClickPanel {
            view,
            onclick: move |_| {
                let controller = controller.clone();
                spawn(async move {
                    controller.handle_click(&mut state).await;
                });
            }
        }
    }
}

/// The page: a header, the clicker, and a short description of how the pieces fit together.
///
/// Uses the [`ClientConfig`] from context if the launcher provided one, otherwise the defaults.
/// A [`ClickController`] already in context wins over building an HTTP one.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<ClientConfig>().unwrap_or_default();
    let existing = try_use_context::<ClickController>();
    use_context_provider(move || existing.unwrap_or_else(|| ClickController::http(&config)));

    rsx! {
        div { class: "container",
            div { class: "header",
                h1 { "Clicker" }
                p { "A button, a counter endpoint, and a number that goes up" }
            }
            Clicker {}
            div { class: "card",
                h3 { "Architecture" }
                ul {
                    li { strong { "Frontend: " } "Dioxus (this page)" }
                    li { strong { "Backend: " } "axum counter endpoint" }
                    li { strong { "Storage: " } "append-only click log" }
                }
            }
        }
    }
}
