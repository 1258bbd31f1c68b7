use async_trait::async_trait;
use clicker::types::HelloResponse;
use clicker::*;
use dioxus::prelude::*;

fn render_view(view: ClickView) -> String {
    fn harness(view: ClickView) -> Element {
        rsx! {
            ClickPanel { view, onclick: move |_| {} }
        }
    }

    let mut dom = VirtualDom::new_with_props(harness, view);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_state(state: ClickState) -> String {
    render_view(ClickView::from_state(&state))
}

#[test]
fn idle_renders_only_the_button() {
    let html = render_state(ClickState::default());

    assert!(html.contains("Click Me!"));
    assert!(!html.contains("disabled"));
    assert!(!html.contains("Processing..."));
    assert!(!html.contains(r#"class="error""#));
    assert!(!html.contains(r#"class="result""#));
    assert!(!html.contains(r#"class="count""#));
}

#[test]
fn loading_renders_a_disabled_button() {
    let html = render_state(ClickState {
        loading: true,
        ..Default::default()
    });

    assert!(html.contains("Processing..."));
    assert!(html.contains("disabled"));
    assert!(!html.contains("Click Me!"));
}

#[test]
fn result_and_count_render_their_text() {
    let html = render_state(ClickState {
        message: "Hello!".to_string(),
        click_count: 3,
        ..Default::default()
    });

    assert!(html.contains(r#"<div class="result">Hello!</div>"#));
    assert!(html.contains(r#"<div class="count">Total clicks: 3</div>"#));
    assert!(!html.contains(r#"class="error""#));
}

#[test]
fn error_renders_next_to_a_stale_result() {
    let html = render_state(ClickState {
        message: "Hello!".to_string(),
        click_count: 3,
        error: "Failed to connect to server: connection failed: refused".to_string(),
        loading: false,
    });

    assert!(html.contains(
        r#"<div class="error">Failed to connect to server: connection failed: refused</div>"#
    ));
    assert!(html.contains(r#"<div class="result">Hello!</div>"#));
}

#[test]
fn rendering_is_a_pure_function_of_state() {
    let state = ClickState {
        message: "Hello!".to_string(),
        click_count: 12,
        error: "Failed to connect to server: server responded with status 500".to_string(),
        loading: true,
    };

    assert_eq!(
        ClickView::from_state(&state),
        ClickView::from_state(&state.clone())
    );
    assert_eq!(render_state(state.clone()), render_state(state));
}

struct Unreachable;

#[async_trait(?Send)]
impl CounterTransport for Unreachable {
    async fn increment(&self) -> Result<HelloResponse, RequestFailed> {
        Err(RequestFailed::Connect("unreachable".to_string()))
    }
}

#[test]
fn clicker_starts_idle() {
    let mut dom =
        VirtualDom::new(Clicker).with_root_context(ClickController::new(Unreachable));
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Click Me!"));
    assert!(!html.contains(r#"class="error""#));
    assert!(!html.contains(r#"class="result""#));
}

#[test]
fn app_renders_the_clicker_with_launcher_config() {
    let mut dom = VirtualDom::new(App).with_root_context(ClientConfig::default());
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("<h1>Clicker</h1>"));
    assert!(html.contains("Click Me!"));
}
