//! Loading spinner

use dioxus::prelude::*;

/// Rotating ring with an optional caption underneath.
#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div { class: "spinner",
            div { class: "loading-spinner", "aria-hidden": "true" }
            if let Some(text) = label {
                span { class: "spinner__label", "{text}" }
            }
        }
    }
}
