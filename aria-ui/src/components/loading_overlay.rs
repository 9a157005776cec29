//! Full-viewport loading overlay

use dioxus::prelude::*;

/// Blocking overlay with a spinner, shown while a request is in flight.
///
/// Driven by a single flag, so hiding with no overlay present is a no-op.
#[component]
pub fn LoadingOverlay(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }
    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            div {
                class: "animate-spin rounded-full h-12 w-12 border-b-2 border-indigo-500",
                role: "status",
                aria_label: "Loading",
            }
        }
    }
}
