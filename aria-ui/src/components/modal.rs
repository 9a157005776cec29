//! Modal component using the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape handling and
//! `::backdrop` styling for free. The dialog manages its own visibility
//! (display: none when closed), so layout lives on an inner fixed container.
//! `showModal()` throws if the dialog is already open, so the effect checks
//! the current state before toggling.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

/// Counter for generating unique modal IDs
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Modal that wraps content in a native `<dialog>` element
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called when the modal should close (Escape key or backdrop click)
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
    /// Optional CSS class for the dialog element
    #[props(default)]
    class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{id}")
    });
    let dialog_id_for_effect = dialog_id.clone();

    // Drive showModal()/close() from the open signal, idempotently (the
    // effect may run multiple times for one logical change).
    use_effect(move || {
        let is_open = is_open();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dialog_id_for_effect) else {
            return;
        };
        let Ok(dialog) = element.dyn_into::<web_sys::HtmlDialogElement>() else {
            return;
        };

        if is_open {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        } else if dialog.open() {
            dialog.close();
        }
    });

    let dialog_class = class.unwrap_or_default();

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 {dialog_class}",
            // Escape key fires 'cancel'
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                // Fixed container for backdrop click handling and centering
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    // Inner wrapper stops propagation so content clicks don't close
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
