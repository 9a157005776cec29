//! Confirm dialog view component

use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use dioxus::prelude::*;

/// A confirmation dialog that can hold itself open while the confirmed
/// action is in flight.
///
/// While `is_pending` is set both buttons are disabled, the confirm button
/// shows `pending_label`, and Escape/backdrop dismissal is ignored: the
/// dialog only closes once the caller settles the request.
#[component]
pub fn ConfirmDialogView(
    is_open: ReadSignal<bool>,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Working...".to_string())] pending_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default)] is_pending: bool,
    #[props(default = true)] is_destructive: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_variant = if is_destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        Modal {
            is_open,
            on_close: move |_| {
                if !is_pending {
                    on_cancel.call(());
                }
            },
            div { class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4",
                h2 { class: "text-xl font-bold text-white mb-4", "{title}" }
                p { class: "text-gray-300 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        disabled: is_pending,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: confirm_variant,
                        size: ButtonSize::Medium,
                        disabled: is_pending,
                        onclick: move |_| on_confirm.call(()),
                        if is_pending {
                            "{pending_label}"
                        } else {
                            "{confirm_label}"
                        }
                    }
                }
            }
        }
    }
}
