//! Hover tooltip with delayed show
//!
//! Wraps its children in a positioning span; the bubble appears above the
//! trigger after a short hover delay and hides immediately on mouse leave.
//! Leaving before the delay elapses cancels the pending show.

use dioxus::prelude::*;
use dioxus::core::Task;

use crate::wasm_utils::sleep_ms;

/// Delay before showing the tooltip (in milliseconds)
const TOOLTIP_DELAY_MS: u64 = 700;

#[component]
pub fn Tooltip(
    /// The tooltip text to display
    text: String,
    children: Element,
) -> Element {
    let mut is_visible = use_signal(|| false);
    let mut hover_task = use_signal(|| None::<Task>);

    rsx! {
        span {
            class: "relative inline-flex min-w-0",
            onmouseenter: move |_| {
                if let Some(task) = hover_task.take() {
                    task.cancel();
                }
                let task = spawn(async move {
                    sleep_ms(TOOLTIP_DELAY_MS).await;
                    is_visible.set(true);
                });
                hover_task.set(Some(task));
            },
            onmouseleave: move |_| {
                if let Some(task) = hover_task.take() {
                    task.cancel();
                }
                is_visible.set(false);
            },
            {children}
            if is_visible() {
                span {
                    class: "absolute bottom-full left-1/2 -translate-x-1/2 mb-1.5 z-50 px-2.5 py-1.5 text-xs leading-relaxed text-gray-200 bg-gray-900 rounded-lg shadow-xl border border-white/5 whitespace-nowrap",
                    role: "tooltip",
                    "{text}"
                }
            }
        }
    }
}
