//! Styled native select
//!
//! Keeps the platform `<select>` (keyboard and mobile behavior for free) and
//! themes it to match the dark palette.
//!
//! ```ignore
//! Select {
//!     value: "track",
//!     onchange: move |val: String| { ... },
//!     SelectOption { value: "track", label: "Track" }
//!     SelectOption { value: "album", label: "Album" }
//! }
//! ```

use dioxus::prelude::*;

/// Custom-styled native select
#[component]
pub fn Select(
    /// Currently selected value
    value: String,
    /// Called when selection changes
    onchange: EventHandler<String>,
    /// Whether the select is disabled
    #[props(default)]
    disabled: bool,
    #[props(default)] id: Option<String>,
    /// Options (SelectOption children)
    children: Element,
) -> Element {
    rsx! {
        select {
            class: "bg-gray-800/50 border border-gray-600 rounded-lg px-3 py-2 text-gray-300 focus:outline-none focus:ring-1 focus:ring-indigo-500 disabled:opacity-50 disabled:cursor-not-allowed",
            id: id.as_deref(),
            disabled,
            value: "{value}",
            onchange: move |e| onchange.call(e.value()),
            {children}
        }
    }
}

/// An option within a Select
#[component]
pub fn SelectOption(
    /// Value for this option
    value: String,
    /// Display label text
    label: String,
) -> Element {
    rsx! {
        option { value: "{value}", "{label}" }
    }
}
