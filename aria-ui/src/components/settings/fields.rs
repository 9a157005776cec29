//! Per-kind rendering for settings form fields

use dioxus::prelude::*;

use crate::stores::settings::{FieldValue, SettingField};

const TEXT_INPUT_CLASS: &str = "w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent";

/// Labelled input row for one settings field; emits the replacement value on
/// every input.
#[component]
pub fn SettingFieldRow(field: SettingField, on_change: EventHandler<FieldValue>) -> Element {
    match field.value.clone() {
        FieldValue::Text(text) => rsx! {
            div {
                label {
                    class: "block text-sm font-medium text-gray-400 mb-2",
                    r#for: "{field.path}",
                    "{field.label}"
                }
                input {
                    r#type: "text",
                    id: "{field.path}",
                    name: "{field.path}",
                    class: TEXT_INPUT_CLASS,
                    value: "{text}",
                    oninput: move |e| on_change.call(FieldValue::Text(e.value())),
                }
            }
        },
        FieldValue::Number(text) => rsx! {
            div {
                label {
                    class: "block text-sm font-medium text-gray-400 mb-2",
                    r#for: "{field.path}",
                    "{field.label}"
                }
                input {
                    r#type: "number",
                    id: "{field.path}",
                    name: "{field.path}",
                    class: TEXT_INPUT_CLASS,
                    value: "{text}",
                    oninput: move |e| on_change.call(FieldValue::Number(e.value())),
                }
            }
        },
        FieldValue::Checkbox(checked) => rsx! {
            label { class: "flex items-center gap-3 text-gray-300",
                input {
                    r#type: "checkbox",
                    id: "{field.path}",
                    name: "{field.path}",
                    class: "w-4 h-4 accent-indigo-600",
                    checked,
                    onchange: move |e| on_change.call(FieldValue::Checkbox(e.checked())),
                }
                "{field.label}"
            }
        },
    }
}
