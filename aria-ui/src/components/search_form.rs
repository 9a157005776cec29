//! Search form view: module and query-type selects plus the query input

use dioxus::prelude::*;

use crate::components::icons::SearchIcon;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Select, SelectOption, TextInput, TextInputSize, Tooltip,
};
use crate::stores::search::QueryType;

/// Pure search form. Submission is intercepted; navigation never happens.
#[component]
pub fn SearchFormView(
    /// Installed module names for the module select
    modules: Vec<String>,
    module: String,
    query_type: QueryType,
    query: String,
    on_module_change: EventHandler<String>,
    on_query_type_change: EventHandler<QueryType>,
    on_query_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "flex flex-wrap items-end gap-3",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                label {
                    class: "block text-sm font-medium text-gray-400 mb-2",
                    r#for: "module",
                    "Module"
                }
                Select {
                    id: Some("module".to_string()),
                    value: module,
                    onchange: move |value| on_module_change.call(value),
                    for name in &modules {
                        SelectOption { key: "{name}", value: name.clone(), label: name.clone() }
                    }
                }
            }
            div {
                label {
                    class: "block text-sm font-medium text-gray-400 mb-2",
                    r#for: "query_type",
                    "Type"
                }
                Select {
                    id: Some("query_type".to_string()),
                    value: query_type.value().to_string(),
                    onchange: move |value: String| {
                        if let Some(kind) = QueryType::from_value(&value) {
                            on_query_type_change.call(kind);
                        }
                    },
                    for kind in QueryType::all() {
                        SelectOption {
                            key: "{kind.value()}",
                            value: kind.value().to_string(),
                            label: kind.label().to_string(),
                        }
                    }
                }
            }
            div { class: "flex-1 min-w-[200px]",
                label {
                    class: "block text-sm font-medium text-gray-400 mb-2",
                    r#for: "query",
                    "Query"
                }
                TextInput {
                    id: Some("query".to_string()),
                    value: query,
                    on_input: move |value| on_query_change.call(value),
                    size: TextInputSize::Medium,
                    placeholder: Some("Search for music..."),
                    required: true,
                }
            }
            Tooltip { text: "Search the selected module's catalog",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: Some("submit"),
                    onclick: move |_| {},
                    SearchIcon { class: "w-4 h-4" }
                    "Search"
                }
            }
        }
    }
}
