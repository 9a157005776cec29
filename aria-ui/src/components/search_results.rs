//! Search results list with per-row download action

use dioxus::prelude::*;

use crate::components::icons::DownloadIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::SearchResult;

/// Ordered result list. Rows render in response order; each row's download
/// button reports the row's positional index.
#[component]
pub fn SearchResultsView(results: Vec<SearchResult>, on_download: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "bg-gray-800 rounded-lg divide-y divide-gray-700",
            if results.is_empty() {
                div { class: "p-6 text-center text-gray-400", "No results." }
            }
            for (index, item) in results.iter().enumerate() {
                ResultRow {
                    key: "{index}",
                    index,
                    item: item.clone(),
                    on_download,
                }
            }
        }
    }
}

#[component]
fn ResultRow(index: usize, item: SearchResult, on_download: EventHandler<usize>) -> Element {
    let suffix = item.detail_suffix();

    rsx! {
        div { class: "flex items-center justify-between gap-4 p-4",
            div { class: "min-w-0",
                h3 { class: "text-white font-medium truncate",
                    "{item.name}"
                    if !item.artists.is_empty() {
                        span { class: "text-gray-400 font-normal", " - {item.artist_line()}" }
                    }
                }
                if !suffix.is_empty() {
                    p { class: "text-sm text-gray-400 mt-1", "{suffix}" }
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Small,
                onclick: move |_| on_download.call(index),
                DownloadIcon { class: "w-4 h-4" }
                "Download"
            }
        }
    }
}
