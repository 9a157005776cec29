use crate::api;
use aria_ui::stores::notifications::{AlertLevel, NotificationState};
use aria_ui::stores::search::SearchState;
use aria_ui::{show_alert, LoadingOverlay, SearchFormView, SearchResultsView};
use dioxus::prelude::*;
use tracing::debug;

/// Fixed notice for the not-yet-implemented download action.
const DOWNLOAD_STUB_MESSAGE: &str = "Download functionality coming soon!";

#[component]
pub fn Search() -> Element {
    let notifications = use_context::<Signal<NotificationState>>();
    let modules = use_resource(api::fetch_modules);
    let read = modules.read();

    let loaded = match &*read {
        Some(Ok(modules)) => modules.clone(),
        Some(Err(e)) => {
            return rsx! {
                div { class: "flex items-center justify-center py-12 text-gray-400",
                    "Failed to load modules: {e}"
                }
            }
        }
        None => {
            return rsx! {
                div { class: "flex items-center justify-center py-12 text-gray-400", "Loading..." }
            }
        }
    };
    drop(read);

    let initial_module = loaded.first().cloned().unwrap_or_default();
    let mut state = use_signal(move || {
        let mut s = SearchState::default();
        s.module = initial_module;
        s
    });

    let on_submit = move |_| {
        let (module, query_type, query) = {
            let s = state.read();
            (s.module.clone(), s.query_type, s.query.clone())
        };
        let token = state.write().begin();
        spawn(async move {
            match api::search(&module, query_type.value(), &query).await {
                Ok(results) => {
                    if !state.write().apply_results(token, results) {
                        debug!("discarding stale search response");
                    }
                }
                Err(error) => {
                    if state.write().apply_error(token) {
                        show_alert(notifications, AlertLevel::Danger, error);
                    } else {
                        debug!("discarding stale search failure");
                    }
                }
            }
        });
    };

    let s = state.read();

    rsx! {
        LoadingOverlay { visible: s.loading() }
        div { class: "space-y-6",
            h1 { class: "text-2xl font-bold text-white", "Search" }
            SearchFormView {
                modules: loaded.clone(),
                module: s.module.clone(),
                query_type: s.query_type,
                query: s.query.clone(),
                // Extension point: nothing reacts to the module choice yet
                // beyond the form value itself.
                on_module_change: move |module| state.write().module = module,
                on_query_type_change: move |kind| state.write().query_type = kind,
                on_query_change: move |query| state.write().query = query,
                on_submit,
            }
            if s.has_searched {
                SearchResultsView {
                    results: s.results.clone(),
                    on_download: move |index: usize| {
                        debug!(index, "download requested");
                        show_alert(notifications, AlertLevel::Info, DOWNLOAD_STUB_MESSAGE);
                    },
                }
            }
        }
    }
}
