//! Aria web interface
//!
//! Single-page front-end for a modular music downloader: search a module's
//! catalog, manage settings, restart the active module.

mod api;
mod pages;

use dioxus::prelude::*;
use pages::{AppLayout, Search, Settings};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Search {},
    #[route("/settings")]
    Settings {},
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900", Router::<Route> {} }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
