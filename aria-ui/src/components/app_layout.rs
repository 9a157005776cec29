//! App layout view component
//!
//! Fixed header with brand and navigation tabs, scrolling content below,
//! with a slot for banner-style notifications above the page content.

use dioxus::prelude::*;

/// One top-navigation tab
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// App shell (pure, props-based)
#[component]
pub fn AppLayoutView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Banner area rendered above the page content (alerts)
    #[props(default)]
    banners: Option<Element>,
    /// Main content (typically the router outlet)
    children: Element,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-900",
            header { class: "flex items-center gap-6 px-6 py-3 bg-gray-800 border-b border-gray-700",
                span { class: "text-lg font-bold text-white tracking-tight", "Aria" }
                nav { class: "flex gap-1",
                    for item in &nav_items {
                        button {
                            class: "px-3 py-1.5 text-sm rounded-lg transition-colors {nav_class(item.is_active)}",
                            onclick: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                }
            }
            div { class: "flex-1 overflow-y-auto",
                div { class: "max-w-4xl mx-auto p-6 space-y-4",
                    if let Some(banners) = banners {
                        {banners}
                    }
                    {children}
                }
            }
        }
    }
}

fn nav_class(is_active: bool) -> &'static str {
    if is_active {
        "bg-indigo-600 text-white"
    } else {
        "text-gray-400 hover:text-white hover:bg-gray-700/50"
    }
}
