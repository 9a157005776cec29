//! Settings view - tabbed layout shell

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Available settings tabs
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Formatting,
    Advanced,
    Modules,
}

impl SettingsTab {
    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Formatting => "Formatting",
            SettingsTab::Advanced => "Advanced",
            SettingsTab::Modules => "Modules",
        }
    }

    /// Path prefix of the fields this tab shows.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            SettingsTab::General => "global.general.",
            SettingsTab::Formatting => "global.formatting.",
            SettingsTab::Advanced => "global.advanced.",
            SettingsTab::Modules => "modules.",
        }
    }

    pub fn all() -> &'static [SettingsTab] {
        &[
            SettingsTab::General,
            SettingsTab::Formatting,
            SettingsTab::Advanced,
            SettingsTab::Modules,
        ]
    }
}

/// Settings page shell with tabbed navigation. Tab switching is plain state,
/// never navigation.
#[component]
pub fn SettingsView(
    active_tab: SettingsTab,
    on_tab_change: EventHandler<SettingsTab>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex flex-col bg-gray-900 border border-gray-700 rounded-lg overflow-hidden",
            div { class: "p-6 border-b border-gray-700",
                h1 { class: "text-2xl font-bold text-white", "Settings" }
            }
            div { class: "flex min-h-[420px]",
                nav { class: "w-56 bg-gray-800 border-r border-gray-700 p-4 flex-shrink-0",
                    ul { class: "space-y-1",
                        for tab in SettingsTab::all() {
                            li {
                                Button {
                                    variant: if active_tab == *tab { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                                    size: ButtonSize::Medium,
                                    class: Some("w-full justify-start".to_string()),
                                    onclick: {
                                        let tab = *tab;
                                        move |_| on_tab_change.call(tab)
                                    },
                                    "{tab.label()}"
                                }
                            }
                        }
                    }
                }
                div { class: "flex-1 overflow-y-auto p-6", {children} }
            }
        }
    }
}
