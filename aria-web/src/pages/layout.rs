use crate::Route;
use aria_ui::stores::notifications::NotificationState;
use aria_ui::{AlertStack, AppLayoutView, NavItem};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let mut notifications = use_context_provider(|| Signal::new(NotificationState::default()));

    let nav_items = vec![
        NavItem {
            id: "search".to_string(),
            label: "Search".to_string(),
            is_active: matches!(current_route, Route::Search {}),
        },
        NavItem {
            id: "settings".to_string(),
            label: "Settings".to_string(),
            is_active: matches!(current_route, Route::Settings {}),
        },
    ];

    let alerts = notifications.read().alerts().to_vec();

    rsx! {
        AppLayoutView {
            nav_items,
            on_nav_click: move |id: String| {
                match id.as_str() {
                    "search" => {
                        navigator().push(Route::Search {});
                    }
                    "settings" => {
                        navigator().push(Route::Settings {});
                    }
                    _ => {}
                }
            },
            banners: rsx! {
                AlertStack {
                    alerts,
                    on_dismiss: move |id| notifications.write().dismiss(id),
                }
            },
            Outlet::<Route> {}
        }
    }
}
