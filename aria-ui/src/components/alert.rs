//! Alert banners: transient, auto-dismissing notifications

use dioxus::prelude::*;

use crate::components::icons::{AlertTriangleIcon, CheckCircleIcon, InfoIcon, XIcon};
use crate::stores::notifications::{Alert, AlertId, AlertLevel, NotificationState, ALERT_DISMISS_MS};
use crate::wasm_utils::sleep_ms;

/// Push an alert and schedule its auto-dismissal.
///
/// Danger and warning alerts also hit the log; the banner itself is the only
/// user-facing surface.
pub fn show_alert(
    mut notifications: Signal<NotificationState>,
    level: AlertLevel,
    message: impl Into<String>,
) {
    let message = message.into();
    match level {
        AlertLevel::Danger | AlertLevel::Warning => tracing::warn!("{message}"),
        AlertLevel::Success | AlertLevel::Info => tracing::debug!("{message}"),
    }
    let id = notifications.write().push(level, message);
    spawn(async move {
        sleep_ms(ALERT_DISMISS_MS).await;
        notifications.write().dismiss(id);
    });
}

/// Stack of alert banners in insertion order, newest last.
#[component]
pub fn AlertStack(alerts: Vec<Alert>, on_dismiss: EventHandler<AlertId>) -> Element {
    rsx! {
        div { class: "space-y-2",
            for alert in alerts {
                AlertBanner { key: "{alert.id}", alert: alert.clone(), on_dismiss }
            }
        }
    }
}

/// One dismissible banner.
#[component]
pub fn AlertBanner(alert: Alert, on_dismiss: EventHandler<AlertId>) -> Element {
    let id = alert.id;
    rsx! {
        div {
            class: "flex items-start gap-3 p-3 border rounded-lg text-sm {level_classes(alert.level)}",
            role: "alert",
            {level_icon(alert.level)}
            span { class: "flex-1 select-text break-words", "{alert.message}" }
            button {
                class: "opacity-70 hover:opacity-100 transition-opacity",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                XIcon { class: "w-4 h-4" }
            }
        }
    }
}

fn level_classes(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Success => "bg-green-900/30 border-green-700 text-green-300",
        AlertLevel::Info => "bg-sky-900/30 border-sky-700 text-sky-300",
        AlertLevel::Warning => "bg-amber-900/30 border-amber-700/50 text-amber-200",
        AlertLevel::Danger => "bg-red-900/30 border-red-700 text-red-300",
    }
}

fn level_icon(level: AlertLevel) -> Element {
    let class = "w-5 h-5 flex-shrink-0 mt-0.5";
    match level {
        AlertLevel::Success => rsx! {
            CheckCircleIcon { class }
        },
        AlertLevel::Info => rsx! {
            InfoIcon { class }
        },
        AlertLevel::Warning | AlertLevel::Danger => rsx! {
            AlertTriangleIcon { class }
        },
    }
}
