use crate::api;
use aria_ui::stores::notifications::{AlertLevel, NotificationState};
use aria_ui::stores::settings::{build_settings_payload, SettingsState};
use aria_ui::wasm_utils::sleep_ms;
use aria_ui::{
    show_alert, Button, ButtonSize, ButtonVariant, ConfirmDialogView, SettingFieldRow,
    SettingsCard, SettingsSection, SettingsTab, SettingsView,
};
use dioxus::prelude::*;
use tracing::info;

/// Delay between a successful restart and the page reload.
const RELOAD_DELAY_MS: u64 = 2000;

#[component]
pub fn Settings() -> Element {
    let notifications = use_context::<Signal<NotificationState>>();
    let settings = use_resource(api::fetch_settings);
    let read = settings.read();

    let loaded = match &*read {
        Some(Ok(value)) => value.clone(),
        Some(Err(e)) => {
            return rsx! {
                div { class: "flex items-center justify-center py-12 text-gray-400",
                    "Failed to load settings: {e}"
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

    let mut state = use_signal(move || SettingsState::from_settings(&loaded));
    let mut active_tab = use_signal(SettingsTab::default);
    let mut restart_modal_open = use_signal(|| false);
    let modal_open_read: ReadSignal<bool> = restart_modal_open.into();

    let on_save = move |_| {
        if !state.write().begin_save() {
            return;
        }
        let payload = build_settings_payload(&state.read().fields);
        spawn(async move {
            match api::save_settings(&payload).await {
                Ok(()) => {
                    state.write().finish_save(true);
                    show_alert(notifications, AlertLevel::Success, "Settings saved successfully");
                }
                Err(error) => {
                    state.write().finish_save(false);
                    show_alert(notifications, AlertLevel::Danger, error);
                }
            }
        });
    };

    // The dialog stays open, pending, until the restart settles.
    let on_confirm_restart = move |_| {
        if !state.write().begin_restart() {
            return;
        }
        spawn(async move {
            match api::restart().await {
                Ok(()) => {
                    state.write().finish_restart(true);
                    restart_modal_open.set(false);
                    show_alert(notifications, AlertLevel::Success, "Module restarted");
                    info!("restart succeeded, reloading page");
                    sleep_ms(RELOAD_DELAY_MS).await;
                    reload_page();
                }
                Err(error) => {
                    state.write().finish_restart(false);
                    restart_modal_open.set(false);
                    show_alert(notifications, AlertLevel::Danger, error);
                }
            }
        });
    };

    let s = state.read();
    let tab = active_tab();
    let prefix = tab.path_prefix();
    let tab_is_empty = !s.fields.iter().any(|f| f.path.starts_with(prefix));

    rsx! {
        div { class: "space-y-6",
            SettingsView {
                active_tab: tab,
                on_tab_change: move |next| active_tab.set(next),
                SettingsSection {
                    h2 { class: "text-xl font-semibold text-white", "{tab.label()}" }
                    SettingsCard {
                        div { class: "space-y-4",
                            if tab_is_empty {
                                p { class: "text-sm text-gray-400", "No settings in this section." }
                            }
                            for (index, field) in s.fields.iter().enumerate().filter(|(_, f)| f.path.starts_with(prefix)) {
                                SettingFieldRow {
                                    key: "{field.path}",
                                    field: field.clone(),
                                    on_change: move |value| state.write().set_field(index, value),
                                }
                            }
                        }
                        div { class: "flex gap-3 mt-6",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Medium,
                                disabled: s.saving(),
                                onclick: on_save,
                                if s.saving() {
                                    "Saving..."
                                } else {
                                    "Save Settings"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                size: ButtonSize::Medium,
                                disabled: !s.restart_enabled(),
                                title: Some("Save settings first, then restart to apply them".to_string()),
                                onclick: move |_| restart_modal_open.set(true),
                                "Restart Module"
                            }
                        }
                    }
                }
            }
            ConfirmDialogView {
                is_open: modal_open_read,
                title: "Restart module",
                message: "Restart the active module to apply the saved settings? Anything in progress will be interrupted.",
                confirm_label: "Restart",
                pending_label: "Restarting...",
                cancel_label: "Cancel",
                is_pending: s.restarting(),
                on_confirm: on_confirm_restart,
                on_cancel: move |_| restart_modal_open.set(false),
            }
        }
    }
}

/// Full page reload after a successful restart.
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
