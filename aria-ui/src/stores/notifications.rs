//! Alert banner state: transient, auto-dismissing notifications

/// Severity of an alert banner, mapped to its visual style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

pub type AlertId = u64;

/// A single alert banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub level: AlertLevel,
    pub message: String,
}

/// Most banners shown at once; pushing past this drops the oldest.
pub const MAX_ALERTS: usize = 5;

/// How long a banner stays up before auto-dismissing.
pub const ALERT_DISMISS_MS: u64 = 5000;

/// Stack of visible alerts, in insertion order (newest last).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    alerts: Vec<Alert>,
    next_id: AlertId,
}

impl NotificationState {
    /// Append an alert and return its id for later dismissal.
    pub fn push(&mut self, level: AlertLevel, message: impl Into<String>) -> AlertId {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            level,
            message: message.into(),
        });
        while self.alerts.len() > MAX_ALERTS {
            self.alerts.remove(0);
        }
        id
    }

    /// Remove an alert by id. Dismissing one that already expired is a no-op.
    pub fn dismiss(&mut self, id: AlertId) {
        self.alerts.retain(|alert| alert.id != id);
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_stack_in_insertion_order() {
        let mut state = NotificationState::default();
        state.push(AlertLevel::Info, "first");
        state.push(AlertLevel::Danger, "second");
        let messages: Vec<_> = state.alerts().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn pushing_past_cap_drops_oldest() {
        let mut state = NotificationState::default();
        for i in 0..MAX_ALERTS + 2 {
            state.push(AlertLevel::Danger, format!("alert {i}"));
        }
        assert_eq!(state.alerts().len(), MAX_ALERTS);
        assert_eq!(state.alerts()[0].message, "alert 2");
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut state = NotificationState::default();
        let id = state.push(AlertLevel::Success, "done");
        state.dismiss(id);
        state.dismiss(id);
        assert!(state.alerts().is_empty());
    }
}
