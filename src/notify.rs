//! In-app toast stack. Workflow transitions produce [`Notification`]s;
//! this module owns their lifetime, the UI layer draws whatever is live.

use std::time::Instant;

use crate::workflow::Notification;

struct ActiveToast {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Default)]
pub struct ToastStack {
    toasts: Vec<ActiveToast>,
}

impl ToastStack {
    pub fn push(&mut self, notification: Notification) {
        let expires_at = Instant::now() + notification.duration;
        self.toasts.push(ActiveToast {
            notification,
            expires_at,
        });
    }

    /// Drops expired toasts. Called once per frame.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|toast| &toast.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Severity;
    use std::time::Duration;

    #[test]
    fn prune_drops_only_expired_toasts() {
        let mut stack = ToastStack::default();
        stack.push(Notification::success("done", Duration::from_secs(60)));
        stack.push(Notification::error("failed", None, Duration::ZERO));

        stack.prune();

        let remaining: Vec<_> = stack.iter().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].severity, Severity::Success);
    }
}
