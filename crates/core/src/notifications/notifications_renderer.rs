//! Toast renderer.
//!
//! Turns the store's active set into display cards and forwards dismiss
//! clicks back to the store. It keeps nothing besides its subscription.

use std::fmt;

use super::notifications_model::{Notification, NotificationId, NotificationKind};
use super::notifications_store::{NotificationStore, NotificationView, WeakNotificationStore};

/// Label of the per-card dismiss control.
pub const DISMISS_LABEL: &str = "Dismiss";

/// Display form of one active toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastCard {
    pub id: NotificationId,
    pub kind: NotificationKind,
    /// Styling class: `ok`, `err` or `info`.
    pub tone: &'static str,
    pub icon: &'static str,
    pub title: String,
    /// `None` when the toast has an empty message.
    pub message: Option<String>,
    pub dismiss_label: &'static str,
}

impl From<&Notification> for ToastCard {
    fn from(notification: &Notification) -> Self {
        let (tone, icon) = match notification.kind {
            NotificationKind::Success => ("ok", "✓"),
            NotificationKind::Error => ("err", "!"),
            NotificationKind::Info => ("info", "i"),
        };
        Self {
            id: notification.id,
            kind: notification.kind,
            tone,
            icon,
            title: notification.title.clone(),
            message: notification
                .has_message()
                .then(|| notification.message.clone()),
            dismiss_label: DISMISS_LABEL,
        }
    }
}

impl fmt::Display for ToastCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.icon, self.title)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        write!(f, "  ({} #{})", self.dismiss_label.to_lowercase(), self.id)
    }
}

/// Difference between two rendered frames.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameDiff {
    /// Cards present in the new frame only, in display order.
    pub shown: Vec<ToastCard>,
    /// Ids present in the old frame only.
    pub hidden: Vec<NotificationId>,
}

impl FrameDiff {
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }
}

/// Compares two frames by toast id. Toasts never change after creation, so
/// ids are enough.
pub fn diff_frames(previous: &[ToastCard], next: &[ToastCard]) -> FrameDiff {
    let shown = next
        .iter()
        .filter(|card| !previous.iter().any(|old| old.id == card.id))
        .cloned()
        .collect();
    let hidden = previous
        .iter()
        .filter(|old| !next.iter().any(|card| card.id == old.id))
        .map(|old| old.id)
        .collect();
    FrameDiff { shown, hidden }
}

/// Renders the active toast set of one store.
pub struct NotificationRenderer {
    view: NotificationView,
    store: WeakNotificationStore,
}

impl NotificationRenderer {
    pub fn new(store: &NotificationStore) -> Self {
        Self {
            view: store.subscribe(),
            store: store.downgrade(),
        }
    }

    /// Cards for the current active set, oldest first.
    pub fn render(&mut self) -> Vec<ToastCard> {
        Self::cards(&self.view.current())
    }

    /// Waits for the active set to change and renders it.
    ///
    /// Returns `None` once the store is gone.
    pub async fn next_frame(&mut self) -> Option<Vec<ToastCard>> {
        let active = self.view.changed().await?;
        Some(Self::cards(&active))
    }

    /// Forwards a dismiss click. Clicking a card that already expired is
    /// harmless.
    pub fn dismiss(&self, id: NotificationId) {
        if let Some(store) = self.store.upgrade() {
            store.dismiss(id);
        }
    }

    fn cards(active: &[Notification]) -> Vec<ToastCard> {
        active.iter().map(ToastCard::from).collect()
    }
}
