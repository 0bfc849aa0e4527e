//! Notifications module - toast model, store and renderer.
//!
//! The store is the single writer of the active toast set. Renderers and
//! application flows only read its reactive view or call its mutations.

mod notifications_model;
mod notifications_renderer;
mod notifications_store;

pub use notifications_model::{Notification, NotificationId, NotificationKind};
pub use notifications_renderer::{
    diff_frames, FrameDiff, NotificationRenderer, ToastCard, DISMISS_LABEL,
};
pub use notifications_store::{
    ActiveNotifications, NotificationStore, NotificationView, WeakNotificationStore,
};
