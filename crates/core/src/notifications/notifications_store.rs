//! Process-wide toast store.
//!
//! The active set lives in a `tokio::sync::watch` channel. Mutations replace
//! the published `Arc<Vec<_>>` copy-on-write, so snapshots handed to readers
//! never change under them. Each toast gets a fire-and-forget expiry task that
//! calls `dismiss` when it elapses; because `dismiss` is idempotent, a timer
//! whose toast is already gone does nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use tokio::runtime::Handle;
use tokio::sync::watch;

use super::notifications_model::{Notification, NotificationId, NotificationKind};
use crate::constants::DEFAULT_TOAST_TTL_MS;

/// Immutable snapshot of the active set, oldest first.
pub type ActiveNotifications = Arc<Vec<Notification>>;

static GLOBAL_STORE: OnceCell<NotificationStore> = OnceCell::new();

struct StoreInner {
    next_id: AtomicU64,
    default_ttl_ms: u64,
    sender: watch::Sender<ActiveNotifications>,
}

/// Sole owner of the active toast set.
///
/// Cloning yields another handle to the same set.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<StoreInner>,
}

/// Handle that does not keep the store alive. Used by expiry timers and
/// renderers.
#[derive(Clone)]
pub struct WeakNotificationStore {
    inner: Weak<StoreInner>,
}

impl WeakNotificationStore {
    pub fn upgrade(&self) -> Option<NotificationStore> {
        self.inner.upgrade().map(|inner| NotificationStore { inner })
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("default_ttl_ms", &self.inner.default_ttl_ms)
            .field("active", &self.len())
            .finish()
    }
}

impl NotificationStore {
    /// Creates a store using [`DEFAULT_TOAST_TTL_MS`] for toasts without a ttl.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TOAST_TTL_MS)
    }

    /// Creates a store with a custom default ttl. Zero falls back to
    /// [`DEFAULT_TOAST_TTL_MS`].
    pub fn with_default_ttl(default_ttl_ms: u64) -> Self {
        let default_ttl_ms = if default_ttl_ms == 0 {
            DEFAULT_TOAST_TTL_MS
        } else {
            default_ttl_ms
        };
        let (sender, _receiver) = watch::channel(Arc::new(Vec::new()));
        Self {
            inner: Arc::new(StoreInner {
                next_id: AtomicU64::new(0),
                default_ttl_ms,
                sender,
            }),
        }
    }

    /// The process-wide store. Created with defaults on first use unless
    /// [`NotificationStore::install_global`] ran before.
    pub fn global() -> &'static NotificationStore {
        GLOBAL_STORE.get_or_init(NotificationStore::new)
    }

    /// Makes `store` the process-wide store.
    ///
    /// Fails, handing the store back, if the global store already exists.
    pub fn install_global(store: NotificationStore) -> Result<(), NotificationStore> {
        GLOBAL_STORE.set(store)
    }

    pub fn downgrade(&self) -> WeakNotificationStore {
        WeakNotificationStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn default_ttl_ms(&self) -> u64 {
        self.inner.default_ttl_ms
    }

    /// Appends a toast and arms its expiry timer. Returns the new id.
    ///
    /// `ttl_ms` of `None` or zero uses the store default. The title is not
    /// validated.
    pub fn enqueue(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        ttl_ms: Option<u64>,
    ) -> NotificationId {
        let ttl_ms = match ttl_ms {
            Some(ttl) if ttl > 0 => ttl,
            _ => self.inner.default_ttl_ms,
        };
        let title = title.into();
        let message = message.into();

        // The id is minted under the channel's write lock so that id order and
        // insertion order can never disagree.
        let mut id = 0;
        self.inner.sender.send_modify(|active| {
            id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Toast #{} ({}) queued for {}ms: {}", id, kind, ttl_ms, title);
            Arc::make_mut(active).push(Notification {
                id,
                kind,
                title,
                message,
                ttl_ms,
                created_at: Utc::now(),
            });
        });

        self.arm_expiry(id, ttl_ms);
        id
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        ttl_ms: Option<u64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Success, title, message, ttl_ms)
    }

    pub fn error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        ttl_ms: Option<u64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Error, title, message, ttl_ms)
    }

    pub fn info(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        ttl_ms: Option<u64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Info, title, message, ttl_ms)
    }

    /// Removes the toast with `id` if it is still active. Unknown, stale and
    /// already dismissed ids are ignored.
    pub fn dismiss(&self, id: NotificationId) {
        if self.remove(id) {
            debug!("Toast #{} dismissed", id);
        }
    }

    /// Removes every active toast. Pending timers find nothing to remove.
    pub fn clear(&self) {
        let cleared = self.inner.sender.send_if_modified(|active| {
            if active.is_empty() {
                return false;
            }
            *active = Arc::new(Vec::new());
            true
        });
        if cleared {
            debug!("All toasts cleared");
        }
    }

    /// Current active set, oldest first.
    pub fn snapshot(&self) -> ActiveNotifications {
        self.inner.sender.borrow().clone()
    }

    /// Reactive read-only view of the active set.
    pub fn subscribe(&self) -> NotificationView {
        NotificationView {
            receiver: self.inner.sender.subscribe(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.sender.borrow().is_empty()
    }

    fn remove(&self, id: NotificationId) -> bool {
        self.inner.sender.send_if_modified(|active| {
            match active.iter().position(|n| n.id == id) {
                Some(index) => {
                    // Vec::remove shifts the tail, keeping insertion order.
                    Arc::make_mut(active).remove(index);
                    true
                }
                None => false,
            }
        })
    }

    fn arm_expiry(&self, id: NotificationId, ttl_ms: u64) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(
                    "No async runtime available, toast #{} will stay until dismissed",
                    id
                );
                return;
            }
        };

        let store = self.downgrade();
        handle.spawn(async move {
            tokio::time::sleep(Duration::from_millis(ttl_ms)).await;
            if let Some(store) = store.upgrade() {
                if store.remove(id) {
                    debug!("Toast #{} expired", id);
                }
            }
        });
    }
}

/// Subscription to the active set.
///
/// Each view tracks which version it has seen; [`NotificationView::changed`]
/// resolves once a newer version is published.
#[derive(Clone)]
pub struct NotificationView {
    receiver: watch::Receiver<ActiveNotifications>,
}

impl NotificationView {
    /// Latest published active set. Marks it as seen.
    pub fn current(&mut self) -> ActiveNotifications {
        self.receiver.borrow_and_update().clone()
    }

    /// Latest published active set without marking it as seen.
    pub fn peek(&self) -> ActiveNotifications {
        self.receiver.borrow().clone()
    }

    /// Whether a version newer than the last seen one has been published.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Waits for the next change and returns the new active set.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<ActiveNotifications> {
        self.receiver.changed().await.ok()?;
        Some(self.current())
    }
}
