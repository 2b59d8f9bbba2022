//! Service updates pushed to students (breakdowns, delays, announcements).
//!
//! The feed is stored as a JSON array under [`NOTIFICATIONS_KEY`]. Until the
//! user interacts with it, the built-in list from [`initial_notifications`]
//! is shown. Tapping a notification marks it read and persists the feed.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::store::{KeyValueStore, NOTIFICATIONS_KEY};

/// Kind of update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Breakdown or safety issue.
    Emergency,
    /// Late running.
    Delay,
    /// General announcement.
    Info,
}

/// Symbol and tint used to draw a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationIcon {
    /// SF Symbol name.
    pub name: &'static str,
    /// Hex color.
    pub color: &'static str,
}

impl NotificationType {
    /// Icon for this kind of update.
    #[must_use]
    pub const fn icon(self) -> NotificationIcon {
        match self {
            Self::Emergency => NotificationIcon {
                name: "exclamationmark.triangle.fill",
                color: "#e91e63",
            },
            Self::Delay => NotificationIcon {
                name: "clock.fill",
                color: "#ff9800",
            },
            Self::Info => NotificationIcon {
                name: "info.circle.fill",
                color: "#2196f3",
            },
        }
    }
}

/// One entry in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusNotification {
    /// Stable id within the feed.
    pub id: String,

    /// Bus the update concerns, as displayed.
    #[schema(example = "Bus No: 1")]
    pub bus_number: String,

    /// Kind of update.
    #[serde(rename = "type")]
    pub kind: NotificationType,

    /// Update text.
    pub message: String,

    /// Relative display time, e.g. `10 mins ago`.
    pub timestamp: String,

    /// Whether the user has opened it.
    pub is_read: bool,
}

/// Feed shown before anything has been persisted.
#[must_use]
pub fn initial_notifications() -> Vec<BusNotification> {
    vec![BusNotification {
        id: "1".to_string(),
        bus_number: "Bus No: 1".to_string(),
        kind: NotificationType::Emergency,
        message: "Bus has broken down near Annur. Replacement bus is being arranged."
            .to_string(),
        timestamp: "10 mins ago".to_string(),
        is_read: false,
    }]
}

/// Notification feed over a key-value store.
#[derive(Debug)]
pub struct NotificationFeed<S> {
    store: S,
}

impl<S: KeyValueStore> NotificationFeed<S> {
    /// Create a feed backed by `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current feed.
    ///
    /// Falls back to [`initial_notifications`] when nothing is stored or the
    /// stored value cannot be read.
    #[must_use]
    pub fn notifications(&self) -> Vec<BusNotification> {
        match self.store.get(NOTIFICATIONS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Stored notifications are unreadable, using defaults");
                initial_notifications()
            }),
            Ok(None) => initial_notifications(),
            Err(e) => {
                error!(error = %e, "Error fetching notifications");
                initial_notifications()
            }
        }
    }

    /// Number of unread entries.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications().iter().filter(|n| !n.is_read).count()
    }

    /// Mark `id` as read and persist the feed.
    ///
    /// Returns the updated feed, or `None` if it could not be saved. Unknown
    /// ids leave every entry unchanged but still persist the feed.
    pub fn mark_as_read(&mut self, id: &str) -> Option<Vec<BusNotification>> {
        let mut notifications = self.notifications();
        for notification in notifications.iter_mut().filter(|n| n.id == id) {
            notification.is_read = true;
        }

        let saved = serde_json::to_string(&notifications)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.store
                    .set(NOTIFICATIONS_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        match saved {
            Ok(()) => Some(notifications),
            Err(e) => {
                error!(notification = id, error = %e, "Error marking notification as read");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_defaults_when_store_is_empty() {
        let feed = NotificationFeed::new(MemoryStore::new());
        let notifications = feed.notifications();
        assert_eq!(notifications, initial_notifications());
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_mark_as_read_persists() {
        let mut feed = NotificationFeed::new(MemoryStore::new());
        let updated = feed.mark_as_read("1").unwrap();
        assert!(updated[0].is_read);

        assert_eq!(feed.unread_count(), 0);
        let raw = feed.store().get(NOTIFICATIONS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"isRead\":true"));
        assert!(raw.contains("\"type\":\"emergency\""));
    }

    #[test]
    fn test_mark_unknown_id_changes_nothing() {
        let mut feed = NotificationFeed::new(MemoryStore::new());
        let updated = feed.mark_as_read("missing").unwrap();
        assert_eq!(updated, initial_notifications());
    }

    #[test]
    fn test_mark_as_read_store_failure() {
        let mut feed = NotificationFeed::new(MemoryStore::new());
        feed.store_mut().fail_writes(true);
        assert!(feed.mark_as_read("1").is_none());
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_corrupt_feed_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(NOTIFICATIONS_KEY, "{broken").unwrap();
        let feed = NotificationFeed::new(store);
        assert_eq!(feed.notifications(), initial_notifications());
    }

    #[test]
    fn test_icons() {
        assert_eq!(NotificationType::Delay.icon().name, "clock.fill");
        assert_eq!(NotificationType::Emergency.icon().color, "#e91e63");
        assert_eq!(NotificationType::Info.icon().name, "info.circle.fill");
    }
}
