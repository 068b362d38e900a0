//! Connectivity status monitor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::info;

/// A browser connectivity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

/// Process-wide online flag. Starts online.
#[derive(Clone)]
pub struct OnlineStatus {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for OnlineStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl OnlineStatus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sender: Arc::new(watch::Sender::new(true)),
        }
    }

    /// Apply an event. Returns whether the status changed.
    pub fn handle(&self, event: ConnectivityEvent) -> bool {
        let online = event == ConnectivityEvent::Online;
        let changed = self.sender.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });
        if changed {
            info!(online, "Connectivity changed");
        }
        changed
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        *self.sender.borrow()
    }

    /// Receiver that observes every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_online() {
        assert!(OnlineStatus::new().is_online());
    }

    #[test]
    fn test_offline_then_online() {
        let status = OnlineStatus::new();
        assert!(status.handle(ConnectivityEvent::Offline));
        assert!(!status.is_online());

        assert!(!status.handle(ConnectivityEvent::Offline));
        assert!(!status.is_online());

        assert!(status.handle(ConnectivityEvent::Online));
        assert!(status.is_online());
    }

    #[test]
    fn test_clones_share_status() {
        let status = OnlineStatus::new();
        let other = status.clone();
        status.handle(ConnectivityEvent::Offline);
        assert!(!other.is_online());
    }

    #[tokio::test]
    async fn test_subscriber_sees_change() {
        let status = OnlineStatus::new();
        let mut rx = status.subscribe();

        status.handle(ConnectivityEvent::Offline);
        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());

        // Repeating the same event does not wake receivers
        status.handle(ConnectivityEvent::Offline);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_event_deserializes_lowercase() {
        let event: ConnectivityEvent = serde_json::from_str(r#""offline""#).unwrap();
        assert_eq!(event, ConnectivityEvent::Offline);
    }
}
