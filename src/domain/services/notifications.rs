#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;

use std::time::Duration;

use tokio::time::Instant;

use crate::domain::models::Notification;
use crate::domain::models::NotificationKind;

/// Stack of transient notifications. Each one expires `ttl` after it was
/// shown unless dismissed first.
pub struct Notifications {
    ttl: Duration,
    next_id: u64,
    items: Vec<(Notification, Instant)>,
}

impl Default for Notifications {
    fn default() -> Notifications {
        return Notifications::new(Duration::from_secs(5));
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Notifications {
        return Notifications {
            ttl,
            next_id: 1,
            items: vec![],
        };
    }

    pub fn show(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push((
            Notification {
                id,
                message: message.to_string(),
                kind,
            },
            Instant::now() + self.ttl,
        ));

        return id;
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(notification, _)| return notification.id != id);

        return self.items.len() != before;
    }

    /// Drops expired entries and returns what is still on screen, oldest first.
    pub fn visible(&mut self) -> Vec<Notification> {
        let now = Instant::now();
        self.items.retain(|(_, expires_at)| return *expires_at > now);

        return self
            .items
            .iter()
            .map(|(notification, _)| return notification.clone())
            .collect();
    }
}
