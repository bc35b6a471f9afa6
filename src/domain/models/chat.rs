#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::NewMessages;

/// Source of incoming chat messages for the poller.
#[async_trait]
pub trait MessageFeed {
    /// Returns messages received after `since`, or the server's default
    /// window when no cursor is known yet.
    async fn fetch_new(&self, since: Option<String>) -> Result<NewMessages>;
}

pub type FeedBox = Arc<dyn MessageFeed + Send + Sync>;

/// Receives each non-empty batch of new messages.
pub type MessageHandler = Arc<dyn Fn(Vec<Value>) + Send + Sync>;

/// Timing of the chat poller. With a multiplier of 1 every tick waits exactly
/// `interval`, failures included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub backoff_multiplier: u32,
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> PollPolicy {
        return PollPolicy {
            interval: Duration::from_secs(30),
            backoff_multiplier: 1,
            max_interval: Duration::from_secs(300),
        };
    }
}

impl PollPolicy {
    pub fn delay_after(&self, consecutive_failures: u32) -> Duration {
        let factor = self
            .backoff_multiplier
            .max(1)
            .saturating_pow(consecutive_failures);
        let ceiling = self.max_interval.max(self.interval);

        return self.interval.saturating_mul(factor).min(ceiling);
    }
}
