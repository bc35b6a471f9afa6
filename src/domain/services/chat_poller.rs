#[cfg(test)]
#[path = "chat_poller_test.rs"]
mod tests;

use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::FeedBox;
use crate::domain::models::MessageHandler;
use crate::domain::models::PollPolicy;

#[derive(Clone)]
struct PollState {
    feed: FeedBox,
    cursor: Arc<Mutex<Option<String>>>,
    failures: Arc<AtomicU32>,
}

impl PollState {
    async fn poll(&self, handler: Option<&MessageHandler>) -> bool {
        let since = self.cursor.lock().await.clone();
        let res = self.feed.fetch_new(since.clone()).await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                let failures = self.failures.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::error!(error = %err, since = ?since, failures = failures, "Failed to check new messages");
                return false;
            }
        };

        self.failures.store(0, Ordering::SeqCst);
        tracing::debug!(count = res.new_messages.len(), since = ?since, "Checked new messages");

        if !res.new_messages.is_empty() {
            if let Some(handler) = handler {
                handler(res.new_messages);
            }
        }

        if let Some(timestamp) = res.timestamp {
            *self.cursor.lock().await = Some(timestamp);
        }

        return true;
    }
}

/// Periodically asks a feed for messages newer than the last successful poll.
///
/// The cursor only moves on success, so a failed tick re-queries the same
/// window next time. Dropping the poller stops its task.
pub struct ChatPoller {
    policy: PollPolicy,
    state: PollState,
    task: Option<JoinHandle<()>>,
}

impl ChatPoller {
    pub fn new(feed: FeedBox, policy: PollPolicy) -> ChatPoller {
        return ChatPoller {
            policy,
            state: PollState {
                feed,
                cursor: Arc::new(Mutex::new(None)),
                failures: Arc::new(AtomicU32::new(0)),
            },
            task: None,
        };
    }

    pub fn policy(&self) -> PollPolicy {
        return self.policy;
    }

    pub async fn cursor(&self) -> Option<String> {
        return self.state.cursor.lock().await.clone();
    }

    pub fn consecutive_failures(&self) -> u32 {
        return self.state.failures.load(Ordering::SeqCst);
    }

    /// Runs a single poll immediately. Returns whether it succeeded.
    pub async fn poll_once(&self, handler: Option<&MessageHandler>) -> bool {
        return self.state.poll(handler).await;
    }

    /// Starts polling in the background, replacing any running task. The
    /// first poll happens one delay after the call.
    pub fn start(&mut self, handler: Option<MessageHandler>) {
        self.stop();

        let state = self.state.clone();
        let policy = self.policy;
        self.task = Some(tokio::spawn(async move {
            loop {
                let delay = policy.delay_after(state.failures.load(Ordering::SeqCst));
                time::sleep(delay).await;
                state.poll(handler.as_ref()).await;
            }
        }));

        tracing::debug!(interval = ?self.policy.interval, "Chat polling started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Chat polling stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        return self
            .task
            .as_ref()
            .map_or(false, |task| return !task.is_finished());
    }
}

impl Drop for ChatPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
