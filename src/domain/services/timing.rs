#[cfg(test)]
#[path = "timing_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tokio::time::Instant;

/// Delays `func` until calls stop for `wait`. Only the last argument is
/// delivered. Must be called from within a tokio runtime.
pub struct Debouncer<T> {
    wait: Duration,
    func: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(wait: Duration, func: F) -> Debouncer<T>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        return Debouncer {
            wait,
            func: Arc::new(func),
            pending: None,
        };
    }

    pub fn call(&mut self, arg: T) {
        self.cancel();

        let func = self.func.clone();
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(wait).await;
            func(arg);
        }));
    }
}

impl<T> Debouncer<T> {
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        return self
            .pending
            .as_ref()
            .map_or(false, |pending| return !pending.is_finished());
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `func` at most once per `limit`. Calls inside the window are dropped.
pub struct Throttle<T> {
    limit: Duration,
    func: Box<dyn FnMut(T) + Send>,
    last_fired: Option<Instant>,
}

impl<T> Throttle<T> {
    pub fn new<F>(limit: Duration, func: F) -> Throttle<T>
    where
        F: FnMut(T) + Send + 'static,
    {
        return Throttle {
            limit,
            func: Box::new(func),
            last_fired: None,
        };
    }

    /// Returns whether the call went through.
    pub fn call(&mut self, arg: T) -> bool {
        let now = Instant::now();
        if let Some(last_fired) = self.last_fired {
            if now.duration_since(last_fired) < self.limit {
                return false;
            }
        }

        self.last_fired = Some(now);
        (self.func)(arg);

        return true;
    }
}
