use std::time::Duration;
use tokio::task::JoinHandle;

/// A deferred callback that runs once its quiet period elapses.
///
/// Dropping or replacing the handle before then cancels the callback, so an
/// owner that keeps at most one handle has at most one live timer. Once the
/// callback has run, dropping the handle does nothing.
#[derive(Debug)]
pub struct DebounceHandle {
    task: JoinHandle<()>,
}

impl DebounceHandle {
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });

        DebounceHandle { task }
    }

    pub fn is_pending(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for DebounceHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
