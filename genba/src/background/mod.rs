pub mod data_loader;
pub mod suggestions;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Keyed set of loader tasks. Starting a task under a key that is already
/// running aborts the older one, so a reload never races its predecessor.
#[derive(Default)]
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        if let Some(previous) = self.tasks.remove(&task_id) {
            tracing::debug!(task = %task_id, "Aborting superseded task");
            previous.abort();
        }

        self.tasks.insert(task_id, tokio::spawn(future));
    }

    /// Abort everything (shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
