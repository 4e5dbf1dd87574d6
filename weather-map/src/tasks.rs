//! Background tasks: weather fetches and the spinner tick
//!
//! Tasks report back by sending an [`Action`] into the runtime's channel.
//! A fetch is never aborted by a newer click; the reducer drops results
//! whose request id is not the latest.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, trace};

use crate::action::Action;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
enum Job {
    Tick,
    Fetch(u64),
}

/// Owns every running task so shutdown can abort them
pub struct TaskManager {
    jobs: HashMap<Job, AbortHandle>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            jobs: HashMap::new(),
            action_tx,
        }
    }

    /// Run the fetch for `request_id`; its result action is sent when it completes.
    pub fn fetch<F>(&mut self, request_id: u64, future: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.jobs.retain(|_, handle| !handle.is_finished());

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let _ = tx.send(future.await);
        });
        self.jobs.insert(Job::Fetch(request_id), handle.abort_handle());

        let in_flight = self
            .jobs
            .keys()
            .filter(|job| matches!(job, Job::Fetch(_)))
            .count();
        debug!(request_id, in_flight, "Fetch started");
    }

    /// Send `Action::Tick` every `period`, replacing a running ticker.
    ///
    /// The first tick arrives after one full period.
    pub fn start_tick(&mut self, period: Duration) {
        if let Some(old) = self.jobs.remove(&Job::Tick) {
            old.abort();
        }

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if tx.send(Action::Tick).is_err() {
                    break;
                }
            }
        });
        self.jobs.insert(Job::Tick, handle.abort_handle());
    }

    /// Abort everything (shutdown)
    pub fn shutdown(&mut self) {
        for (job, handle) in self.jobs.drain() {
            trace!(?job, "Aborting task");
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
