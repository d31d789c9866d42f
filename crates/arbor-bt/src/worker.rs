//! Leaf that hands each tick to an independently scheduled worker thread.
//!
//! Every `update` is one rendezvous: the state is sent over a zero-capacity channel and the node
//! blocks until the worker answers with a status. The worker is started when an episode begins
//! and told to stop, by closing its tick channel, when the episode ends.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use arbor_core::{MessageLog, Node, NodeError, Status};

type Handler<S> = Arc<dyn Fn(Receiver<S>, SyncSender<Status>) + Send + Sync>;

struct WorkerLink<S> {
    ticks: SyncSender<S>,
    replies: Receiver<Status>,
    join: JoinHandle<()>,
}

/// Worker-rendezvous leaf.
///
/// `handler` runs on its own thread once per episode. It receives one state per tick on the
/// first channel and must answer each with exactly one status on the second. When the tick
/// channel closes the episode is over and the handler should return; this is a clean exit.
///
/// ```rust,ignore
/// let worker = Worker::new(|ticks, replies| {
///     for (i, _state) in ticks.into_iter().enumerate() {
///         let status = if i < 2 { Status::Running } else { Status::Success };
///         if replies.send(status).is_err() {
///             break;
///         }
///     }
/// });
/// ```
pub struct Worker<S> {
    handler: Handler<S>,
    link: Option<WorkerLink<S>>,
    status: Status,
}

impl<S> Worker<S>
where
    S: Clone + Send + 'static,
{
    pub fn new(handler: impl Fn(Receiver<S>, SyncSender<Status>) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            link: None,
            status: Status::Failure,
        }
    }

    /// `true` while a worker thread is attached to this node.
    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    fn start(&mut self) {
        self.stop();

        let (ticks, tick_rx) = mpsc::sync_channel::<S>(0);
        let (reply_tx, replies) = mpsc::sync_channel::<Status>(0);
        let handler = Arc::clone(&self.handler);

        match thread::Builder::new()
            .name("arbor-worker".to_string())
            .spawn(move || handler(tick_rx, reply_tx))
        {
            Ok(join) => {
                tracing::debug!("worker.spawned");
                self.link = Some(WorkerLink {
                    ticks,
                    replies,
                    join,
                });
            }
            Err(err) => {
                tracing::error!(error = %err, "worker.spawn_failed");
            }
        }
    }

    /// Closes both channels. A worker that already exited is reaped; one that is still busy is
    /// left to notice the closed channels on its own.
    fn stop(&mut self) {
        let Some(WorkerLink {
            ticks,
            replies,
            join,
        }) = self.link.take()
        else {
            return;
        };
        drop(ticks);
        drop(replies);

        if join.is_finished() {
            if join.join().is_err() {
                tracing::warn!("worker.panicked");
            } else {
                tracing::debug!("worker.stopped");
            }
        } else {
            tracing::debug!("worker.detached");
        }
    }

    fn disconnected(&mut self) -> NodeError {
        self.status = Status::Failure;
        self.stop();
        NodeError::WorkerDisconnected
    }
}

impl<S, M> Node<S, M> for Worker<S>
where
    S: Clone + Send + 'static,
{
    fn initiate(&mut self) {
        self.start();
    }

    fn update(&mut self, state: &S, _messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let Some(link) = self.link.as_ref() else {
            return Err(self.disconnected());
        };

        if link.ticks.send(state.clone()).is_err() {
            return Err(self.disconnected());
        }

        match link.replies.recv() {
            Ok(status) => {
                self.status = status;
                Ok(())
            }
            Err(_) => Err(self.disconnected()),
        }
    }

    fn terminate(&mut self) {
        self.stop();
    }

    fn halt(&mut self) {
        self.stop();
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Worker"
    }
}
