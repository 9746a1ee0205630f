//! Background dispatch queue and the shared log worker
//!
//! The worker is a process-wide resource: one thread, one FIFO
//! channel, started lazily on first async dispatch and never torn
//! down. Multiple listener instances share it, so closing a listener
//! must not (and cannot) stop it.

use std::sync::mpsc;
use std::thread;

use parking_lot::RwLock;

use crate::message::DispatchMessage;

/// Destination for async dispatch messages
///
/// Injectable so embedders and tests can replace the real worker
/// thread with a synchronous stand-in.
pub trait DispatchQueue: Send + Sync {
    /// Hand a message over for delivery
    ///
    /// FIFO: messages enqueued by one thread are delivered in enqueue
    /// order.
    fn enqueue(&self, message: DispatchMessage);
}

/// Lazily-started single worker thread with a FIFO message queue
///
/// The first `enqueue` spawns the thread; the check is double-checked
/// under a read/write lock so the initialized fast path only takes
/// the read lock. Once started, the worker lives for the rest of the
/// process.
///
/// A notifier panic unwinds the worker thread. Messages enqueued
/// after that are dropped with a warning; there is no restart and no
/// redelivery.
pub struct SharedLogWorker {
    sender: RwLock<Option<mpsc::Sender<DispatchMessage>>>,
}

impl SharedLogWorker {
    /// Create a worker handle; the thread starts on first enqueue
    pub const fn new() -> Self {
        Self {
            sender: RwLock::new(None),
        }
    }

    /// The process-wide worker shared by all listener instances
    pub fn global() -> &'static SharedLogWorker {
        static GLOBAL: SharedLogWorker = SharedLogWorker::new();
        &GLOBAL
    }

    /// Whether the worker thread has been started
    pub fn is_started(&self) -> bool {
        self.sender.read().is_some()
    }

    fn sender(&self) -> mpsc::Sender<DispatchMessage> {
        if let Some(tx) = self.sender.read().as_ref() {
            return tx.clone();
        }

        let mut guard = self.sender.write();
        // Re-check: another thread may have won the race to the write lock
        if let Some(tx) = guard.as_ref() {
            return tx.clone();
        }

        let (tx, rx) = mpsc::channel();
        spawn_log_worker(rx);
        *guard = Some(tx.clone());
        tx
    }
}

impl Default for SharedLogWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchQueue for SharedLogWorker {
    fn enqueue(&self, message: DispatchMessage) {
        if let Err(mpsc::SendError(dropped)) = self.sender().send(message) {
            tracing::warn!(
                controller_id = ?dropped.controller_id(),
                "log worker is gone; dropping perf message"
            );
        }
    }
}

impl std::fmt::Debug for SharedLogWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLogWorker")
            .field("started", &self.is_started())
            .finish()
    }
}

/// Spawns the log worker thread
///
/// Runs a run-to-completion loop: dequeue, deliver, repeat. The loop
/// only ends if every sender is dropped, which never happens for the
/// global worker.
fn spawn_log_worker(rx: mpsc::Receiver<DispatchMessage>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        tracing::debug!("perf log worker started");

        for message in rx {
            message.deliver();
        }

        tracing::debug!("perf log worker stopped");
    })
}

/// Synchronous stand-in: delivers on the calling thread
///
/// Keeps the FIFO contract trivially and lets tests observe delivery
/// without waiting on a real thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatch;

impl DispatchQueue for InlineDispatch {
    fn enqueue(&self, message: DispatchMessage) {
        message.deliver();
    }
}
