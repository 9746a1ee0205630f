//! Shared test helpers

use std::sync::{mpsc, Arc, Mutex};

use perf_state::{ImageLoadStatus, ImagePerfSnapshot, VisibilityState};

use crate::notifier::PerfNotifier;

/// One observed notifier invocation
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum RecordedCall {
    Status(Option<String>, ImageLoadStatus),
    Visibility(Option<String>, VisibilityState),
}

/// Notifier that forwards every call onto a channel
pub(crate) struct RecordingNotifier {
    tx: Mutex<mpsc::Sender<RecordedCall>>,
}

impl RecordingNotifier {
    pub(crate) fn channel() -> (Arc<Self>, mpsc::Receiver<RecordedCall>) {
        let (tx, rx) = mpsc::channel();
        (Arc::new(Self { tx: Mutex::new(tx) }), rx)
    }
}

impl PerfNotifier for RecordingNotifier {
    fn notify_status_updated(&self, snapshot: &ImagePerfSnapshot, status: ImageLoadStatus) {
        let call = RecordedCall::Status(snapshot.controller_id.clone(), status);
        let _ = self.tx.lock().unwrap().send(call);
    }

    fn notify_visibility_updated(
        &self,
        snapshot: &ImagePerfSnapshot,
        visibility: VisibilityState,
    ) {
        let call = RecordedCall::Visibility(snapshot.controller_id.clone(), visibility);
        let _ = self.tx.lock().unwrap().send(call);
    }
}
