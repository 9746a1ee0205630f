//! Runtime async-logging policy
//!
//! The dispatcher queries the policy on every single event and never
//! caches the answer, so a remote-config toggle can flip delivery
//! between sync and async without restarting the listener.

/// Decides whether notifications go through the background worker
pub trait AsyncPolicy: Send + Sync {
    /// Whether async dispatch is currently enabled
    fn enabled(&self) -> bool;
}

impl<F> AsyncPolicy for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn enabled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_closure_policy() {
        let policy: &dyn AsyncPolicy = &|| true;
        assert!(policy.enabled());
    }

    #[test]
    fn test_policy_is_reevaluated_per_call() {
        let flag = Arc::new(AtomicBool::new(false));
        let reader = Arc::clone(&flag);
        let policy = move || reader.load(Ordering::SeqCst);

        assert!(!policy.enabled());
        flag.store(true, Ordering::SeqCst);
        assert!(policy.enabled());
    }
}
