//! Change notification bus
//!
//! Process-wide, payload-free fan-out. Any component that mutates a
//! persisted collection broadcasts the same generic "something changed"
//! signal; subscribers then re-read every collection they depend on,
//! because the signal does not say which one changed. That re-read-all
//! behavior is part of the contract — call sites rely on it.
//!
//! Delivery is synchronous: `broadcast` invokes every listener registered
//! at that moment before returning to the mutator. Writes arriving from
//! another browsing context route through this same entry point, so there
//! is exactly one delivery path into the listeners.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl BusInner {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(u64, Listener)>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The shared change signal
#[derive(Clone, Default)]
pub struct ChangeBus {
    inner: Arc<BusInner>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The returned subscription deregisters the
    /// listener when dropped; views hold it for as long as they are
    /// mounted, which prevents stale closures from outliving their view.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().push((id, Arc::new(listener)));

        tracing::debug!("Listener {} subscribed", id);
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Synchronously invoke every currently registered listener.
    ///
    /// Listeners are snapshotted before delivery; one registered during
    /// delivery is not invoked until the next broadcast.
    pub fn broadcast(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        tracing::debug!("Broadcasting change signal to {} listeners", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.inner.lock().len()
    }
}

/// Registration handle; dropping it deregisters the listener
pub struct Subscription {
    id: u64,
    inner: Weak<BusInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().retain(|(id, _)| *id != self.id);
            tracing::debug!("Listener {} unsubscribed", self.id);
        }
    }
}
