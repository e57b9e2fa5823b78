//! Synchronous reactive value container
//!
//! `ReactiveValue` holds a current value and a registry of subscriber
//! callbacks. Mutations notify every live subscriber before returning to the
//! caller, so within one `set`/`update` the sequence
//! {update in-memory value, notify subscribers} is strictly sequential.
//!
//! Callbacks are invoked outside the subscriber lock, so a callback may
//! register or cancel subscriptions without deadlocking.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    value: RwLock<T>,
    subscribers: Mutex<FxHashMap<u64, Callback<T>>>,
    next_id: AtomicU64,
}

/// A value container with synchronous subscriber notification.
///
/// Cloning yields another handle to the same underlying value; handles are
/// cheap and share subscribers.
pub struct ReactiveValue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for ReactiveValue<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> ReactiveValue<T> {
    /// Create a new value container seeded with `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(initial),
                subscribers: Mutex::new(FxHashMap::default()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.shared.value.read().unwrap().clone()
    }

    /// Replace the current value and notify every subscriber.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut guard = self.shared.value.write().unwrap();
            *guard = value;
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Read-modify-write with a single notification.
    pub fn update<F: FnOnce(T) -> T>(&self, f: F) {
        let snapshot = {
            let mut guard = self.shared.value.write().unwrap();
            let next = f(guard.clone());
            *guard = next;
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Register `callback`, firing it immediately with the current value and
    /// then on every change.
    ///
    /// The returned [`Subscription`] cancels the registration when dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback<T> = Arc::new(callback);
        self.shared
            .subscribers
            .lock()
            .unwrap()
            .insert(id, Arc::clone(&callback));

        callback(&self.get());

        let weak = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.subscribers.lock().unwrap().remove(&id);
            }
        })
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().unwrap().len()
    }

    fn notify(&self, value: &T) {
        let snapshot: Vec<(u64, Callback<T>)> = self
            .shared
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .map(|(id, cb)| (*id, Arc::clone(cb)))
            .collect();

        for (id, callback) in snapshot {
            // A subscriber cancelled by an earlier callback in this round
            // must not be invoked again.
            let live = self.shared.subscribers.lock().unwrap().contains_key(&id);
            if live {
                callback(value);
            }
        }
    }
}

/// Disposer for a callback registration.
///
/// Dropping the handle cancels the registration; [`Subscription::cancel`] is
/// the explicit spelling of the same release.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wrap a release action.
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A registration with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Cancel the registration now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
