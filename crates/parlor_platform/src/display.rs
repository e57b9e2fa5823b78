//! OS display-mode capability
//!
//! The display-mode signal is external, read-only input: the state layer
//! asks whether the host currently prefers a dark scheme and may watch for
//! changes, but never owns or mutates the signal itself.

use parlor_core::Subscription;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

type WatchCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Read-only view of the host's color-scheme preference.
pub trait DisplayModeQuery: Send + Sync {
    /// Whether the host reports a dark display mode. `None` when the host
    /// has no display-mode signal at all.
    fn prefers_dark(&self) -> Option<bool>;

    /// Deliver subsequent display-mode changes to `callback`.
    ///
    /// The registration is released when the returned [`Subscription`] is
    /// dropped.
    fn watch(&self, callback: Box<dyn Fn(bool) + Send + Sync>) -> Subscription;
}

/// A display mode that never changes.
///
/// Stands in for hosts without a display-mode signal and for tests that pin
/// the OS answer.
#[derive(Clone, Copy, Debug)]
pub struct FixedDisplayMode {
    prefers_dark: Option<bool>,
}

impl FixedDisplayMode {
    /// Host that reports a light display mode.
    pub fn light() -> Self {
        Self {
            prefers_dark: Some(false),
        }
    }

    /// Host that reports a dark display mode.
    pub fn dark() -> Self {
        Self {
            prefers_dark: Some(true),
        }
    }

    /// Host with no display-mode signal.
    pub fn unsupported() -> Self {
        Self { prefers_dark: None }
    }
}

impl DisplayModeQuery for FixedDisplayMode {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn watch(&self, _callback: Box<dyn Fn(bool) + Send + Sync>) -> Subscription {
        Subscription::noop()
    }
}

struct HostShared {
    prefers_dark: Mutex<Option<bool>>,
    watchers: Mutex<FxHashMap<u64, WatchCallback>>,
    next_id: AtomicU64,
}

/// Push-based display-mode handle fed by the host event loop.
///
/// The host calls [`HostDisplayMode::set_prefers_dark`] whenever the OS
/// notifies it of a scheme change; watchers are told only on an actual
/// change of state. Clones share the same underlying signal.
#[derive(Clone)]
pub struct HostDisplayMode {
    shared: Arc<HostShared>,
}

impl HostDisplayMode {
    /// A handle whose mode is unknown until the host first reports one.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(HostShared {
                prefers_dark: Mutex::new(None),
                watchers: Mutex::new(FxHashMap::default()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// A handle seeded with a known mode.
    pub fn with_prefers_dark(dark: bool) -> Self {
        let handle = Self::new();
        *handle.shared.prefers_dark.lock().unwrap() = Some(dark);
        handle
    }

    /// Record the host-reported mode and notify watchers on change.
    pub fn set_prefers_dark(&self, dark: bool) {
        {
            let mut current = self.shared.prefers_dark.lock().unwrap();
            if *current == Some(dark) {
                return;
            }
            *current = Some(dark);
        }
        tracing::debug!("Host display mode changed: prefers_dark={}", dark);

        let snapshot: Vec<(u64, WatchCallback)> = self
            .shared
            .watchers
            .lock()
            .unwrap()
            .iter()
            .map(|(id, cb)| (*id, Arc::clone(cb)))
            .collect();
        for (id, callback) in snapshot {
            let live = self.shared.watchers.lock().unwrap().contains_key(&id);
            if live {
                callback(dark);
            }
        }
    }
}

impl Default for HostDisplayMode {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayModeQuery for HostDisplayMode {
    fn prefers_dark(&self) -> Option<bool> {
        *self.shared.prefers_dark.lock().unwrap()
    }

    fn watch(&self, callback: Box<dyn Fn(bool) + Send + Sync>) -> Subscription {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared
            .watchers
            .lock()
            .unwrap()
            .insert(id, Arc::from(callback));

        let weak = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.watchers.lock().unwrap().remove(&id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn fixed_modes_report_expected_answers() {
        assert_eq!(FixedDisplayMode::light().prefers_dark(), Some(false));
        assert_eq!(FixedDisplayMode::dark().prefers_dark(), Some(true));
        assert_eq!(FixedDisplayMode::unsupported().prefers_dark(), None);
    }

    #[test]
    fn host_mode_notifies_watchers_on_change_only() {
        let mode = HostDisplayMode::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        let _watch = mode.watch(Box::new(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        mode.set_prefers_dark(true);
        mode.set_prefers_dark(true); // no change, no delivery
        mode.set_prefers_dark(false);

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(mode.prefers_dark(), Some(false));
    }

    #[test]
    fn dropped_watch_stops_delivery() {
        let mode = HostDisplayMode::with_prefers_dark(false);
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        let watch = mode.watch(Box::new(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        drop(watch);

        mode.set_prefers_dark(true);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn clones_share_the_signal() {
        let mode = HostDisplayMode::new();
        let clone = mode.clone();
        clone.set_prefers_dark(true);
        assert_eq!(mode.prefers_dark(), Some(true));
    }
}
