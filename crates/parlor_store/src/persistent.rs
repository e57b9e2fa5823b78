//! Reactive value with a storage mirror

use crate::codec::ValueCodec;
use parlor_core::{ReactiveValue, Subscription};
use parlor_platform::StorageBackend;
use std::sync::Arc;

/// A reactive value mirrored to a storage backend.
///
/// Construction hydrates the value from the backend (falling back to the
/// given initial value), then registers a mirror subscriber that writes
/// every subsequent state — including the hydrated one — back through the
/// codec. Storage failures never reach callers; the in-memory value is
/// authoritative.
pub struct PersistentStore<T, C> {
    key: String,
    value: ReactiveValue<T>,
    _mirror: Subscription,
    _codec: std::marker::PhantomData<C>,
}

impl<T, C> PersistentStore<T, C>
where
    T: Clone + Send + Sync + 'static,
    C: ValueCodec<T> + Send + Sync + 'static,
{
    /// Create a store under `key`, hydrating from `backend`.
    pub fn new(
        key: impl Into<String>,
        initial: T,
        backend: Arc<dyn StorageBackend>,
        codec: C,
    ) -> Self {
        let key = key.into();

        let mut seed = initial;
        match backend.get(&key) {
            Ok(Some(raw)) => match codec.decode(&raw) {
                Some(value) => seed = value,
                None => {
                    tracing::warn!("Ignoring undecodable stored value for key `{key}`: {raw:?}");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to load key `{key}` from storage: {e}");
            }
        }

        let value = ReactiveValue::new(seed);
        let mirror = {
            let key = key.clone();
            value.subscribe(move |current: &T| {
                let encoded = codec.encode(current);
                if let Err(e) = backend.set(&key, &encoded) {
                    tracing::warn!("Failed to save key `{key}` to storage: {e}");
                }
            })
        };

        Self {
            key,
            value,
            _mirror: mirror,
            _codec: std::marker::PhantomData,
        }
    }

    /// Storage key this store mirrors to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Replace the value; subscribers are notified and the mirror persists.
    pub fn set(&self, value: T) {
        self.value.set(value);
    }

    /// Read-modify-write with a single notification and persist.
    pub fn update<F: FnOnce(T) -> T>(&self, f: F) {
        self.value.update(f);
    }

    /// Register `callback`, firing immediately with the current value and
    /// then on every change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.value.subscribe(callback)
    }
}
