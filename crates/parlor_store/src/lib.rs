//! Parlor Persistent Stores
//!
//! A [`PersistentStore`] is a reactive value whose current state is mirrored
//! to a [`parlor_platform::StorageBackend`] on every change and hydrated
//! from that backend at creation.
//!
//! Storage values are always strings; each store chooses a typed
//! [`ValueCodec`] at construction, so the interpretation of those strings is
//! explicit rather than special-cased in the store.
//!
//! Persistence is best-effort: backend failures are logged with the
//! offending key and swallowed, and the in-memory value remains
//! authoritative.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use parlor_platform::MemoryStorage;
//! use parlor_store::{BoolCodec, PersistentStore};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let is_host = PersistentStore::new("isHost", false, storage.clone(), BoolCodec);
//!
//! is_host.set(true);
//! assert_eq!(storage.get("isHost").unwrap(), Some("true".to_string()));
//! # use parlor_platform::StorageBackend;
//! ```

pub mod codec;
pub mod persistent;

pub use codec::{BoolCodec, StringCodec, ValueCodec};
pub use persistent::PersistentStore;
