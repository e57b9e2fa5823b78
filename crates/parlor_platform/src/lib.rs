//! Parlor Platform Capabilities
//!
//! Explicit host-environment capabilities injected into the state layer:
//!
//! - [`StorageBackend`]: key-value persistence with durable
//!   ([`FileStorage`]), session-scoped ([`MemoryStorage`]), and absent-host
//!   ([`NoopStorage`]) variants
//! - [`DisplayModeQuery`]: read-only OS color-scheme signal
//! - [`DomRoot`]: class markers on the document root element
//!
//! Every capability ships a documented no-op variant, so a non-interactive
//! context (build step, test harness, headless session) degrades by
//! substituting a stub rather than by probing the environment at each call
//! site. Construction and mutation never fail on a stubbed host; they simply
//! do not persist or render.

pub mod display;
pub mod error;
pub mod root;
pub mod storage;

pub use display::{DisplayModeQuery, FixedDisplayMode, HostDisplayMode};
pub use error::{PlatformError, Result};
pub use root::{DomRoot, MemoryRoot, NoopRoot};
pub use storage::{FileStorage, MemoryStorage, NoopStorage, StorageBackend};
