//! Parlor Theme System
//!
//! Three-way theme preference management for the Parlor UI.
//!
//! # Overview
//!
//! - [`ThemePreference`]: the stored `light`/`dark`/`system` choice
//! - [`ColorScheme`]: the effective `light`/`dark` scheme after resolving
//!   `system` against the host display-mode signal
//! - [`ThemeController`]: persists the preference, resolves it, and applies
//!   the result as a class marker on the document root
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use parlor_platform::{HostDisplayMode, MemoryRoot, MemoryStorage};
//! use parlor_theme::{ThemeController, ThemePreference};
//!
//! let display = HostDisplayMode::with_prefers_dark(true);
//! let root = Arc::new(MemoryRoot::new());
//!
//! let controller = ThemeController::new(
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(display.clone()),
//!     root.clone(),
//! );
//!
//! // Apply the hydrated preference and follow OS scheme changes.
//! let attachment = controller.attach();
//! assert_eq!(root.classes(), vec!["dark".to_string()]);
//!
//! controller.set_theme(ThemePreference::Light);
//! assert_eq!(root.classes(), vec!["light".to_string()]);
//!
//! drop(attachment); // releases the display watch
//! ```
//!
//! # Resolution
//!
//! An explicit `light`/`dark` preference maps to itself unconditionally;
//! `system` follows the display signal and falls back to light on hosts
//! without one. While attached, a display change re-applies the scheme only
//! when the stored preference is `system` — an explicit choice is never
//! overridden by the OS.

pub mod controller;
pub mod scheme;

#[cfg(feature = "watcher")]
pub mod watcher;

pub use controller::{ThemeAttachment, ThemeController, THEME_KEY};
pub use scheme::{ColorScheme, PreferenceCodec, ThemePreference};

#[cfg(feature = "watcher")]
pub use watcher::{SchemeWatcher, WatcherConfig};
