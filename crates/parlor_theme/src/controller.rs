//! Theme controller
//!
//! Owns the stored preference and pushes side effects synchronously on each
//! mutation: the preference is persisted through its codec, the effective
//! scheme is recomputed, and the document root's class markers are replaced
//! in full — both markers removed, exactly one added back, so no stale
//! marker can accumulate.

use crate::scheme::{ColorScheme, PreferenceCodec, ThemePreference};
use parlor_core::Subscription;
use parlor_platform::{DisplayModeQuery, DomRoot, StorageBackend};
use parlor_store::PersistentStore;
use std::sync::Arc;

/// Storage key carrying the theme preference.
pub const THEME_KEY: &str = "theme";

type PreferenceStore = PersistentStore<ThemePreference, PreferenceCodec>;

/// Persists the three-way preference and applies the resolved scheme.
pub struct ThemeController {
    preference: Arc<PreferenceStore>,
    display: Arc<dyn DisplayModeQuery>,
    root: Arc<dyn DomRoot>,
}

impl ThemeController {
    /// Create a controller hydrating the preference from `storage`.
    ///
    /// Nothing is applied to the root until [`ThemeController::attach`] or
    /// the first explicit mutation.
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        display: Arc<dyn DisplayModeQuery>,
        root: Arc<dyn DomRoot>,
    ) -> Self {
        let preference = Arc::new(PersistentStore::new(
            THEME_KEY,
            ThemePreference::default(),
            storage,
            PreferenceCodec,
        ));
        Self {
            preference,
            display,
            root,
        }
    }

    /// The stored preference.
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    /// Register `callback` on the stored preference; fires immediately with
    /// the current value, then on every change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ThemePreference) + Send + Sync + 'static,
    {
        self.preference.subscribe(callback)
    }

    /// Store `pref`, then recompute and apply the effective scheme.
    pub fn set_theme(&self, pref: ThemePreference) {
        tracing::debug!("Theme preference set to {:?}", pref);
        self.preference.set(pref);
        self.apply();
    }

    /// Step the preference through the fixed cycle.
    ///
    /// Routed through [`ThemeController::set_theme`], so persistence and
    /// root application happen exactly once per call.
    pub fn cycle_theme(&self) {
        self.set_theme(self.preference.get().next());
    }

    /// The effective scheme for the current preference.
    pub fn effective_scheme(&self) -> ColorScheme {
        match self.preference.get() {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            // Hosts without a display-mode signal resolve `System` to light.
            ThemePreference::System => {
                ColorScheme::from_prefers_dark(self.display.prefers_dark().unwrap_or(false))
            }
        }
    }

    fn apply(&self) {
        let scheme = self.effective_scheme();
        apply_marker(self.root.as_ref(), scheme);
    }

    /// Apply the hydrated preference now and follow display-mode changes
    /// while the returned guard lives.
    ///
    /// A display change re-applies the scheme only while the stored
    /// preference is [`ThemePreference::System`]; an explicit preference is
    /// never overridden by the OS.
    pub fn attach(&self) -> ThemeAttachment {
        self.apply();

        let preference = Arc::clone(&self.preference);
        let root = Arc::clone(&self.root);
        let watch = self.display.watch(Box::new(move |dark| {
            if preference.get() == ThemePreference::System {
                apply_marker(root.as_ref(), ColorScheme::from_prefers_dark(dark));
            }
        }));

        ThemeAttachment { _watch: watch }
    }
}

/// Full replace: both markers removed, exactly one added back.
fn apply_marker(root: &dyn DomRoot, scheme: ColorScheme) {
    root.remove_class(ColorScheme::Light.class_name());
    root.remove_class(ColorScheme::Dark.class_name());
    root.add_class(scheme.class_name());
    tracing::debug!("Applied color scheme {:?}", scheme);
}

/// Live display-mode registration paired with [`ThemeController::attach`].
///
/// Dropping the attachment releases the watch; the controller itself keeps
/// working, it just stops reacting to OS scheme changes.
pub struct ThemeAttachment {
    _watch: Subscription,
}
