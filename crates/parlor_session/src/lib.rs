//! Parlor Session State
//!
//! The application root of the Parlor state layer: one [`Capabilities`]
//! bundle in, every store the UI consumes out. Stores are explicitly
//! constructed and owned here — there is no module-level shared state — and
//! UI components receive them by reference from the [`AppContext`].
//!
//! # Example
//!
//! ```rust
//! use parlor_session::{AppContext, Capabilities, Player};
//!
//! // Headless construction: nothing persists, nothing fails.
//! let app = AppContext::new(Capabilities::headless());
//!
//! app.session.set_game_code("QUARTZ");
//! app.session.add_player(Player {
//!     name: "ada".to_string(),
//!     picture: "PepeTheFrog.png".to_string(),
//! });
//! assert_eq!(app.session.players().get().len(), 1);
//! ```

use parlor_core::ReactiveValue;
use parlor_platform::{
    DisplayModeQuery, DomRoot, FixedDisplayMode, NoopRoot, NoopStorage, StorageBackend,
};
use parlor_store::{BoolCodec, PersistentStore};
use parlor_theme::ThemeController;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage key for the star-variant preference.
pub const USE_STAR_KEY: &str = "useStar";
/// Storage key for the host flag.
pub const IS_HOST_KEY: &str = "isHost";
/// Storage key for the one-shot grid-animation flag.
pub const GRID_ANIMATION_KEY: &str = "hasPlayedGridAnimation";

/// Host capabilities injected into the state layer.
#[derive(Clone)]
pub struct Capabilities {
    /// Durable key-value storage; survives restarts.
    pub durable: Arc<dyn StorageBackend>,
    /// Session-scoped key-value storage; dropped with the session.
    pub session: Arc<dyn StorageBackend>,
    /// OS display-mode signal.
    pub display: Arc<dyn DisplayModeQuery>,
    /// Document root carrying the theme class markers.
    pub root: Arc<dyn DomRoot>,
}

impl Capabilities {
    /// Capability set for non-interactive contexts: construction and every
    /// mutation succeed, they simply do not persist or render.
    pub fn headless() -> Self {
        Self {
            durable: Arc::new(NoopStorage),
            session: Arc::new(NoopStorage),
            display: Arc::new(FixedDisplayMode::unsupported()),
            root: Arc::new(NoopRoot),
        }
    }
}

/// A lobby participant, as exchanged with the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Registry name of the player's profile picture.
    pub picture: String,
}

/// Session stores owned by the application root.
pub struct SessionState {
    use_star: PersistentStore<bool, BoolCodec>,
    is_host: PersistentStore<bool, BoolCodec>,
    has_played_grid_animation: PersistentStore<bool, BoolCodec>,
    game_code: ReactiveValue<String>,
    players: ReactiveValue<Vec<Player>>,
}

impl SessionState {
    /// Build the session stores against the given capabilities.
    pub fn new(capabilities: &Capabilities) -> Self {
        Self {
            use_star: PersistentStore::new(
                USE_STAR_KEY,
                false,
                Arc::clone(&capabilities.durable),
                BoolCodec,
            ),
            is_host: PersistentStore::new(
                IS_HOST_KEY,
                false,
                Arc::clone(&capabilities.durable),
                BoolCodec,
            ),
            has_played_grid_animation: PersistentStore::new(
                GRID_ANIMATION_KEY,
                false,
                Arc::clone(&capabilities.session),
                BoolCodec,
            ),
            game_code: ReactiveValue::new(String::new()),
            players: ReactiveValue::new(Vec::new()),
        }
    }

    /// Star-variant preference; durable.
    pub fn use_star(&self) -> &PersistentStore<bool, BoolCodec> {
        &self.use_star
    }

    /// Whether this client hosts the current game; durable.
    pub fn is_host(&self) -> &PersistentStore<bool, BoolCodec> {
        &self.is_host
    }

    /// One-shot intro-animation flag; session-scoped, so the animation
    /// replays in a fresh session.
    pub fn has_played_grid_animation(&self) -> &PersistentStore<bool, BoolCodec> {
        &self.has_played_grid_animation
    }

    /// Current game code; plain reactive, never persisted.
    pub fn game_code(&self) -> &ReactiveValue<String> {
        &self.game_code
    }

    /// Replace the current game code.
    pub fn set_game_code(&self, code: impl Into<String>) {
        self.game_code.set(code.into());
    }

    /// Lobby roster; plain reactive, never persisted.
    pub fn players(&self) -> &ReactiveValue<Vec<Player>> {
        &self.players
    }

    /// Append a player to the roster.
    pub fn add_player(&self, player: Player) {
        self.players.update(|mut players| {
            players.push(player);
            players
        });
    }

    /// Remove every roster entry with the given name; unknown names are a
    /// no-op.
    pub fn remove_player(&self, name: &str) {
        self.players.update(|mut players| {
            players.retain(|p| p.name != name);
            players
        });
    }

    /// Empty the roster.
    pub fn clear_players(&self) {
        self.players.set(Vec::new());
    }
}

/// Composition root: one capability bundle, every store the UI consumes.
pub struct AppContext {
    pub theme: ThemeController,
    pub session: SessionState,
}

impl AppContext {
    pub fn new(capabilities: Capabilities) -> Self {
        let theme = ThemeController::new(
            Arc::clone(&capabilities.durable),
            Arc::clone(&capabilities.display),
            Arc::clone(&capabilities.root),
        );
        let session = SessionState::new(&capabilities);
        Self { theme, session }
    }
}
