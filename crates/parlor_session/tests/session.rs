use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parlor_platform::{
    FileStorage, FixedDisplayMode, MemoryRoot, MemoryStorage, NoopRoot, StorageBackend,
};
use parlor_session::{
    AppContext, Capabilities, Player, SessionState, GRID_ANIMATION_KEY, IS_HOST_KEY, USE_STAR_KEY,
};
use parlor_theme::ThemePreference;

fn player(name: &str) -> Player {
    Player {
        name: name.to_string(),
        picture: "spooderman.png".to_string(),
    }
}

fn in_memory_capabilities() -> (Capabilities, Arc<MemoryStorage>, Arc<MemoryStorage>) {
    let durable = Arc::new(MemoryStorage::new());
    let session = Arc::new(MemoryStorage::new());
    let capabilities = Capabilities {
        durable: durable.clone(),
        session: session.clone(),
        display: Arc::new(FixedDisplayMode::light()),
        root: Arc::new(MemoryRoot::new()),
    };
    (capabilities, durable, session)
}

#[test]
fn headless_context_supports_the_full_surface() {
    let app = AppContext::new(Capabilities::headless());

    app.session.use_star().set(true);
    app.session.is_host().set(true);
    app.session.has_played_grid_animation().set(true);
    app.session.set_game_code("QUARTZ");
    app.session.add_player(player("ada"));
    app.session.remove_player("ada");
    app.theme.cycle_theme();

    assert!(app.session.use_star().get());
    assert!(app.session.is_host().get());
    assert_eq!(app.session.game_code().get(), "QUARTZ");
    assert!(app.session.players().get().is_empty());
    assert_eq!(app.theme.preference(), ThemePreference::Light);
}

#[test]
fn flags_land_in_their_assigned_backends() {
    let (capabilities, durable, session) = in_memory_capabilities();
    let state = SessionState::new(&capabilities);

    state.use_star().set(true);
    state.is_host().set(true);
    state.has_played_grid_animation().set(true);

    assert_eq!(durable.get(USE_STAR_KEY).unwrap(), Some("true".to_string()));
    assert_eq!(durable.get(IS_HOST_KEY).unwrap(), Some("true".to_string()));
    assert_eq!(
        session.get(GRID_ANIMATION_KEY).unwrap(),
        Some("true".to_string())
    );
    // Session-scoped state never touches the durable backend.
    assert_eq!(durable.get(GRID_ANIMATION_KEY).unwrap(), None);
}

#[test]
fn stored_flags_hydrate_on_construction() {
    let (capabilities, durable, _session) = in_memory_capabilities();
    durable.set(USE_STAR_KEY, "true").unwrap();
    durable.set(IS_HOST_KEY, "false").unwrap();

    let state = SessionState::new(&capabilities);
    assert!(state.use_star().get());
    assert!(!state.is_host().get());
    // Nothing stored for the animation flag: default applies.
    assert!(!state.has_played_grid_animation().get());
}

#[test]
fn session_state_survives_a_restart_on_durable_storage_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parlor.toml");

    {
        let capabilities = Capabilities {
            durable: Arc::new(FileStorage::open(&path)),
            session: Arc::new(MemoryStorage::new()),
            display: Arc::new(FixedDisplayMode::light()),
            root: Arc::new(NoopRoot),
        };
        let state = SessionState::new(&capabilities);
        state.is_host().set(true);
        state.has_played_grid_animation().set(true);
    }

    // New process: fresh session backend, same durable file.
    let capabilities = Capabilities {
        durable: Arc::new(FileStorage::open(&path)),
        session: Arc::new(MemoryStorage::new()),
        display: Arc::new(FixedDisplayMode::light()),
        root: Arc::new(NoopRoot),
    };
    let state = SessionState::new(&capabilities);
    assert!(state.is_host().get());
    assert!(!state.has_played_grid_animation().get());
}

#[test]
fn roster_mutations_notify_subscribers() {
    let (capabilities, _durable, _session) = in_memory_capabilities();
    let state = SessionState::new(&capabilities);

    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let _sub = state.players().subscribe(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });

    state.add_player(player("ada"));
    state.add_player(player("grace"));
    state.remove_player("ada");
    state.clear_players();

    // Immediate fire plus one per mutation.
    assert_eq!(count.load(Ordering::SeqCst), 5);
    assert!(state.players().get().is_empty());
}

#[test]
fn remove_player_drops_every_entry_with_that_name() {
    let (capabilities, _durable, _session) = in_memory_capabilities();
    let state = SessionState::new(&capabilities);

    state.add_player(player("ada"));
    state.add_player(player("ada"));
    state.add_player(player("grace"));
    state.remove_player("ada");

    let names: Vec<String> = state.players().get().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["grace".to_string()]);
}

#[test]
fn player_round_trips_through_json() {
    let original = Player {
        name: "ada".to_string(),
        picture: "BabyShrek.png".to_string(),
    };

    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, r#"{"name":"ada","picture":"BabyShrek.png"}"#);

    let parsed: Player = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn app_context_applies_theme_through_shared_root() {
    let root = Arc::new(MemoryRoot::new());
    let capabilities = Capabilities {
        durable: Arc::new(MemoryStorage::new()),
        session: Arc::new(MemoryStorage::new()),
        display: Arc::new(FixedDisplayMode::dark()),
        root: root.clone(),
    };

    let app = AppContext::new(capabilities);
    let _attachment = app.theme.attach();
    assert_eq!(root.classes(), vec!["dark".to_string()]);
}
