//! Parlor Profile Pictures
//!
//! Build-time registry mapping picture names to embedded PNG bytes. Adding a
//! picture means dropping the file into `assets/` and extending the table
//! here; the registry is immutable at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use parlor_assets::{get_by_name, random_name};
//!
//! // Assign a newly joined player a random picture.
//! let name = random_name();
//! let picture = get_by_name(name).unwrap();
//! assert!(!picture.bytes.is_empty());
//!
//! // Unknown names never panic.
//! assert!(get_by_name("nonexistent.png").is_none());
//! ```

use rand::seq::IndexedRandom;

/// A registered profile picture.
#[derive(Debug)]
pub struct ProfilePicture {
    /// Registry name, as exchanged with the transport layer.
    pub name: &'static str,
    /// Embedded PNG contents.
    pub bytes: &'static [u8],
}

static REGISTRY: &[ProfilePicture] = &[
    ProfilePicture {
        name: "BabyShrek.png",
        bytes: include_bytes!("../assets/BabyShrek.png"),
    },
    ProfilePicture {
        name: "ConfusedMonkey.png",
        bytes: include_bytes!("../assets/ConfusedMonkey.png"),
    },
    ProfilePicture {
        name: "DisappointedOtter.png",
        bytes: include_bytes!("../assets/DisappointedOtter.png"),
    },
    ProfilePicture {
        name: "PepeTheFrog.png",
        bytes: include_bytes!("../assets/PepeTheFrog.png"),
    },
    ProfilePicture {
        name: "spooderman.png",
        bytes: include_bytes!("../assets/spooderman.png"),
    },
];

/// Registered picture names, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|p| p.name)
}

/// Look up a picture by registry name; unknown names yield `None`.
pub fn get_by_name(name: &str) -> Option<&'static ProfilePicture> {
    REGISTRY.iter().find(|p| p.name == name)
}

/// Uniformly random registered picture name.
pub fn random_name() -> &'static str {
    random_name_with(&mut rand::rng())
}

/// Uniformly random registered picture name from a caller-supplied
/// generator, for deterministic selection.
pub fn random_name_with<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    REGISTRY
        .choose(rng)
        .expect("picture registry is never empty")
        .name
}
