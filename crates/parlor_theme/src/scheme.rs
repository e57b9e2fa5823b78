//! Theme preference and effective color scheme

use parlor_store::ValueCodec;

/// The stored three-way theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the host display mode.
    #[default]
    System,
}

impl ThemePreference {
    /// Next preference in the fixed cycle light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Preference for a stored string, or `None` for unknown literals.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// The effective color scheme after resolving `System`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Class marker carried by the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Scheme for a host-reported prefers-dark state.
    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Coercion-free string round-trip for the stored preference.
///
/// Unknown literals decode to `None`, so a corrupted stored theme hydrates
/// to the `System` default instead of poisoning the store.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferenceCodec;

impl ValueCodec<ThemePreference> for PreferenceCodec {
    fn encode(&self, value: &ThemePreference) -> String {
        value.as_str().to_owned()
    }

    fn decode(&self, raw: &str) -> Option<ThemePreference> {
        ThemePreference::from_name(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_period_three() {
        for start in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn cycle_order_is_light_dark_system() {
        assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
        assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
    }

    #[test]
    fn preference_codec_round_trips_known_literals() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            let encoded = PreferenceCodec.encode(&pref);
            assert_eq!(PreferenceCodec.decode(&encoded), Some(pref));
        }
    }

    #[test]
    fn preference_codec_rejects_unknown_literals() {
        assert_eq!(PreferenceCodec.decode("solarized"), None);
        assert_eq!(PreferenceCodec.decode("Dark"), None);
        assert_eq!(PreferenceCodec.decode(""), None);
    }

    #[test]
    fn scheme_resolution_from_prefers_dark() {
        assert_eq!(ColorScheme::from_prefers_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_prefers_dark(false), ColorScheme::Light);
    }
}
