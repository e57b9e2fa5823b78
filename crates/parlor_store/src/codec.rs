//! Typed codecs for stored values
//!
//! The storage layout contract keeps every value a plain string: booleans
//! are the literal text `true`/`false`, everything else its natural string
//! form. Codecs make that round-trip explicit and typed per store.

/// Encode/decode a store value to and from its stored string form.
pub trait ValueCodec<T> {
    /// String form written to storage.
    fn encode(&self, value: &T) -> String;

    /// Typed value for a stored string, or `None` when the string is not a
    /// valid encoding.
    fn decode(&self, raw: &str) -> Option<T>;
}

/// Boolean codec over the literal strings `true` and `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolCodec;

impl ValueCodec<bool> for BoolCodec {
    fn encode(&self, value: &bool) -> String {
        value.to_string()
    }

    fn decode(&self, raw: &str) -> Option<bool> {
        match raw {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Identity codec for string values.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringCodec;

impl ValueCodec<String> for StringCodec {
    fn encode(&self, value: &String) -> String {
        value.clone()
    }

    fn decode(&self, raw: &str) -> Option<String> {
        Some(raw.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_codec_round_trips_literals() {
        assert_eq!(BoolCodec.encode(&true), "true");
        assert_eq!(BoolCodec.encode(&false), "false");
        assert_eq!(BoolCodec.decode("true"), Some(true));
        assert_eq!(BoolCodec.decode("false"), Some(false));
    }

    #[test]
    fn bool_codec_rejects_everything_else() {
        assert_eq!(BoolCodec.decode("TRUE"), None);
        assert_eq!(BoolCodec.decode("1"), None);
        assert_eq!(BoolCodec.decode(""), None);
    }

    #[test]
    fn string_codec_is_identity() {
        assert_eq!(StringCodec.encode(&"QUARTZ".to_string()), "QUARTZ");
        assert_eq!(StringCodec.decode("QUARTZ"), Some("QUARTZ".to_string()));
        assert_eq!(StringCodec.decode(""), Some(String::new()));
    }
}
