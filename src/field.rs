//! Field value helpers.
//!
//! HamLog cannot store raw commas inside its pipe-delimited export, so free
//! text fields carry the token `_C_` in their place. A field holding nothing
//! or the `-` placeholder counts as empty and is never emitted.

/// Escape token standing in for a comma in free text fields.
pub const COMMA_TOKEN: &str = "_C_";

/// Placeholder HamLog writes for a field with no value.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Replace every `_C_` token with a comma.
pub fn decode_field(value: &str) -> String {
    value.replace(COMMA_TOKEN, ",")
}

/// True for `""` and the `-` placeholder.
pub fn is_empty_field(value: &str) -> bool {
    value.is_empty() || value == EMPTY_PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_replaces_every_token() {
        assert_eq!(decode_field("Haidian_C_ Beijing_C_ China"), "Haidian, Beijing, China");
    }

    #[test]
    fn test_decode_without_token_is_identity() {
        for value in ["", "-", "Beijing", "C_", "_C", "a_c_b"] {
            assert_eq!(decode_field(value), value);
            assert_eq!(decode_field(&decode_field(value)), value);
        }
    }

    #[test]
    fn test_decode_reverses_encoding() {
        let original = "Park, Lake, Hill";
        let encoded = original.replace(',', COMMA_TOKEN);
        assert_eq!(encoded, "Park_C_ Lake_C_ Hill");
        assert_eq!(decode_field(&encoded), original);
    }

    #[test]
    fn test_is_empty_field() {
        assert!(is_empty_field(""));
        assert!(is_empty_field("-"));
        assert!(!is_empty_field("--"));
        assert!(!is_empty_field(" "));
        assert!(!is_empty_field("59"));
    }
}
