//! Logging helpers

/// First characters of a device token, safe for log output
///
/// Truncates on character boundaries, so tokens containing multi-byte
/// characters never split mid-character. Device tokens arrive unvalidated
/// from the send endpoint and must not be logged in full.
pub fn token_prefix(token: &str) -> String {
    token.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prefix_truncates_ascii() {
        assert_eq!(token_prefix("0123456789abcdef"), "01234567");
    }

    #[test]
    fn test_token_prefix_keeps_short_tokens() {
        assert_eq!(token_prefix("abc"), "abc");
        assert_eq!(token_prefix(""), "");
    }

    #[test]
    fn test_token_prefix_respects_char_boundaries() {
        // Byte 8 falls inside the two-byte 'é'; a byte slice would panic
        assert_eq!(token_prefix("aaaaaaaé-rest"), "aaaaaaaé");
        assert_eq!(token_prefix("ééééééééé"), "éééééééé");
    }
}
