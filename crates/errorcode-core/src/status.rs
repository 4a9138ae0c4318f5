//! HTTP reason phrases for numeric codes

use http::StatusCode;

/// Standard reason phrase for a numeric status code
///
/// Returns an empty string for codes without a canonical phrase, including
/// the zero code left behind by an unparseable upstream payload.
pub fn reason_phrase(code: i32) -> &'static str {
    u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(reason_phrase(400), "Bad Request");
        assert_eq!(reason_phrase(401), "Unauthorized");
        assert_eq!(reason_phrase(403), "Forbidden");
        assert_eq!(reason_phrase(502), "Bad Gateway");
        assert_eq!(reason_phrase(503), "Service Unavailable");
    }

    #[test]
    fn unknown_codes_are_empty() {
        assert_eq!(reason_phrase(0), "");
        assert_eq!(reason_phrase(-1), "");
        assert_eq!(reason_phrase(99), "");
        assert_eq!(reason_phrase(599), "");
        assert_eq!(reason_phrase(70_000), "");
    }
}
