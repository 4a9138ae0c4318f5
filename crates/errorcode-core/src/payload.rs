//! Best-effort decoding of error payloads emitted by upstream services

use serde::{Deserialize, Deserializer};

/// Fields an upstream payload must carry to count as structured
#[derive(Debug, Deserialize)]
struct WirePayload {
    code: i32,
    custom_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    detail: String,
}

/// Read an optional string field, treating an explicit `null` like a missing one
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Outcome of [`parse`]
///
/// When `parsed` is false the numeric and custom codes are zero-valued and
/// `detail` holds the raw input, which distinguishes a payload that failed
/// to decode from an upstream that really sent code 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPayload {
    /// Upstream numeric code
    pub code: i32,
    /// Upstream custom code
    pub custom_code: String,
    /// Upstream detail, or the raw input on failure
    pub detail: String,
    /// Whether the input decoded as a structured payload
    pub parsed: bool,
}

impl ParsedPayload {
    fn degraded(raw: &str) -> Self {
        Self {
            detail: raw.to_owned(),
            ..Self::default()
        }
    }
}

/// Try to read `raw` as a serialized error payload
///
/// Never fails: anything that is not a JSON object with an integer `code`
/// and a string `custom_code` degrades to a raw-detail result.
pub fn parse(raw: &str) -> ParsedPayload {
    match serde_json::from_str::<WirePayload>(raw) {
        Ok(payload) => ParsedPayload {
            code: payload.code,
            custom_code: payload.custom_code,
            detail: payload.detail,
            parsed: true,
        },
        Err(e) => {
            tracing::debug!(error = %e, "detail is not a structured error payload");
            ParsedPayload::degraded(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_payload() {
        let parsed = parse(r#"{"id":"svc","code":503,"custom_code":"E9","detail":"down","status":"Service Unavailable"}"#);
        assert!(parsed.parsed);
        assert_eq!(parsed.code, 503);
        assert_eq!(parsed.custom_code, "E9");
        assert_eq!(parsed.detail, "down");
    }

    #[test]
    fn detail_is_optional() {
        let parsed = parse(r#"{"code":404,"custom_code":"E1"}"#);
        assert!(parsed.parsed);
        assert_eq!(parsed.detail, "");
    }

    #[test]
    fn null_detail_keeps_codes() {
        let parsed = parse(r#"{"id":"svc","code":503,"custom_code":"E9","detail":null,"status":null}"#);
        assert!(parsed.parsed);
        assert_eq!(parsed.code, 503);
        assert_eq!(parsed.custom_code, "E9");
        assert_eq!(parsed.detail, "");
    }

    #[test]
    fn null_codes_degrade() {
        let raw = r#"{"code":null,"custom_code":"E9"}"#;
        let parsed = parse(raw);
        assert!(!parsed.parsed);
        assert_eq!(parsed.detail, raw);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed = parse(r#"{"code":418,"custom_code":"T","trace_id":"abc"}"#);
        assert!(parsed.parsed);
        assert_eq!(parsed.code, 418);
    }

    #[test]
    fn upstream_zero_code_is_not_degraded() {
        let parsed = parse(r#"{"code":0,"custom_code":""}"#);
        assert!(parsed.parsed);
        assert_eq!(parsed.code, 0);
    }

    #[test]
    fn plain_text_degrades() {
        let parsed = parse("boom");
        assert_eq!(
            parsed,
            ParsedPayload {
                code: 0,
                custom_code: String::new(),
                detail: "boom".to_owned(),
                parsed: false,
            }
        );
    }

    #[test]
    fn missing_required_fields_degrade() {
        for raw in [
            r#"{"custom_code":"E1"}"#,
            r#"{"code":400}"#,
            r#"{"code":"400","custom_code":"E1"}"#,
            r"[400]",
            "",
        ] {
            let parsed = parse(raw);
            assert!(!parsed.parsed, "{raw} should not parse");
            assert_eq!(parsed.detail, raw);
        }
    }
}
