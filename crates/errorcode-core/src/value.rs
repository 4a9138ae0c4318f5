//! Error values and their JSON wire payload

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{HttpError, payload::null_as_empty, status};

/// A concrete error occurrence built from an [`ErrorTemplate`](crate::ErrorTemplate)
///
/// The string form of the value is its wire payload, so wrapping layers that
/// only keep `to_string()` still carry the full structure and a passthrough
/// template further down the chain can recover it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorValue {
    #[serde(rename = "id", default, deserialize_with = "null_as_empty")]
    scope_id: String,
    code: i32,
    custom_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    detail: String,
    #[serde(rename = "status", default, deserialize_with = "null_as_empty")]
    status_text: String,
    #[serde(skip)]
    degraded: bool,
}

impl ErrorValue {
    pub(crate) fn new(scope_id: &str, code: i32, custom_code: String, detail: String, degraded: bool) -> Self {
        Self {
            scope_id: scope_id.to_owned(),
            code,
            custom_code,
            detail,
            status_text: status::reason_phrase(code).to_owned(),
            degraded,
        }
    }

    /// Decode a value from its wire payload
    ///
    /// Unlike the passthrough path this keeps `id` and `status` too.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object with at least an
    /// integer `code` and a string `custom_code`
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Wire payload of this value
    pub fn to_json(&self) -> String {
        self.to_string()
    }

    /// Scope of the template the value was built from
    pub fn scope_id(&self) -> &str {
        &self.scope_id
    }

    /// Numeric code
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Custom code
    pub fn custom_code(&self) -> &str {
        &self.custom_code
    }

    /// Human-readable detail
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Reason phrase of [`code`](Self::code), empty when there is none
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Whether this passthrough value was built from an unparseable upstream payload
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&payload)
    }
}

impl std::error::Error for ErrorValue {}

impl HttpError for ErrorValue {
    fn status_code(&self) -> StatusCode {
        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY)
    }

    fn error_type(&self) -> &str {
        &self.custom_code
    }

    fn client_message(&self) -> String {
        self.detail.clone()
    }
}
