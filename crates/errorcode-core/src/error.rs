//! Error traits and registration failures

use http::StatusCode;
use thiserror::Error;

/// Trait for errors that can be converted to HTTP responses
///
/// Transport layers pick the wire-level response code from this, keeping
/// error values decoupled from any particular server framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `E0002`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Errors raised while registering templates into a [`Catalog`](crate::Catalog)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A required attribute was left blank
    #[error("template '{name}' has an empty {field}")]
    EmptyField {
        /// Template name (may itself be empty)
        name: String,
        /// Attribute that was empty
        field: &'static str,
    },

    /// Another template already uses this name
    #[error("template name '{name}' is already registered")]
    DuplicateName {
        /// Conflicting template name
        name: String,
    },

    /// The scope already assigns this custom code to another template
    #[error("custom code {custom_code} in scope {scope} is already used by '{existing}'")]
    DuplicateCode {
        /// Owning scope
        scope: String,
        /// Conflicting custom code
        custom_code: String,
        /// Name of the template that owns the code
        existing: String,
    },

    /// Custom code collides with the passthrough sentinel
    #[error("template '{name}' uses the reserved custom code {custom_code}")]
    ReservedCode {
        /// Template name
        name: String,
        /// Reserved custom code
        custom_code: String,
    },

    /// Scope collides with the passthrough scope
    #[error("template '{name}' uses the reserved scope {scope}")]
    ReservedScope {
        /// Template name
        name: String,
        /// Reserved scope
        scope: String,
    },

    /// Status is not a valid HTTP status code
    #[error("template '{name}' has invalid HTTP status {status}")]
    InvalidStatus {
        /// Template name
        name: String,
        /// Rejected status
        status: u16,
    },
}
