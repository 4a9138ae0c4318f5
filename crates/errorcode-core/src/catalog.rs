//! Built-in error templates and the runtime template registry

use http::StatusCode;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::{CatalogError, ErrorTemplate, scope};

/// Custom code reserved for the passthrough template
pub const PASSTHRU_CODE: &str = "PASSTHRU";

impl ErrorTemplate {
    /// Forwards the code and custom code of an upstream service
    pub const PIPE: Self = Self::pipe("Pipe", scope::PASSTHRU, PASSTHRU_CODE, "passthru", StatusCode::BAD_GATEWAY);

    /// Health check failed
    pub const GENERIC_HE_IS_DEAD_JIM: Self = Self::new(
        "GenericHeIsDeadJim",
        scope::GENERIC,
        "E0000",
        "he is dead, Jim",
        StatusCode::BAD_GATEWAY,
    );

    /// Caller is not authorized
    pub const GENERIC_NOT_AUTHORIZED: Self = Self::new(
        "GenericNotAuthorized",
        scope::GENERIC,
        "E0001",
        "not authorized",
        StatusCode::UNAUTHORIZED,
    );

    /// Token could not be validated
    pub const GENERIC_INVALID_TOKEN: Self = Self::new(
        "GenericInvalidToken",
        scope::GENERIC,
        "E0002",
        "invalid token",
        StatusCode::BAD_REQUEST,
    );

    /// Token is past its expiry
    pub const GENERIC_TOKEN_EXPIRED: Self = Self::new(
        "GenericTokenExpired",
        scope::GENERIC,
        "E0003",
        "token expired",
        StatusCode::BAD_REQUEST,
    );

    /// Caller lacks the privileges for the operation
    pub const GENERIC_INSUFFICIENT_PRIVILEGES: Self = Self::new(
        "GenericInsufficientPrivileges",
        scope::GENERIC,
        "E0004",
        "insufficient privileges",
        StatusCode::FORBIDDEN,
    );

    /// Request metadata is malformed
    pub const GENERIC_INVALID_META_DATA: Self = Self::new(
        "GenericInvalidMetaData",
        scope::GENERIC,
        "E0005",
        "invalid meta data",
        StatusCode::BAD_REQUEST,
    );
}

/// Templates shipped with the crate, grouped by scope
///
/// Codes listed here are part of the external contract. New templates are
/// appended; existing entries are never renumbered or reused.
pub static BUILTIN: &[ErrorTemplate] = &[
    ErrorTemplate::PIPE,
    // generic
    ErrorTemplate::GENERIC_HE_IS_DEAD_JIM,
    ErrorTemplate::GENERIC_NOT_AUTHORIZED,
    ErrorTemplate::GENERIC_INVALID_TOKEN,
    ErrorTemplate::GENERIC_TOKEN_EXPIRED,
    ErrorTemplate::GENERIC_INSUFFICIENT_PRIVILEGES,
    ErrorTemplate::GENERIC_INVALID_META_DATA,
    // core proxy: none yet
    // core: none yet
];

/// Definition of a template registered at startup, e.g. from configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateDefinition {
    /// Unique template name
    pub name: String,
    /// Owning scope
    pub scope: String,
    /// Custom code, unique within the scope
    pub custom_code: String,
    /// Default detail
    pub detail: String,
    /// HTTP status
    pub status: u16,
}

/// Registry of every template known to a process
///
/// Holds the built-in templates plus any registered at startup, keyed by
/// name in registration order. Registration only ever adds.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: IndexMap<String, ErrorTemplate>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog holding only the built-in templates
    pub fn builtin() -> Self {
        let templates = BUILTIN
            .iter()
            .map(|template| (template.name().to_owned(), template.clone()))
            .collect();

        Self { templates }
    }

    /// Add a normal template
    ///
    /// Surrounding whitespace is stripped from the name, scope and custom code.
    ///
    /// # Errors
    ///
    /// Returns an error if an attribute is empty, the scope or custom code is
    /// reserved for passthrough, the status is not a valid HTTP status, or
    /// the name or scope/custom code pair is already taken
    pub fn register(&mut self, definition: TemplateDefinition) -> Result<&ErrorTemplate, CatalogError> {
        let TemplateDefinition {
            name,
            scope,
            custom_code,
            detail,
            status,
        } = definition;

        let (name, scope, custom_code) = (
            name.trim().to_owned(),
            scope.trim().to_owned(),
            custom_code.trim().to_owned(),
        );

        let empty = [("name", &name), ("scope", &scope), ("custom code", &custom_code)]
            .into_iter()
            .find_map(|(field, value)| value.is_empty().then_some(field));
        if let Some(field) = empty {
            return Err(CatalogError::EmptyField { name, field });
        }

        if scope::is_reserved(&scope) {
            return Err(CatalogError::ReservedScope { name, scope });
        }

        if custom_code == PASSTHRU_CODE {
            return Err(CatalogError::ReservedCode { name, custom_code });
        }

        let Ok(http_status) = StatusCode::from_u16(status) else {
            return Err(CatalogError::InvalidStatus { name, status });
        };

        if self.templates.contains_key(&name) {
            return Err(CatalogError::DuplicateName { name });
        }

        if let Some(existing) = self.find(&scope, &custom_code) {
            return Err(CatalogError::DuplicateCode {
                existing: existing.name().to_owned(),
                scope,
                custom_code,
            });
        }

        tracing::debug!(%name, %scope, %custom_code, status, "registered error template");

        let template = ErrorTemplate::owned(name.clone(), scope, custom_code, detail, http_status);
        Ok(self.templates.entry(name).or_insert(template))
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Option<&ErrorTemplate> {
        self.templates.get(name)
    }

    /// Look up a template by scope and custom code
    pub fn find(&self, scope_id: &str, custom_code: &str) -> Option<&ErrorTemplate> {
        self.templates
            .values()
            .find(|template| template.scope_id() == scope_id && template.custom_code() == custom_code)
    }

    /// Templates belonging to a scope
    pub fn scope<'a>(&'a self, scope_id: &'a str) -> impl Iterator<Item = &'a ErrorTemplate> + 'a {
        self.templates.values().filter(move |template| template.scope_id() == scope_id)
    }

    /// Distinct scopes in first-seen order
    pub fn scopes(&self) -> Vec<&str> {
        self.templates
            .values()
            .map(ErrorTemplate::scope_id)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, ErrorTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ErrorTemplate;
    type IntoIter = indexmap::map::Values<'a, String, ErrorTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
