//! Error templates and construction of error values

use std::{borrow::Cow, fmt};

use http::StatusCode;

use crate::{ErrorValue, payload};

/// How a template resolves the codes of the values it builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum TemplateKind {
    /// Codes come from the template itself
    Normal,
    /// Codes are forwarded from the upstream payload in the detail
    Passthrough,
}

/// A named, immutable error definition
///
/// Values are only ever built through [`instantiate`](Self::instantiate), so
/// callers cannot fabricate arbitrary scope/code combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplate {
    name: Cow<'static, str>,
    scope_id: Cow<'static, str>,
    custom_code: Cow<'static, str>,
    default_detail: Cow<'static, str>,
    http_status: StatusCode,
    kind: TemplateKind,
}

impl ErrorTemplate {
    pub(crate) const fn new(
        name: &'static str,
        scope_id: &'static str,
        custom_code: &'static str,
        default_detail: &'static str,
        http_status: StatusCode,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            scope_id: Cow::Borrowed(scope_id),
            custom_code: Cow::Borrowed(custom_code),
            default_detail: Cow::Borrowed(default_detail),
            http_status,
            kind: TemplateKind::Normal,
        }
    }

    pub(crate) const fn pipe(
        name: &'static str,
        scope_id: &'static str,
        custom_code: &'static str,
        default_detail: &'static str,
        http_status: StatusCode,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            scope_id: Cow::Borrowed(scope_id),
            custom_code: Cow::Borrowed(custom_code),
            default_detail: Cow::Borrowed(default_detail),
            http_status,
            kind: TemplateKind::Passthrough,
        }
    }

    pub(crate) fn owned(
        name: String,
        scope_id: String,
        custom_code: String,
        default_detail: String,
        http_status: StatusCode,
    ) -> Self {
        Self {
            name: Cow::Owned(name),
            scope_id: Cow::Owned(scope_id),
            custom_code: Cow::Owned(custom_code),
            default_detail: Cow::Owned(default_detail),
            http_status,
            kind: TemplateKind::Normal,
        }
    }

    /// Build an error value, optionally overriding the default detail
    ///
    /// Normal templates always stamp their own status and custom code, even
    /// when the detail looks like an upstream payload. Passthrough templates
    /// take both codes from the payload in the detail, falling back to zero
    /// values when it does not parse. The detail itself is kept verbatim.
    pub fn instantiate(&self, detail: Option<&str>) -> ErrorValue {
        let detail = detail.unwrap_or(&self.default_detail);

        match self.kind {
            TemplateKind::Normal => ErrorValue::new(
                &self.scope_id,
                i32::from(self.http_status.as_u16()),
                self.custom_code.to_string(),
                detail.to_owned(),
                false,
            ),
            TemplateKind::Passthrough => {
                let upstream = payload::parse(detail);
                if !upstream.parsed {
                    tracing::debug!(template = %self.name, "forwarding unstructured upstream detail");
                }
                ErrorValue::new(
                    &self.scope_id,
                    upstream.code,
                    upstream.custom_code,
                    detail.to_owned(),
                    !upstream.parsed,
                )
            }
        }
    }

    /// Build an error value with the default detail
    pub fn error(&self) -> ErrorValue {
        self.instantiate(None)
    }

    /// Build an error value with a custom detail
    pub fn with_detail(&self, detail: impl AsRef<str>) -> ErrorValue {
        self.instantiate(Some(detail.as_ref()))
    }

    /// Template name, e.g. `GenericInvalidToken`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning scope
    pub fn scope_id(&self) -> &str {
        &self.scope_id
    }

    /// Custom code, unique within the scope
    pub fn custom_code(&self) -> &str {
        &self.custom_code
    }

    /// Detail used when no override is given
    pub fn default_detail(&self) -> &str {
        &self.default_detail
    }

    /// HTTP status stamped onto normal values
    pub const fn http_status(&self) -> StatusCode {
        self.http_status
    }

    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn is_passthrough(&self) -> bool {
        self.kind == TemplateKind::Passthrough
    }
}

impl fmt::Display for ErrorTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.scope_id, self.custom_code)
    }
}

/// Forward an upstream error unmodified through [`ErrorTemplate::PIPE`]
///
/// Only the string form of `upstream` is used, so any error whose string
/// form is a wire payload keeps its codes.
pub fn passthrough<E: fmt::Display + ?Sized>(upstream: &E) -> ErrorValue {
    ErrorTemplate::PIPE.with_detail(upstream.to_string())
}
