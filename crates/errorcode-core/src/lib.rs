//! Structured, machine-readable service errors
//!
//! Every error is built from a named [`ErrorTemplate`] carrying a scope, a
//! custom code, a default detail and an HTTP status. Values serialize to a
//! JSON wire payload that is also their string form, so an intermediate
//! service can forward an upstream error untouched through
//! [`ErrorTemplate::PIPE`].

#![allow(clippy::must_use_candidate)]

mod catalog;
mod error;
pub mod payload;
pub mod scope;
pub mod status;
mod template;
mod value;

pub use catalog::{BUILTIN, Catalog, PASSTHRU_CODE, TemplateDefinition};
pub use error::{CatalogError, HttpError};
pub use template::{ErrorTemplate, TemplateKind, passthrough};
pub use value::ErrorValue;
