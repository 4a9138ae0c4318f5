//! Simulated services that fail and proxy errors between each other

use errorcode_core::{ErrorTemplate, ErrorValue};

/// A downstream service that fails with a fixed template
pub struct Upstream {
    template: ErrorTemplate,
    detail: Option<String>,
}

impl Upstream {
    pub fn failing(template: ErrorTemplate) -> Self {
        Self { template, detail: None }
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_owned());
        self
    }

    /// Call the service; errors cross the boundary as `anyhow::Error`
    pub fn call(&self) -> anyhow::Result<()> {
        Err(self.template.instantiate(self.detail.as_deref()).into())
    }
}

/// An intermediate layer that only keeps the string form of upstream errors
pub struct Proxy<'a> {
    upstream: &'a Upstream,
}

impl<'a> Proxy<'a> {
    pub const fn new(upstream: &'a Upstream) -> Self {
        Self { upstream }
    }

    /// Forward upstream failures unmodified
    pub fn forward(&self) -> Result<(), ErrorValue> {
        self.upstream
            .call()
            .map_err(|e| errorcode_core::passthrough(&e))
    }

    /// Replace upstream failures with a template of its own
    pub fn wrap(&self, template: &ErrorTemplate) -> Result<(), ErrorValue> {
        self.upstream.call().map_err(|e| template.with_detail(e.to_string()))
    }
}
