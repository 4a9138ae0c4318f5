//! Scope identifiers grouping related error templates

/// Scope of the passthrough template
pub const PASSTHRU: &str = "passthru";

/// Errors any service may raise
pub const GENERIC: &str = "dongfeng.svc.generic";

/// Core server errors
pub const CORE: &str = "dongfeng.svc.core.server";

/// Core proxy errors
pub const CORE_PROXY: &str = "dongfeng.svc.core.proxy";

/// Every scope known at compile time, in declaration order
pub const ALL: &[&str] = &[PASSTHRU, GENERIC, CORE_PROXY, CORE];

/// Whether templates outside the built-in catalog may use this scope
pub fn is_reserved(scope: &str) -> bool {
    scope == PASSTHRU
}
