//! Scope lookup per request.
//!
//! # Responsibilities
//! - Match Host header against server scopes (exact, case-insensitive)
//! - Match path prefix against location scopes (case-sensitive)
//! - Fall back to the enclosing scope when nothing narrower matches
//!
//! # Design Decisions
//! - Host matching is case-insensitive (per HTTP spec); a numeric `:port`
//!   suffix is ignored
//! - Path matching is case-sensitive
//! - First matching location wins, in configuration order
//! - No regex to guarantee O(n) matching
//! - Lookup always yields a scope; the global scope is the final fallback,
//!   so a request can never be left without a definite setting

use axum::body::Body;
use axum::http::Request;

use crate::config::resolve::{ResolvedScope, ScopeTree};

/// Read-only lookup over the resolved scope tree.
///
/// Immutable after construction, safe to share across request handlers
/// without locks.
#[derive(Debug)]
pub struct ScopeRouter {
    tree: ScopeTree,
}

impl ScopeRouter {
    pub fn new(tree: ScopeTree) -> Self {
        Self { tree }
    }

    /// Resolve the scope whose configuration governs `req`.
    pub fn match_request(&self, req: &Request<Body>) -> ResolvedScope {
        let host = req.headers().get("host").and_then(|h| h.to_str().ok());
        self.lookup(host, req.uri().path())
    }

    /// Scope lookup by host and path: server by host, then the first
    /// location whose prefix matches the path, else the server itself,
    /// else the global scope.
    pub fn lookup(&self, host: Option<&str>, path: &str) -> ResolvedScope {
        let Some(host) = host else {
            return self.tree.global;
        };
        let host = strip_port(host).to_lowercase();

        let Some(server) = self.tree.servers.iter().find(|s| s.host == host) else {
            return self.tree.global;
        };

        server
            .locations
            .iter()
            .find(|loc| path.starts_with(&loc.path_prefix))
            .map(|loc| loc.scope)
            .unwrap_or(server.scope)
    }
}

/// Strip an optional `:port` suffix from a Host header value.
/// Bracketed IPv6 literals are left verbatim.
fn strip_port(raw: &str) -> &str {
    match raw.rsplit_once(':') {
        Some((host, port))
            if !host.is_empty()
                && !host.contains(':')
                && port.chars().all(|c| c.is_ascii_digit()) =>
        {
            host
        }
        _ => raw,
    }
}
