//! Scope merge for the `keepalive_autoclose` directive.
//!
//! # Responsibilities
//! - Collapse the tri-state directive into a definite boolean per scope
//! - Apply inheritance top-down: global → server → location
//! - Produce an immutable tree shared read-only with request handlers
//!
//! # Design Decisions
//! - Resolution runs exactly once, at load time; never per request
//! - The directive is opt-in: an entirely unset chain resolves to `false`
//! - Re-resolving an already-definite tree is a no-op (merge is idempotent)

use crate::config::schema::AppConfig;

/// Definite per-scope settings after merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedScope {
    /// Whether keep-alive auto-close is enabled at this scope.
    pub autoclose: bool,
}

/// A resolved virtual-server scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServer {
    /// Host this server matches, lowercased at build time.
    pub host: String,
    pub scope: ResolvedScope,
    pub locations: Vec<ResolvedLocation>,
}

/// A resolved location scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub path_prefix: String,
    pub scope: ResolvedScope,
}

/// The fully resolved configuration tree.
///
/// Built before any traffic is dispatched and immutable thereafter, so
/// request handlers can read it concurrently without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeTree {
    pub global: ResolvedScope,
    pub servers: Vec<ResolvedServer>,
}

/// Merge one scope's directive with its parent's resolved value:
/// an explicit value wins, otherwise inherit.
fn merge_flag(explicit: Option<bool>, parent: bool) -> bool {
    explicit.unwrap_or(parent)
}

impl ScopeTree {
    /// Resolve the raw config into a definite tree, ancestor before
    /// descendant. A root with no explicit value resolves to `false`.
    pub fn resolve(config: &AppConfig) -> Self {
        let global = ResolvedScope {
            autoclose: merge_flag(config.keepalive_autoclose, false),
        };

        let servers = config
            .servers
            .iter()
            .map(|server| {
                let scope = ResolvedScope {
                    autoclose: merge_flag(server.keepalive_autoclose, global.autoclose),
                };
                let locations = server
                    .locations
                    .iter()
                    .map(|location| ResolvedLocation {
                        path_prefix: location.path_prefix.clone(),
                        scope: ResolvedScope {
                            autoclose: merge_flag(
                                location.keepalive_autoclose,
                                scope.autoclose,
                            ),
                        },
                    })
                    .collect();

                ResolvedServer {
                    host: server.host.to_lowercase(),
                    scope,
                    locations,
                }
            })
            .collect();

        Self { global, servers }
    }
}
