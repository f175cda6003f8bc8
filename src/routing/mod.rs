//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (Host header, path)
//!     → scope.rs (server lookup, then location prefix scan)
//!     → Return: the ResolvedScope governing this request
//!
//! Scope compilation (at startup):
//!     AppConfig
//!     → config::resolve (merge directives)
//!     → ScopeRouter::new (freeze as immutable lookup)
//! ```
//!
//! # Design Decisions
//! - Scopes compiled at startup, immutable at runtime
//! - No regex in hot path (exact host, prefix path only)
//! - Deterministic: same input always resolves the same scope

pub mod scope;

pub use scope::ScopeRouter;
