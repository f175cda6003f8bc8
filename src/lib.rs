//! Keep-alive auto-close policy for an HTTP server.
//!
//! Per request, decide whether the connection should close after the
//! response instead of staying alive: when the `keepalive_autoclose`
//! directive is enabled for the request's scope, the request carries a
//! Referer header, and the target path ends in a bulk-download extension
//! (`.gz`, `.bz2`, `.zip`, `.rar`, `.iso`), keep-alive is suppressed.
//!
//! The directive is tri-state at each scope (global, server, location) and
//! inherited downward at load time; unset everywhere means disabled.

pub mod config;
pub mod http;
pub mod policy;
pub mod routing;

pub use config::{AppConfig, ScopeTree};
pub use http::HttpServer;
pub use routing::ScopeRouter;
