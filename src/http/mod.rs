//! HTTP host integration.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, listener bind)
//!     → middleware.rs (access phase: auto-close decision)
//!     → content handler
//!     → response (Connection: close forced when the policy fired)
//! ```
//!
//! The policy itself lives in `crate::policy`; this module is the glue that
//! registers it into the host pipeline and maps its decision onto the
//! response.

pub mod middleware;
pub mod server;

pub use middleware::{autoclose_middleware, AutoCloseState};
pub use server::HttpServer;
