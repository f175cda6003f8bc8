//! Keep-alive auto-close policy.
//!
//! # Data Flow
//! ```text
//! Incoming request (resolved scope, referrer presence, path)
//!     → extension.rs (backward scan for the last dot)
//!     → decision.rs (match against the fixed extension set)
//!     → Return: close-after-response yes/no
//! ```
//!
//! # Design Decisions
//! - Stateless per invocation; nothing carries across requests
//! - The decision only ever moves a connection toward close, never back
//! - Policy set is fixed at compile time: bulk-download file types whose
//!   transfers keep a connection busy long enough that reuse rarely pays

pub mod decision;
pub mod extension;

pub use decision::{matches_policy, should_close, AUTOCLOSE_EXTENSIONS};
pub use extension::last_extension;
