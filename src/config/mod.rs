//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, semantic validation)
//!     → AppConfig (raw, tri-state directives)
//!     → resolve.rs (merge scopes, ancestor before descendant)
//!     → ScopeTree (definite booleans, immutable)
//!     → shared via Arc with the request path
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; changes require a full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - No scope is ever left tri-state past resolve: every scope carries a
//!   definite value before traffic starts

pub mod loader;
pub mod resolve;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use resolve::{ResolvedScope, ScopeTree};
pub use schema::AppConfig;
