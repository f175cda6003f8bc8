//! Configuration schema definitions.
//!
//! This module defines the raw (pre-merge) configuration structure.
//! All types derive Serde traits for deserialization from config files.
//!
//! The `keepalive_autoclose` directive appears at three scopes: global,
//! server, and location. At each scope it is tri-state: `Some(true)`,
//! `Some(false)`, or `None` (unset, inherit from the enclosing scope).
//! The merge into definite booleans happens in `resolve.rs`.

use serde::{Deserialize, Serialize};

/// Root configuration for the host server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Global-scope `keepalive_autoclose` directive.
    pub keepalive_autoclose: Option<bool>,

    /// Virtual-server scopes, matched by Host header.
    pub servers: Vec<ServerConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// One virtual-server scope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host header this server matches (exact match, case-insensitive).
    pub host: String,

    /// Server-scope `keepalive_autoclose` directive.
    #[serde(default)]
    pub keepalive_autoclose: Option<bool>,

    /// Location scopes nested under this server.
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
}

/// One location scope within a server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Path prefix this location matches (case-sensitive).
    pub path_prefix: String,

    /// Location-scope `keepalive_autoclose` directive.
    #[serde(default)]
    pub keepalive_autoclose: Option<bool>,
}
