//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::JobOrder;

/// Where and how to reach the job listing API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the Lookout API (scheme, host and port)
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Backend identifier sent as `?backend=` (e.g. "jsonb").
    /// Omitted from requests when unset or empty.
    #[serde(default)]
    pub backend: Option<String>,

    /// Bearer token sent as `Authorization` header
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Read timeout; the request fails if the server stalls longer than this
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

/// Defaults for `lookout jobs` when no flag overrides them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Page size
    #[serde(default = "default_take")]
    pub take: u64,

    /// Restrict results to job sets that still have active jobs
    #[serde(default)]
    pub active_job_sets: bool,

    #[serde(default)]
    pub order: JobOrder,
}

fn default_server_url() -> String {
    "http://localhost:10000".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_read_timeout_ms() -> u64 {
    30_000
}

fn default_take() -> u64 {
    100
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            backend: None,
            token: None,
            connect_timeout_ms: default_connect_timeout_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            take: default_take(),
            active_job_sets: false,
            order: JobOrder::default(),
        }
    }
}
