//! Data Transfer Objects
//!
//! Response bodies of the host endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// `ok` when the UI bundle is present, `missing` otherwise
    pub assets: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: String,
}
