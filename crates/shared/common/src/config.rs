//! Shared configuration structures.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "gateway".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Which store backs the user repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    /// Process-local map, for development and tests
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(StorageBackend::DynamoDb),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// What the existence check on create/update does when the lookup itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupFailurePolicy {
    /// Treat the record as absent and carry on with the write
    #[default]
    TreatAsAbsent,
    /// Fail the request with the lookup error
    Abort,
}

impl FromStr for LookupFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "absent" | "treat-as-absent" => Ok(LookupFailurePolicy::TreatAsAbsent),
            "abort" => Ok(LookupFailurePolicy::Abort),
            other => Err(format!("unknown lookup failure policy '{}'", other)),
        }
    }
}

/// Key-value store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Table holding one item per user
    pub table_name: String,
    pub region: String,
    /// Override endpoint, e.g. `http://localhost:8000` for DynamoDB Local
    pub endpoint_url: Option<String>,
    pub lookup_failure_policy: LookupFailurePolicy,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend: parse_env("STORAGE_BACKEND").unwrap_or(defaults.backend),
            table_name: env::var("USERS_TABLE_NAME").unwrap_or(defaults.table_name),
            region: env::var("AWS_REGION")
                .ok()
                .filter(|r| !r.is_empty())
                .unwrap_or(defaults.region),
            endpoint_url: env::var("DYNAMODB_ENDPOINT_URL")
                .ok()
                .filter(|u| !u.is_empty()),
            lookup_failure_policy: parse_env("LOOKUP_FAILURE_POLICY")
                .unwrap_or(defaults.lookup_failure_policy),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::DynamoDb,
            table_name: "users".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            lookup_failure_policy: LookupFailurePolicy::TreatAsAbsent,
        }
    }
}

/// Read and parse an environment variable, warning on unparseable values.
fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr<Err = String>,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", key, e);
            None
        }
    }
}
