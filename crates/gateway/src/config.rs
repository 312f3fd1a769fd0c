//! Gateway configuration.

use std::env;

use common::{ServiceConfig, StorageConfig};

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// HTTP listener
    pub service: ServiceConfig,
    /// Users table and existence-check policy
    pub storage: StorageConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service_name,
                host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
            },
            storage: StorageConfig::from_env(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address() {
        assert_eq!(GatewayConfig::default().server_addr(), "0.0.0.0:3000");
    }
}
