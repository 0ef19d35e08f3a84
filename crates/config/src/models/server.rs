use serde::{Deserialize, Serialize};

use crate::validation::{ConfigValidator, ValidationUtils};
use crate::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub cors_enabled: bool,
    pub cors_origins: Vec<String>,
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            request_timeout_seconds: 30,
        }
    }
}

impl ConfigValidator for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        ValidationUtils::validate_bind_address(&self.bind_address, "server.bind_address")?;
        ValidationUtils::validate_timeout_seconds(
            self.request_timeout_seconds,
            "server.request_timeout_seconds",
        )?;

        if self.cors_enabled && self.cors_origins.is_empty() {
            return Err(ConfigError::Validation(
                "server.cors_origins cannot be empty when CORS is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

/// Optional resource backend consulted before falling back to fixtures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    pub resource_service_url: Option<String>,
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resource_service_url: None,
            timeout_ms: 3000,
        }
    }
}

impl ConfigValidator for UpstreamConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(url) = &self.resource_service_url {
            ValidationUtils::validate_url(url, "upstream.resource_service_url")?;
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccessConfig {
    /// Redirect unauthenticated page requests to the login page.
    pub enforce: bool,
    pub login_path: String,
    pub session_cookie: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enforce: false,
            login_path: "/login".to_string(),
            session_cookie: "next-auth.session-token".to_string(),
        }
    }
}

impl ConfigValidator for AccessConfig {
    fn validate(&self) -> ConfigResult<()> {
        ValidationUtils::validate_not_empty(&self.session_cookie, "access.session_cookie")?;

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "access.login_path must start with '/'".to_string(),
            ));
        }

        Ok(())
    }
}
