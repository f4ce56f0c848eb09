//! CORS policy configuration.

use std::env;

/// Configuration for the CORS response headers middleware
#[derive(Clone)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let enabled = env::var("CORS_ENABLED")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]);

        let allow_credentials = env::var("CORS_ALLOW_CREDENTIALS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        Self {
            enabled,
            allowed_origins,
            allow_credentials,
        }
    }

    /// Whether the given `Origin` header value is covered by the policy
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_local_dev_origin() {
        let config = CorsConfig::default();
        assert!(config.allows("http://localhost:3000"));
        assert!(!config.allows("https://example.com"));
    }
}
