//! Application configuration

use std::env;

const DEFAULT_TOKEN_URL: &str = "https://apex.oracle.com/ords/shop/oauth/token";
const DEFAULT_PRODUCTS_URL: &str = "https://apex.oracle.com/ords/shop/api/products";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Upstream APEX credentials (OAuth2 client-credentials identity)
    pub apex_username: String,
    pub apex_password: String,

    // Static bearer secret gating the invocation path
    pub mcp_api_key: String,

    // Upstream endpoints
    pub token_url: String,
    pub products_url: String,

    // Relay behavior
    /// Cap applied when a caller omits `limit`. `None` means uncapped.
    pub default_limit: Option<usize>,
    /// Whether the auth gate also covers the discovery handshake.
    pub protect_discovery: bool,
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: {
                let port = env::var("PORT").unwrap_or_else(|_| "10000".to_string());
                format!("0.0.0.0:{}", port)
            },

            apex_username: env::var("APEX_USERNAME")
                .map_err(|_| ConfigError::Missing("APEX_USERNAME"))?,
            apex_password: env::var("APEX_PASSWORD")
                .map_err(|_| ConfigError::Missing("APEX_PASSWORD"))?,
            mcp_api_key: env::var("MCP_API_KEY").map_err(|_| ConfigError::Missing("MCP_API_KEY"))?,

            token_url: env::var("APEX_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            products_url: env::var("APEX_PRODUCTS_URL")
                .unwrap_or_else(|_| DEFAULT_PRODUCTS_URL.to_string()),

            // "none" disables the cap; anything unparseable is rejected rather
            // than silently capped at a guessed value.
            default_limit: match env::var("PRODUCT_DEFAULT_LIMIT") {
                Err(_) => Some(5),
                Ok(raw) if raw.eq_ignore_ascii_case("none") => None,
                Ok(raw) => Some(
                    raw.parse()
                        .map_err(|_| ConfigError::Invalid("PRODUCT_DEFAULT_LIMIT"))?,
                ),
            },

            protect_discovery: env::var("MCP_PROTECT_DISCOVERY")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),

            request_timeout_ms: env::var("APEX_REQUEST_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .unwrap_or(30000),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn set_required() {
        env::set_var("APEX_USERNAME", "svc_user");
        env::set_var("APEX_PASSWORD", "svc_pass");
        env::set_var("MCP_API_KEY", "gate-key");
    }

    fn clear_all() {
        for var in [
            "APEX_USERNAME",
            "APEX_PASSWORD",
            "MCP_API_KEY",
            "PORT",
            "APEX_TOKEN_URL",
            "APEX_PRODUCTS_URL",
            "PRODUCT_DEFAULT_LIMIT",
            "MCP_PROTECT_DISCOVERY",
            "APEX_REQUEST_TIMEOUT_MS",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_credentials_rejected() {
        clear_all();
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Missing("APEX_USERNAME"))));

        env::set_var("APEX_USERNAME", "svc_user");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Missing("APEX_PASSWORD"))));

        env::set_var("APEX_PASSWORD", "svc_pass");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Missing("MCP_API_KEY"))));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        clear_all();
        set_required();

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:10000");
        assert_eq!(config.default_limit, Some(5));
        assert!(!config.protect_discovery);
        assert_eq!(config.request_timeout_ms, 30000);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);

        clear_all();
    }

    #[test]
    #[serial]
    fn test_limit_overrides() {
        clear_all();
        set_required();

        env::set_var("PRODUCT_DEFAULT_LIMIT", "12");
        assert_eq!(Config::from_env().unwrap().default_limit, Some(12));

        env::set_var("PRODUCT_DEFAULT_LIMIT", "none");
        assert_eq!(Config::from_env().unwrap().default_limit, None);

        env::set_var("PRODUCT_DEFAULT_LIMIT", "0");
        assert_eq!(Config::from_env().unwrap().default_limit, Some(0));

        env::set_var("PRODUCT_DEFAULT_LIMIT", "lots");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PRODUCT_DEFAULT_LIMIT"))
        ));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_port_and_flags() {
        clear_all();
        set_required();

        env::set_var("PORT", "8080");
        env::set_var("MCP_PROTECT_DISCOVERY", "true");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.protect_discovery);

        clear_all();
    }
}
