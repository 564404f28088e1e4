//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP service binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP service binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            proxy: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("noon-scraper").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(host) = std::env::var("NOON_HOST") {
            self.host = host;
        }

        if let Ok(port) = std::env::var("NOON_PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }

        if let Ok(proxy) = std::env::var("NOON_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8787);
        assert!(config.proxy.is_none());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            host = "0.0.0.0"
            port = 9000
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        // Unspecified fields fall back to defaults
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            host = "::1"
            port = 8080
            proxy = "socks5://localhost:1080"
            timeout_secs = 60
            connect_timeout_secs = 5
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.host, "::1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.connect_timeout_secs, 5);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            port = 9999
            timeout_secs = 15
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            host = "0.0.0.0"
            port = 8443
            "#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8443);
    }

    #[test]
    fn test_config_with_env() {
        // Save original env vars
        let orig_host = std::env::var("NOON_HOST").ok();
        let orig_port = std::env::var("NOON_PORT").ok();
        let orig_proxy = std::env::var("NOON_PROXY").ok();

        std::env::set_var("NOON_HOST", "0.0.0.0");
        std::env::set_var("NOON_PORT", "9001");
        std::env::set_var("NOON_PROXY", "http://proxy:8080");

        let config = Config::new().with_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9001);
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));

        // Restore original env vars
        match orig_host {
            Some(v) => std::env::set_var("NOON_HOST", v),
            None => std::env::remove_var("NOON_HOST"),
        }
        match orig_port {
            Some(v) => std::env::set_var("NOON_PORT", v),
            None => std::env::remove_var("NOON_PORT"),
        }
        match orig_proxy {
            Some(v) => std::env::set_var("NOON_PROXY", v),
            None => std::env::remove_var("NOON_PROXY"),
        }
    }

    #[test]
    fn test_config_with_env_invalid_port_ignored() {
        let orig_port = std::env::var("NOON_PORT").ok();

        std::env::set_var("NOON_PORT", "not_a_number");

        let config = Config::new().with_env();
        assert_eq!(config.port, 8787);

        match orig_port {
            Some(v) => std::env::set_var("NOON_PORT", v),
            None => std::env::remove_var("NOON_PORT"),
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            proxy: Some("socks5://localhost:1080".to_string()),
            timeout_secs: 45,
            connect_timeout_secs: 7,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.host, config.host);
        assert_eq!(parsed.port, config.port);
        assert_eq!(parsed.proxy, config.proxy);
        assert_eq!(parsed.timeout_secs, config.timeout_secs);
        assert_eq!(parsed.connect_timeout_secs, config.connect_timeout_secs);
    }
}
