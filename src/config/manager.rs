use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// HTTP server settings in the `[server]` section of config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Model provider settings in the `[provider]` section of config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier sent with each completion request.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key. Set to an empty
    /// string for endpoints that need no key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if !self.api_key_env.is_empty()
            && let Ok(key) = std::env::var(&self.api_key_env)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || !self.api_key_env.is_empty()
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tarjuman/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Model provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Address the server binds.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Bind address override.
    pub host: Option<String>,
    /// Port override.
    pub port: Option<u16>,
    /// Endpoint URL override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the provider requires an API key and none can be
/// resolved from the environment or config file.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let provider = &config_file.provider;
    let api_key = provider.get_api_key();

    if provider.requires_api_key() && api_key.is_none() {
        let env_var = if provider.api_key_env.is_empty() {
            DEFAULT_API_KEY_ENV
        } else {
            &provider.api_key_env
        };
        bail!(
            "The configured provider requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/tarjuman/config.toml"
        );
    }

    Ok(ResolvedConfig {
        host: options
            .host
            .clone()
            .unwrap_or_else(|| config_file.server.host.clone()),
        port: options.port.unwrap_or(config_file.server.port),
        endpoint: options
            .endpoint
            .clone()
            .unwrap_or_else(|| provider.endpoint.clone()),
        model: options
            .model
            .clone()
            .unwrap_or_else(|| provider.model.clone()),
        api_key,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tarjuman/config.toml`
    /// or `~/.config/tarjuman/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn keyless_provider() -> ProviderConfig {
        ProviderConfig {
            endpoint: "http://localhost:11434/v1".to_string(),
            model: "gemma3:12b".to_string(),
            api_key: None,
            api_key_env: String::new(),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9000,
            },
            provider: keyless_provider(),
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.server.host, "0.0.0.0");
        assert_eq!(loaded.server.port, 9000);
        assert_eq!(loaded.provider.endpoint, "http://localhost:11434/v1");
        assert_eq!(loaded.provider.model, "gemma3:12b");
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = manager.load_or_default();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.provider.model, DEFAULT_MODEL);
        assert_eq!(config.provider.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ConfigFile = toml::from_str(
            r#"
            [server]
            port = 3000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.provider.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_provider_get_api_key_from_env() {
        // SAFETY: This test only modifies a test-specific env var
        unsafe {
            std::env::set_var("TARJUMAN_TEST_API_KEY", "test-key-value");
        }

        let provider = ProviderConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: "TARJUMAN_TEST_API_KEY".to_string(),
            ..ProviderConfig::default()
        };

        // Environment variable takes priority
        assert_eq!(provider.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("TARJUMAN_TEST_API_KEY");
        }
    }

    #[test]
    fn test_provider_get_api_key_fallback() {
        let provider = ProviderConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: "TARJUMAN_TEST_NONEXISTENT_KEY".to_string(),
            ..ProviderConfig::default()
        };

        // Falls back to api_key when env var not set
        assert_eq!(provider.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_provider_requires_api_key() {
        let with_env = ProviderConfig::default();
        assert!(with_env.requires_api_key());

        let with_literal = ProviderConfig {
            api_key: Some("key".to_string()),
            api_key_env: String::new(),
            ..ProviderConfig::default()
        };
        assert!(with_literal.requires_api_key());

        assert!(!keyless_provider().requires_api_key());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config_file = ConfigFile {
            provider: keyless_provider(),
            ..ConfigFile::default()
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config_file).unwrap();

        assert_eq!(resolved.host, DEFAULT_HOST);
        assert_eq!(resolved.port, DEFAULT_PORT);
        assert_eq!(resolved.endpoint, "http://localhost:11434/v1");
        assert_eq!(resolved.model, "gemma3:12b");
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let config_file = ConfigFile {
            provider: keyless_provider(),
            ..ConfigFile::default()
        };
        let options = ResolveOptions {
            host: Some("0.0.0.0".to_string()),
            port: Some(9000),
            endpoint: Some("http://other.local/v1".to_string()),
            model: Some("llama3".to_string()),
        };

        let resolved = resolve_config(&options, &config_file).unwrap();

        assert_eq!(resolved.host, "0.0.0.0");
        assert_eq!(resolved.port, 9000);
        assert_eq!(resolved.endpoint, "http://other.local/v1");
        assert_eq!(resolved.model, "llama3");
    }

    #[test]
    fn test_resolve_config_api_key_required_but_missing() {
        let config_file = ConfigFile {
            provider: ProviderConfig {
                api_key_env: "TARJUMAN_TEST_UNSET_KEY".to_string(),
                ..ProviderConfig::default()
            },
            ..ConfigFile::default()
        };

        let result = resolve_config(&ResolveOptions::default(), &config_file);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    fn test_resolve_config_api_key_from_literal() {
        let config_file = ConfigFile {
            provider: ProviderConfig {
                api_key: Some("literal-key".to_string()),
                api_key_env: String::new(),
                ..ProviderConfig::default()
            },
            ..ConfigFile::default()
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config_file).unwrap();
        assert_eq!(resolved.api_key, Some("literal-key".to_string()));
    }
}
