mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ProviderConfig, ResolveOptions, ResolvedConfig, ServerConfig,
    resolve_config,
};
