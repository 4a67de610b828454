use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::agent::{AgentDefinition, ChatCompletionRunner};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::server::{self, AppState};

pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_serve(options: ServeOptions) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tarjuman=debug,tower_http=debug")),
        )
        .init();

    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            host: options.host,
            port: options.port,
            endpoint: options.endpoint,
            model: options.model,
        },
        &config_file,
    )?;

    let agent = AgentDefinition::translator(resolved.model.clone());
    let runner = ChatCompletionRunner::new(resolved.endpoint.clone(), resolved.api_key, agent);
    let state = AppState::new(Arc::new(runner));

    server::serve(state, &resolved.host, resolved.port).await
}
