use std::sync::Arc;

use siza_agent::{shopping_tools, ShoppingAgent};
use siza_core::config::{AppConfig, ConfigError};
use siza_core::{store, Catalog, CatalogError};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
    pub agent: ShoppingAgent,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("catalog failed to load: {0}")]
    Catalog(#[from] CatalogError),
}

/// Builds the catalog and agent. An invalid config or catalog stops startup
/// here, before any session can be served.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    config.validate()?;

    let catalog = Arc::new(store::grocery()?);
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        categories = catalog.category_count(),
        items = catalog.item_count(),
        "catalog loaded"
    );

    let tools = Arc::new(shopping_tools(Arc::clone(&catalog)));
    let agent = ShoppingAgent::new(&config, tools);
    info!(
        event_name = "system.bootstrap.agent_ready",
        correlation_id = "bootstrap",
        agent_name = %agent.name(),
        tools = ?agent.tools().names(),
        "agent ready"
    );

    Ok(Application { config, catalog, agent })
}
