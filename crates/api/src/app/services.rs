use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use restock_infra::config::AppConfig;
use restock_infra::delivery::{DeliveryProvider, LogOnlyProvider, Sender, SendGridProvider};
use restock_infra::dispatch::DispatchGateway;
use restock_infra::reorder::{ReorderNotifier, SharedReorderNotifier};
use restock_infra::store::{
    CatalogSeed, InMemoryCatalog, PostgresCatalog, StockQuery, SupplierDirectory,
};

/// Shared state behind every handler.
pub struct AppServices {
    pub notifier: SharedReorderNotifier,
}

impl AppServices {
    pub fn new(
        stock: Arc<dyn StockQuery>,
        directory: Arc<dyn SupplierDirectory>,
        provider: Arc<dyn DeliveryProvider>,
        sender: Sender,
    ) -> Self {
        Self {
            notifier: ReorderNotifier::new(stock, directory, DispatchGateway::new(provider, sender)),
        }
    }
}

/// Pick adapters from configuration.
///
/// - `DATABASE_URL` set: Postgres catalog; otherwise an in-memory one, loaded
///   from `CATALOG_SEED_PATH` when given.
/// - `SENDGRID_API_KEY` set: SendGrid; otherwise messages are only logged.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let (stock, directory): (Arc<dyn StockQuery>, Arc<dyn SupplierDirectory>) =
        match &config.database_url {
            Some(url) => {
                let catalog = Arc::new(
                    PostgresCatalog::connect(url)
                        .await
                        .context("failed to connect to DATABASE_URL")?,
                );
                info!("using postgres catalog");
                let stock: Arc<dyn StockQuery> = catalog.clone();
                let directory: Arc<dyn SupplierDirectory> = catalog;
                (stock, directory)
            }
            None => {
                let catalog = Arc::new(in_memory_catalog(config)?);
                let stock: Arc<dyn StockQuery> = catalog.clone();
                let directory: Arc<dyn SupplierDirectory> = catalog;
                (stock, directory)
            }
        };

    let provider: Arc<dyn DeliveryProvider> = match &config.delivery {
        Some(delivery) => {
            let provider =
                SendGridProvider::new(&delivery.api_key, &delivery.endpoint, delivery.timeout)
                    .context("failed to build sendgrid client")?;
            info!(endpoint = provider.endpoint(), "using sendgrid delivery");
            Arc::new(provider)
        }
        None => {
            warn!("SENDGRID_API_KEY not set; quote requests are logged, not sent");
            Arc::new(LogOnlyProvider::new())
        }
    };

    Ok(AppServices::new(
        stock,
        directory,
        provider,
        config.sender.clone(),
    ))
}

fn in_memory_catalog(config: &AppConfig) -> anyhow::Result<InMemoryCatalog> {
    let Some(path) = &config.catalog_seed_path else {
        warn!(
            "DATABASE_URL and CATALOG_SEED_PATH not set; in-memory catalog is empty and every run will notify nobody"
        );
        return Ok(InMemoryCatalog::new());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog seed {}", path.display()))?;
    let seed = CatalogSeed::from_json(&raw)
        .with_context(|| format!("invalid catalog seed {}", path.display()))?;
    info!(
        path = %path.display(),
        items = seed.item_count(),
        suppliers = seed.supplier_count(),
        "using seeded in-memory catalog"
    );
    Ok(seed.into_catalog()?)
}
