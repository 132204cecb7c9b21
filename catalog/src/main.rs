//! Catalog CLI
//!
//! Usage: `catalog [NAME] [CATEGORY_ID...]`
//!
//! Greets `NAME`, then looks up each category id in the seed file named by
//! `CATALOG_SEED_PATH`.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog::adapters::JsonCategoryRepository;
use catalog::app::CategoryService;
use catalog::config::Config;
use catalog::error::DomainError;
use catalog::helper::hello_world;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| config.greeting_name.clone());
    println!("{}", hello_world(&name));

    let ids: Vec<String> = args.collect();
    if ids.is_empty() {
        return Ok(());
    }

    let seed_path = config
        .seed_path
        .as_ref()
        .context("CATALOG_SEED_PATH must be set to look up categories")?;
    let repo = JsonCategoryRepository::from_path(seed_path)
        .with_context(|| format!("Failed to load categories from {}", seed_path.display()))?;
    let service = CategoryService::new(Arc::new(repo));

    for id in ids {
        match service.get(&id) {
            Ok(category) => println!("{}", category),
            Err(DomainError::NotFound(msg)) => {
                tracing::warn!(category_id = %id, "Lookup missed");
                println!("{}", msg);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
