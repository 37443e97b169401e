use anyhow::Context;
use listing_scout::config::{Config, ListingSource};
use listing_scout::locations::{display_location, group_by_location};
use listing_scout::pricing::quote_all_plans;
use listing_scout::search::{search, SearchRequest};
use listing_scout::store::{HttpStore, JsonFileStore, MemoryStore, PropertyStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Listing Scout - Lagos rental search");
    info!("======================================");

    let config = Config::from_env()?;

    let store: Box<dyn PropertyStore> = match &config.source {
        ListingSource::Memory => Box::new(MemoryStore::seeded()),
        ListingSource::File(path) => Box::new(JsonFileStore::new(path.clone())),
        ListingSource::Http(url) => Box::new(HttpStore::new(url.clone())?),
    };

    info!("Loading listings from {} source...", store.source_name());
    let properties = store.list().await?;

    let request = match &config.search_request_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<SearchRequest>(&raw)
                .with_context(|| format!("Failed to parse search request in {}", path.display()))?
        }
        None => SearchRequest::default(),
    };

    let grouping = group_by_location(&properties);
    for group in &grouping.groups {
        info!("📍 {}: {} listings", group.location.name, group.properties.len());
    }
    if !grouping.ungrouped.is_empty() {
        info!("📍 Outside known neighborhoods: {} listings", grouping.ungrouped.len());
    }

    let results = search(&properties, &request);
    info!("\n✅ {} of {} listings match\n", results.len(), properties.len());

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} ({} {:?}/month)", i + 1, property.title, property.price, property.currency);
        println!("   {} bed, {} bath {}", property.bedrooms, property.bathrooms, property.property_type);
        println!("   Location: {}", display_location(property));
        println!("   Verified: {}", if property.verified { "yes" } else { "no" });
        for quote in quote_all_plans(property)? {
            println!(
                "   {}: {} total ({}% off, save {})",
                quote.plan, quote.total_price, quote.discount_percent, quote.savings
            );
        }
        println!("   ID: {}", property.id);
        println!();
    }

    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write(&config.output_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    info!("💾 Saved results to {}", config.output_path.display());

    Ok(())
}
