use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Where listings come from.
/// The search core only ever sees the `Vec<Property>` a store hands back, so
/// new sources (admin API, database) slot in without touching it.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// All listings known to the source
    async fn list(&self) -> Result<Vec<Property>>;

    /// A single listing by id
    async fn get(&self, id: &str) -> Result<Option<Property>> {
        Ok(self.list().await?.into_iter().find(|p| p.id == id))
    }

    /// Name of the source, for logs
    fn source_name(&self) -> &'static str;
}
