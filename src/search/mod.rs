pub mod filters;
pub mod sort;

pub use filters::{filter_properties, matches_query, PropertyFilters};
pub use sort::{sort_properties, SortBy};

use crate::models::Property;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the listings page sends when the user searches
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub filters: PropertyFilters,
    /// Unsorted results keep input order
    #[serde(default)]
    pub sort: Option<SortBy>,
}

/// Filter, then sort.
pub fn search<'a>(properties: &'a [Property], request: &SearchRequest) -> Vec<&'a Property> {
    let matched = filter_properties(properties, &request.filters, request.query.as_deref());
    debug!(
        "Search matched {} of {} properties (sort: {:?})",
        matched.len(),
        properties.len(),
        request.sort
    );

    match request.sort {
        Some(sort_by) => sort_properties(matched, sort_by),
        None => matched,
    }
}
