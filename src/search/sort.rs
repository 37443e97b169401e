use crate::errors::ListingError;
use crate::models::Property;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Result ordering offered on the listings page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    /// Highest rated first, unrated counts as 0
    Rating,
    /// Most recently created first
    Newest,
}

impl FromStr for SortBy {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(SortBy::PriceAsc),
            "price_desc" => Ok(SortBy::PriceDesc),
            "rating" => Ok(SortBy::Rating),
            "newest" => Ok(SortBy::Newest),
            other => Err(ListingError::UnknownSortKey(other.to_string())),
        }
    }
}

impl SortBy {
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortBy::PriceAsc => a.price.cmp(&b.price),
            SortBy::PriceDesc => b.price.cmp(&a.price),
            SortBy::Rating => rating(b).total_cmp(&rating(a)),
            SortBy::Newest => b.created_at.cmp(&a.created_at),
        }
    }
}

fn rating(property: &Property) -> f64 {
    property.rating.unwrap_or(0.0)
}

/// Orders an already filtered result set. Equal keys keep no particular order.
pub fn sort_properties(mut properties: Vec<&Property>, sort_by: SortBy) -> Vec<&Property> {
    properties.sort_unstable_by(|a, b| sort_by.compare(a, b));
    properties
}
