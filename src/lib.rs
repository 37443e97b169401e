//! Listing search core for a Lagos rental marketplace: neighborhood
//! classification, filtering, sorting and payment-plan pricing over
//! listings supplied by a [`store::PropertyStore`].

pub mod config;
pub mod errors;
pub mod locations;
pub mod models;
pub mod pricing;
pub mod search;
pub mod store;

pub use errors::{ListingError, Result};
pub use locations::{detect_location_from_address, group_by_location, LocationMetadata};
pub use models::{PaymentPlan, Property, PropertyType};
pub use pricing::{calculate_discounted_price, PaymentQuote};
pub use search::{filter_properties, search, sort_properties, PropertyFilters, SearchRequest, SortBy};
