use crate::models::{PaymentPlan, Property, PropertyType};
use serde::{Deserialize, Serialize};

/// Structured filters for a listing search. `None` means no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilters {
    /// Exact city, case-insensitive
    pub city: Option<String>,
    /// Any of these types
    #[serde(rename = "type")]
    pub property_types: Option<Vec<PropertyType>>,
    /// Inclusive lower bound on monthly price
    pub min_price: Option<i64>,
    /// Inclusive upper bound on monthly price
    pub max_price: Option<i64>,
    /// Minimum number of bedrooms
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub bathrooms: Option<u32>,
    /// At least one of these plans must be offered
    pub payment_plans: Option<Vec<PaymentPlan>>,
    #[serde(default)]
    pub verified_only: bool,
}

impl PropertyFilters {
    /// True when `property` meets every constraint that is set.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(city) = &self.city {
            if property.city.to_lowercase() != city.to_lowercase() {
                return false;
            }
        }

        if let Some(types) = non_empty(&self.property_types) {
            if !types.contains(&property.property_type) {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }

        if self.bedrooms.is_some_and(|min| property.bedrooms < min) {
            return false;
        }
        if self.bathrooms.is_some_and(|min| property.bathrooms < min) {
            return false;
        }

        if let Some(plans) = non_empty(&self.payment_plans) {
            if !plans.iter().any(|plan| property.supports_plan(*plan)) {
                return false;
            }
        }

        !(self.verified_only && !property.verified)
    }
}

// An empty list constrains nothing.
fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

/// Case-insensitive free-text match against title, description, city and
/// address. Blank queries match everything.
pub fn matches_query(property: &Property, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        &property.title,
        &property.description,
        &property.city,
        &property.address,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Listings passing both the text query and the structured filters, in
/// input order. The source slice is left untouched.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    filters: &PropertyFilters,
    query: Option<&str>,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|property| query.map_or(true, |q| matches_query(property, q)))
        .filter(|property| filters.matches(property))
        .collect()
}
