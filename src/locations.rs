//! Lagos neighborhood lookup for listing, map and location pages.
//!
//! Matching is plain case-insensitive substring containment against the
//! keyword table below. The first declared neighborhood with any matching
//! keyword wins, so table order is significant.

use crate::models::Property;
use serde::Serialize;

/// Static description of a neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationMetadata {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Lowercase substrings, checked in order
    pub keywords: &'static [&'static str],
}

pub static LOCATIONS: &[LocationMetadata] = &[
    LocationMetadata {
        slug: "ikoyi",
        name: "Ikoyi",
        description: "Quiet, leafy and upmarket, home to embassies and waterfront estates.",
        keywords: &["ikoyi", "bourdillon", "banana island", "parkview", "awolowo road"],
    },
    LocationMetadata {
        slug: "victoria-island",
        name: "Victoria Island",
        description: "Business district with serviced apartments close to offices and beaches.",
        keywords: &["victoria island", "vi", "adeola odeku", "ahmadu bello", "oniru"],
    },
    LocationMetadata {
        slug: "lekki",
        name: "Lekki",
        description: "Fast-growing peninsula of gated estates and new developments.",
        keywords: &["lekki", "chevron", "ikate", "osapa", "admiralty"],
    },
    LocationMetadata {
        slug: "ajah",
        name: "Ajah",
        description: "Affordable family homes along the Lekki-Epe expressway.",
        keywords: &["ajah", "sangotedo", "abraham adesanya", "badore"],
    },
    LocationMetadata {
        slug: "ikeja",
        name: "Ikeja",
        description: "State capital near the airport with a busy commercial core.",
        keywords: &["ikeja", "allen avenue", "alausa", "opebi", "maryland"],
    },
    LocationMetadata {
        slug: "yaba",
        name: "Yaba",
        description: "Student and tech hub on the mainland.",
        keywords: &["yaba", "akoka", "sabo", "onike"],
    },
    LocationMetadata {
        slug: "surulere",
        name: "Surulere",
        description: "Established mainland district around the National Stadium.",
        keywords: &["surulere", "adeniran ogunsanya", "bode thomas", "ojuelegba"],
    },
];

/// First neighborhood whose keywords occur anywhere in `address`.
pub fn detect_location_from_address(address: &str) -> Option<&'static LocationMetadata> {
    detect_location_index(address).map(|index| &LOCATIONS[index])
}

// Position in LOCATIONS of the first matching neighborhood
fn detect_location_index(address: &str) -> Option<usize> {
    let haystack = address.to_lowercase();
    LOCATIONS.iter().position(|location| {
        location
            .keywords
            .iter()
            .any(|keyword| haystack.contains(keyword))
    })
}

pub fn location_by_slug(slug: &str) -> Option<&'static LocationMetadata> {
    LOCATIONS.iter().find(|location| location.slug == slug)
}

/// Neighborhood name when the address is recognised, otherwise the raw city.
pub fn display_location(property: &Property) -> &str {
    match detect_location_from_address(&property.address) {
        Some(location) => location.name,
        None => &property.city,
    }
}

/// Listings whose address classifies to `slug`, in input order
pub fn properties_in_location<'a>(properties: &'a [Property], slug: &str) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|property| {
            detect_location_from_address(&property.address)
                .is_some_and(|location| location.slug == slug)
        })
        .collect()
}

/// One neighborhood's listings on the map view
#[derive(Debug, Clone, Serialize)]
pub struct LocationGroup<'a> {
    pub location: &'static LocationMetadata,
    pub properties: Vec<&'a Property>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationGrouping<'a> {
    /// Non-empty groups in table order
    pub groups: Vec<LocationGroup<'a>>,
    pub ungrouped: Vec<&'a Property>,
}

pub fn group_by_location(properties: &[Property]) -> LocationGrouping<'_> {
    let mut buckets: Vec<Vec<&Property>> = vec![Vec::new(); LOCATIONS.len()];
    let mut ungrouped = Vec::new();

    for property in properties {
        match detect_location_index(&property.address) {
            Some(index) => buckets[index].push(property),
            None => ungrouped.push(property),
        }
    }

    let groups = LOCATIONS
        .iter()
        .zip(buckets)
        .filter(|(_, members)| !members.is_empty())
        .map(|(location, properties)| LocationGroup {
            location,
            properties,
        })
        .collect();

    LocationGrouping { groups, ungrouped }
}
