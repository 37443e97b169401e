use crate::models::{Coordinates, Currency, PaymentPlan, Property, PropertyType};
use crate::store::traits::PropertyStore;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::info;

/// In-process listing store. Writes go through [`MemoryStore::insert`]
/// instead of pushing into a shared array.
#[derive(Debug, Default)]
pub struct MemoryStore {
    properties: RwLock<Vec<Property>>,
}

impl MemoryStore {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties: RwLock::new(properties),
        }
    }

    /// Store pre-filled with the demo Lagos listings
    pub fn seeded() -> Self {
        info!("📋 Seeding memory store with sample Lagos listings");
        Self::new(sample_properties())
    }

    /// Adds a listing, replacing any existing one with the same id.
    pub async fn insert(&self, property: Property) {
        let mut properties = self.properties.write().await;
        match properties.iter_mut().find(|p| p.id == property.id) {
            Some(existing) => *existing = property,
            None => properties.push(property),
        }
    }

    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.read().await.is_empty()
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Property>> {
        Ok(self.properties.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Property>> {
        Ok(self
            .properties
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Demo listings spread across the known neighborhoods, plus one outside them
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "lagos_ikoyi_1".to_string(),
            title: "Waterfront 3 bed apartment".to_string(),
            description: "Serviced apartment with pool, gym and 24h power.".to_string(),
            city: "Lagos".to_string(),
            address: "15 Bourdillon Road, Ikoyi, Lagos".to_string(),
            property_type: PropertyType::Apartment,
            price: 1_500_000,
            currency: Currency::Ngn,
            bedrooms: 3,
            bathrooms: 3,
            payment_plans: vec![PaymentPlan::SixMonths, PaymentPlan::TwelveMonths],
            verified: true,
            created_at: date(2024, 5, 2),
            available_from: date(2024, 6, 1),
            rating: Some(4.8),
            features: vec!["Pool".to_string(), "Gym".to_string(), "24h power".to_string()],
            images: vec![],
            coordinates: Some(Coordinates {
                latitude: 6.4474,
                longitude: 3.4343,
            }),
        },
        Property {
            id: "lagos_vi_1".to_string(),
            title: "Executive studio near Adeola Odeku".to_string(),
            description: "Compact studio for professionals working on the island.".to_string(),
            city: "Lagos".to_string(),
            address: "22 Adeola Odeku Street, Victoria Island".to_string(),
            property_type: PropertyType::Studio,
            price: 450_000,
            currency: Currency::Ngn,
            bedrooms: 1,
            bathrooms: 1,
            payment_plans: vec![PaymentPlan::OneMonth, PaymentPlan::ThreeMonths],
            verified: true,
            created_at: date(2024, 4, 18),
            available_from: date(2024, 5, 1),
            rating: Some(4.2),
            features: vec!["Furnished".to_string()],
            images: vec![],
            coordinates: Some(Coordinates {
                latitude: 6.4281,
                longitude: 3.4219,
            }),
        },
        Property {
            id: "lagos_lekki_1".to_string(),
            title: "Two bed flat in gated estate".to_string(),
            description: "Newly built flat with fitted kitchen and parking.".to_string(),
            city: "Lagos".to_string(),
            address: "Plot 9, Admiralty Way, Lekki Phase 1".to_string(),
            property_type: PropertyType::Apartment,
            price: 850_000,
            currency: Currency::Ngn,
            bedrooms: 2,
            bathrooms: 2,
            payment_plans: PaymentPlan::ALL.to_vec(),
            verified: false,
            created_at: date(2024, 6, 10),
            available_from: date(2024, 7, 1),
            rating: None,
            features: vec!["Parking".to_string(), "Security".to_string()],
            images: vec![],
            coordinates: Some(Coordinates {
                latitude: 6.4478,
                longitude: 3.4723,
            }),
        },
        Property {
            id: "lagos_ajah_1".to_string(),
            title: "Four bed duplex with BQ".to_string(),
            description: "Family duplex with boys' quarters and garden.".to_string(),
            city: "Lagos".to_string(),
            address: "5 Abraham Adesanya Road, Ajah".to_string(),
            property_type: PropertyType::Duplex,
            price: 700_000,
            currency: Currency::Ngn,
            bedrooms: 4,
            bathrooms: 5,
            payment_plans: vec![PaymentPlan::TwelveMonths],
            verified: true,
            created_at: date(2024, 3, 7),
            available_from: date(2024, 4, 1),
            rating: Some(4.0),
            features: vec!["Garden".to_string(), "BQ".to_string()],
            images: vec![],
            coordinates: None,
        },
        Property {
            id: "lagos_yaba_1".to_string(),
            title: "Mini flat close to Unilag".to_string(),
            description: "One bedroom flat, walking distance to campus.".to_string(),
            city: "Lagos".to_string(),
            address: "14 Herbert Macaulay Way, Yaba".to_string(),
            property_type: PropertyType::Apartment,
            price: 250_000,
            currency: Currency::Ngn,
            bedrooms: 1,
            bathrooms: 1,
            payment_plans: vec![PaymentPlan::OneMonth, PaymentPlan::SixMonths],
            verified: false,
            created_at: date(2024, 6, 20),
            available_from: date(2024, 7, 15),
            rating: Some(3.9),
            features: vec![],
            images: vec![],
            coordinates: None,
        },
        Property {
            id: "lagos_epe_1".to_string(),
            title: "Bungalow on the lagoon".to_string(),
            description: "Three bedroom house on a large plot.".to_string(),
            city: "Epe".to_string(),
            address: "Km 3, Epe-Ijebu Ode Road".to_string(),
            property_type: PropertyType::House,
            price: 300_000,
            currency: Currency::Ngn,
            bedrooms: 3,
            bathrooms: 2,
            payment_plans: vec![PaymentPlan::TwelveMonths],
            verified: false,
            created_at: date(2024, 2, 14),
            available_from: date(2024, 3, 1),
            rating: None,
            features: vec!["Large plot".to_string()],
            images: vec![],
            coordinates: None,
        },
    ]
}
