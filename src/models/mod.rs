pub mod status;

use crate::errors::ListingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use status::{BadgeColor, KycStatus, ListingStatus, PaymentStatus};

/// Currency the monthly price is quoted in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Ngn,
    Usd,
}

/// Kind of dwelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Studio,
    Penthouse,
    Villa,
    Duplex,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Studio => "studio",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Villa => "villa",
            PropertyType::Duplex => "duplex",
        }
    }
}

impl FromStr for PropertyType {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "condo" => Ok(PropertyType::Condo),
            "studio" => Ok(PropertyType::Studio),
            "penthouse" => Ok(PropertyType::Penthouse),
            "villa" => Ok(PropertyType::Villa),
            "duplex" => Ok(PropertyType::Duplex),
            other => Err(ListingError::UnknownPropertyType(other.to_string())),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Committed rental payment period a tenant can choose
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaymentPlan {
    #[serde(rename = "1_month")]
    OneMonth,
    #[serde(rename = "3_months")]
    ThreeMonths,
    #[serde(rename = "6_months")]
    SixMonths,
    #[serde(rename = "12_months")]
    TwelveMonths,
}

impl PaymentPlan {
    /// All tenors, shortest first
    pub const ALL: [PaymentPlan; 4] = [
        PaymentPlan::OneMonth,
        PaymentPlan::ThreeMonths,
        PaymentPlan::SixMonths,
        PaymentPlan::TwelveMonths,
    ];

    pub fn months(&self) -> u32 {
        match self {
            PaymentPlan::OneMonth => 1,
            PaymentPlan::ThreeMonths => 3,
            PaymentPlan::SixMonths => 6,
            PaymentPlan::TwelveMonths => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPlan::OneMonth => "1_month",
            PaymentPlan::ThreeMonths => "3_months",
            PaymentPlan::SixMonths => "6_months",
            PaymentPlan::TwelveMonths => "12_months",
        }
    }
}

impl FromStr for PaymentPlan {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1_month" => Ok(PaymentPlan::OneMonth),
            "3_months" => Ok(PaymentPlan::ThreeMonths),
            "6_months" => Ok(PaymentPlan::SixMonths),
            "12_months" => Ok(PaymentPlan::TwelveMonths),
            other => Err(ListingError::UnknownPaymentPlan(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map pin for a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Rental listing as supplied by the data source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub city: String,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Monthly rent in whole currency units
    pub price: i64,
    #[serde(default)]
    pub currency: Currency,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub payment_plans: Vec<PaymentPlan>,
    #[serde(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub available_from: DateTime<Utc>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Property {
    pub fn supports_plan(&self, plan: PaymentPlan) -> bool {
        self.payment_plans.contains(&plan)
    }
}
