use crate::errors::ListingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Badge colour shown next to a status in the back office
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

/// Identity document review state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn badge(&self) -> BadgeColor {
        match self {
            KycStatus::Pending => BadgeColor::Yellow,
            KycStatus::UnderReview => BadgeColor::Blue,
            KycStatus::Approved => BadgeColor::Green,
            KycStatus::Rejected => BadgeColor::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KycStatus::Pending => "Pending",
            KycStatus::UnderReview => "Under review",
            KycStatus::Approved => "Approved",
            KycStatus::Rejected => "Rejected",
        }
    }
}

impl FromStr for KycStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(KycStatus::Pending),
            "under_review" => Ok(KycStatus::UnderReview),
            "approved" => Ok(KycStatus::Approved),
            "rejected" => Ok(KycStatus::Rejected),
            other => Err(ListingError::UnknownStatus {
                kind: "kyc",
                value: other.to_string(),
            }),
        }
    }
}

/// Rent payment state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Failed,
}

impl PaymentStatus {
    pub fn badge(&self) -> BadgeColor {
        match self {
            PaymentStatus::Paid => BadgeColor::Green,
            PaymentStatus::Pending => BadgeColor::Yellow,
            PaymentStatus::Overdue | PaymentStatus::Failed => BadgeColor::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(PaymentStatus::Paid),
            "pending" => Ok(PaymentStatus::Pending),
            "overdue" => Ok(PaymentStatus::Overdue),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(ListingError::UnknownStatus {
                kind: "payment",
                value: other.to_string(),
            }),
        }
    }
}

/// Availability of a listing on the site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    Rented,
    Maintenance,
    Draft,
}

impl ListingStatus {
    pub fn badge(&self) -> BadgeColor {
        match self {
            ListingStatus::Available => BadgeColor::Green,
            ListingStatus::Rented => BadgeColor::Blue,
            ListingStatus::Maintenance => BadgeColor::Yellow,
            ListingStatus::Draft => BadgeColor::Gray,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Available => "Available",
            ListingStatus::Rented => "Rented",
            ListingStatus::Maintenance => "Maintenance",
            ListingStatus::Draft => "Draft",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ListingStatus::Available),
            "rented" => Ok(ListingStatus::Rented),
            "maintenance" => Ok(ListingStatus::Maintenance),
            "draft" => Ok(ListingStatus::Draft),
            other => Err(ListingError::UnknownStatus {
                kind: "listing",
                value: other.to_string(),
            }),
        }
    }
}
