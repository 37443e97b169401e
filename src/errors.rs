use crate::models::PaymentPlan;
use thiserror::Error;

/// Caller contract violations raised by the listing core.
///
/// Empty search results and addresses outside every known neighborhood are
/// not errors and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("unknown payment plan: {0:?}")]
    UnknownPaymentPlan(String),
    #[error("unknown property type: {0:?}")]
    UnknownPropertyType(String),
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),
    #[error("{plan} total for monthly price {price} does not fit in i64")]
    PriceOverflow { price: i64, plan: PaymentPlan },
    #[error("unknown {kind} status: {value:?}")]
    UnknownStatus { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ListingError>;
