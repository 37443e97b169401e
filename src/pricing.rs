use crate::errors::{ListingError, Result};
use crate::models::{PaymentPlan, Property};
use serde::{Deserialize, Serialize};

/// Price of committing to a plan up front
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuote {
    pub plan: PaymentPlan,
    pub months: u32,
    pub total_price: i64,
    pub discount_percent: u8,
    /// Undiscounted total minus `total_price`
    pub savings: i64,
}

/// Progressive discount schedule: 0% / 5% / 8% / 10%
pub fn discount_percent(plan: PaymentPlan) -> u8 {
    match plan {
        PaymentPlan::OneMonth => 0,
        PaymentPlan::ThreeMonths => 5,
        PaymentPlan::SixMonths => 8,
        PaymentPlan::TwelveMonths => 10,
    }
}

/// Total for `plan` given a monthly `price`, rounded to the nearest whole
/// currency unit (halves round up). Totals that do not fit in `i64` are
/// reported as [`ListingError::PriceOverflow`].
pub fn calculate_discounted_price(price: i64, plan: PaymentPlan) -> Result<PaymentQuote> {
    let months = plan.months();
    let discount = discount_percent(plan);
    let gross = i128::from(price) * i128::from(months);
    let hundredths = gross * i128::from(100 - discount);
    let total = (hundredths + 50).div_euclid(100);

    let overflow = || ListingError::PriceOverflow { price, plan };
    let total_price = i64::try_from(total).map_err(|_| overflow())?;
    let savings = i64::try_from(gross - total).map_err(|_| overflow())?;

    Ok(PaymentQuote {
        plan,
        months,
        total_price,
        discount_percent: discount,
        savings,
    })
}

/// Same as [`calculate_discounted_price`] for a plan given by its wire name.
/// Unknown names are rejected rather than priced without a discount.
pub fn quote_plan(price: i64, plan: &str) -> Result<PaymentQuote> {
    let plan = plan.parse::<PaymentPlan>()?;
    calculate_discounted_price(price, plan)
}

/// Quotes for every plan a listing accepts, shortest tenor first
pub fn quote_all_plans(property: &Property) -> Result<Vec<PaymentQuote>> {
    PaymentPlan::ALL
        .iter()
        .filter(|plan| property.supports_plan(**plan))
        .map(|plan| calculate_discounted_price(property.price, *plan))
        .collect()
}
