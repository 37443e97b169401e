/// Property-based tests for the listing search core
/// Filtering must be exact and order-preserving, sorting must honour its key
use chrono::{Duration, TimeZone, Utc};
use listing_scout::models::{Currency, PaymentPlan, Property, PropertyType};
use listing_scout::pricing::calculate_discounted_price;
use listing_scout::search::{filter_properties, sort_properties, PropertyFilters, SortBy};
use proptest::prelude::*;

const TYPES: [PropertyType; 7] = [
    PropertyType::Apartment,
    PropertyType::House,
    PropertyType::Condo,
    PropertyType::Studio,
    PropertyType::Penthouse,
    PropertyType::Villa,
    PropertyType::Duplex,
];

const CITIES: [&str; 3] = ["Lagos", "lagos", "Abuja"];

fn arb_property() -> impl Strategy<Value = Property> {
    (
        0i64..3_000_000,
        0u32..6,
        0u32..6,
        0usize..TYPES.len(),
        0usize..CITIES.len(),
        any::<bool>(),
        proptest::sample::subsequence(PaymentPlan::ALL.to_vec(), 0..=4),
        proptest::option::of(0.0f64..5.0),
        0i64..365,
    )
        .prop_map(
            |(price, bedrooms, bathrooms, ty, city, verified, payment_plans, rating, age)| {
                let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
                Property {
                    id: String::new(),
                    title: "Listing".to_string(),
                    description: "Generated".to_string(),
                    city: CITIES[city].to_string(),
                    address: "Somewhere".to_string(),
                    property_type: TYPES[ty],
                    price,
                    currency: Currency::Ngn,
                    bedrooms,
                    bathrooms,
                    payment_plans,
                    verified,
                    created_at: base + Duration::days(age),
                    available_from: base,
                    rating,
                    features: vec![],
                    images: vec![],
                    coordinates: None,
                }
            },
        )
}

fn arb_properties() -> impl Strategy<Value = Vec<Property>> {
    proptest::collection::vec(arb_property(), 0..30).prop_map(|mut properties| {
        for (i, p) in properties.iter_mut().enumerate() {
            p.id = format!("p{}", i);
        }
        properties
    })
}

fn arb_filters() -> impl Strategy<Value = PropertyFilters> {
    (
        proptest::option::of(0usize..CITIES.len()),
        proptest::option::of(proptest::sample::subsequence(TYPES.to_vec(), 0..=3)),
        proptest::option::of(0i64..3_000_000),
        proptest::option::of(0i64..3_000_000),
        proptest::option::of(0u32..6),
        proptest::option::of(0u32..6),
        proptest::option::of(proptest::sample::subsequence(PaymentPlan::ALL.to_vec(), 0..=2)),
        any::<bool>(),
    )
        .prop_map(
            |(city, property_types, min_price, max_price, bedrooms, bathrooms, payment_plans, verified_only)| {
                PropertyFilters {
                    city: city.map(|i| CITIES[i].to_string()),
                    property_types,
                    min_price,
                    max_price,
                    bedrooms,
                    bathrooms,
                    payment_plans,
                    verified_only,
                }
            },
        )
}

// Independent restatement of each predicate
fn satisfies(p: &Property, f: &PropertyFilters) -> bool {
    let city = f.city.as_ref().map_or(true, |c| p.city.to_lowercase() == c.to_lowercase());
    let ty = match &f.property_types {
        Some(types) if !types.is_empty() => types.contains(&p.property_type),
        _ => true,
    };
    let min = f.min_price.map_or(true, |m| p.price >= m);
    let max = f.max_price.map_or(true, |m| p.price <= m);
    let beds = f.bedrooms.map_or(true, |m| p.bedrooms >= m);
    let baths = f.bathrooms.map_or(true, |m| p.bathrooms >= m);
    let plans = match &f.payment_plans {
        Some(plans) if !plans.is_empty() => plans.iter().any(|pl| p.payment_plans.contains(pl)),
        _ => true,
    };
    let verified = !f.verified_only || p.verified;
    city && ty && min && max && beds && baths && plans && verified
}

proptest! {
    #[test]
    fn filter_is_exact_and_order_preserving(properties in arb_properties(), filters in arb_filters()) {
        let result = filter_properties(&properties, &filters, None);
        let expected: Vec<&str> = properties
            .iter()
            .filter(|p| satisfies(p, &filters))
            .map(|p| p.id.as_str())
            .collect();
        let actual: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sort_orders_by_key(properties in arb_properties()) {
        let all = filter_properties(&properties, &PropertyFilters::default(), None);

        let asc = sort_properties(all.clone(), SortBy::PriceAsc);
        prop_assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = sort_properties(all.clone(), SortBy::PriceDesc);
        prop_assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

        let rated = sort_properties(all.clone(), SortBy::Rating);
        prop_assert!(rated
            .windows(2)
            .all(|w| w[0].rating.unwrap_or(0.0) >= w[1].rating.unwrap_or(0.0)));

        let newest = sort_properties(all.clone(), SortBy::Newest);
        prop_assert!(newest.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        prop_assert_eq!(asc.len(), all.len());
    }

    #[test]
    fn sorting_does_not_change_filter_membership(properties in arb_properties(), filters in arb_filters()) {
        let filtered = filter_properties(&properties, &filters, None);
        let mut before: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        let mut after: Vec<&str> = sort_properties(filtered.clone(), SortBy::Newest)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn one_month_quote_is_the_monthly_price(price in 1i64..100_000_000) {
        let quote = calculate_discounted_price(price, PaymentPlan::OneMonth).unwrap();
        prop_assert_eq!(quote.total_price, price);
        prop_assert_eq!(quote.discount_percent, 0);
    }

    #[test]
    fn quotes_never_panic_across_the_price_range(price in 0i64..=i64::MAX) {
        for plan in PaymentPlan::ALL {
            if let Ok(quote) = calculate_discounted_price(price, plan) {
                prop_assert_eq!(
                    i128::from(quote.total_price) + i128::from(quote.savings),
                    i128::from(price) * i128::from(quote.months)
                );
            }
        }
    }

    #[test]
    fn longer_plans_never_cost_more_per_month(price in 1i64..100_000_000) {
        let monthly: Vec<f64> = PaymentPlan::ALL
            .iter()
            .map(|plan| {
                let quote = calculate_discounted_price(price, *plan).unwrap();
                quote.total_price as f64 / f64::from(quote.months)
            })
            .collect();
        prop_assert!(monthly.windows(2).all(|w| w[1] <= w[0] + 1.0));
    }
}

#[test]
fn price_desc_reverses_price_asc_without_ties() {
    let properties: Vec<Property> = [900_000i64, 250_000, 1_500_000, 600_000]
        .iter()
        .enumerate()
        .map(|(i, price)| {
            let mut p = listing_scout::store::memory::sample_properties()[0].clone();
            p.id = format!("p{}", i);
            p.price = *price;
            p
        })
        .collect();
    let all = filter_properties(&properties, &PropertyFilters::default(), None);

    let mut asc: Vec<String> = sort_properties(all.clone(), SortBy::PriceAsc)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let desc: Vec<String> = sort_properties(all, SortBy::PriceDesc)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    asc.reverse();
    assert_eq!(asc, desc);
}
