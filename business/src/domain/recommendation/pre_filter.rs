use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::catalog::model::CatalogItem;
use crate::domain::catalog::pricing::{parse_price, percentile};

static ABOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:above|over|greater than|more than|plus de|au-dessus de|boven|meer dan)\s*(?:€|\$|£|eur\s)?\s*(\d+(?:[.,]\d+)?)",
    )
    .expect("above pattern is valid")
});

static UNDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:under|less than|below|cheaper than|moins de|en dessous de|onder|minder dan|goedkoper dan)\s*(?:€|\$|£|eur\s)?\s*(\d+(?:[.,]\d+)?)",
    )
    .expect("under pattern is valid")
});

static LUXURY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:luxury|luxurious|premium|expensive|high-end|exclusive|luxe|haut de gamme|prestige|duur|exclusief)\b",
    )
    .expect("luxury pattern is valid")
});

const LUXURY_PERCENTILE: f64 = 0.75;

/// Price intent detected in the raw query. Only one class ever applies.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceIntent {
    Above(f64),
    Under(f64),
    Luxury,
    Unconstrained,
}

/// Classifies the query, first match wins: above, under, luxury.
///
/// Compound constraints ("red, under 20 and premium") are not combined.
pub fn classify_price_intent(text: &str) -> PriceIntent {
    if let Some(caps) = ABOVE_RE.captures(text) {
        return PriceIntent::Above(parse_price(&caps[1]));
    }
    if let Some(caps) = UNDER_RE.captures(text) {
        return PriceIntent::Under(parse_price(&caps[1]));
    }
    if LUXURY_RE.is_match(text) {
        return PriceIntent::Luxury;
    }
    PriceIntent::Unconstrained
}

/// Narrows the catalog to the candidates eligible for this query.
///
/// Excluded ids are removed first; the price intent is then applied to what
/// remains. Catalog order is preserved.
pub fn filter_candidates(
    catalog: &[CatalogItem],
    query: &str,
    exclude_ids: &HashSet<String>,
) -> Vec<CatalogItem> {
    let remaining: Vec<CatalogItem> = catalog
        .iter()
        .filter(|item| !exclude_ids.contains(&item.id))
        .cloned()
        .collect();

    match classify_price_intent(query) {
        PriceIntent::Above(limit) => remaining
            .into_iter()
            .filter(|item| item.price_value() > limit)
            .collect(),
        PriceIntent::Under(limit) => remaining
            .into_iter()
            .filter(|item| item.price_value() < limit)
            .collect(),
        PriceIntent::Luxury => {
            let prices: Vec<f64> = remaining.iter().map(CatalogItem::price_value).collect();
            match percentile(&prices, LUXURY_PERCENTILE) {
                Some(threshold) => remaining
                    .into_iter()
                    .filter(|item| item.price_value() >= threshold)
                    .collect(),
                None => remaining,
            }
        }
        PriceIntent::Unconstrained => remaining,
    }
}
