//! Pure filter/sort engine for the product listing.
//!
//! Works over the fixed item collection captured at activation and holds no
//! DOM references; the listing component feeds it raw control values and
//! renders whatever comes back. All filtering happens in the browser, no
//! server round-trips.

use std::cmp::Ordering;

use contracts::catalog::CatalogItem;

/// Raw control values, exactly as typed. The coercion quirks live in the
/// predicates, not in the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterValues {
    pub search: String,
    pub price_min: String,
    pub price_max: String,
    pub offers_only: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Visible items, price-descending; ties keep their original order.
    pub visible: Vec<CatalogItem>,
    pub total: usize,
}

/// Number coercion for filter inputs: whitespace-only text becomes zero,
/// anything else unparseable becomes NaN.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

/// An item is visible iff all four predicates pass.
pub fn item_matches(item: &CatalogItem, values: &FilterValues) -> bool {
    let search = values.search.trim().to_lowercase();
    let matches_search = search.is_empty() || item.search_text.to_lowercase().contains(&search);

    // Empty minimum coerces to zero; an unparseable one lifts the lower
    // bound entirely.
    let min = coerce_number(&values.price_min);
    let matches_min = !min.is_finite() || item.price >= min;

    // The maximum is stricter: empty lifts the bound, but non-empty
    // unparseable text matches nothing. Asymmetric with the minimum on
    // purpose.
    let matches_max = if values.price_max.is_empty() {
        true
    } else {
        let max = coerce_number(&values.price_max);
        !max.is_nan() && item.price <= max
    };

    let matches_offer = !values.offers_only || item.offer.trim() == "on";

    matches_search && matches_min && matches_max && matches_offer
}

pub fn apply_filters(items: &[CatalogItem], values: &FilterValues) -> FilterOutcome {
    let mut visible: Vec<CatalogItem> = items
        .iter()
        .filter(|item| item_matches(item, values))
        .cloned()
        .collect();

    // sort_by is stable, so equal prices keep their original relative order
    visible.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));

    FilterOutcome {
        visible,
        total: items.len(),
    }
}

pub fn count_label(outcome: &FilterOutcome) -> String {
    format!(
        "Mostrando {} de {} productos",
        outcome.visible.len(),
        outcome.total
    )
}
