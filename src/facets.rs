use crate::data::Restaurant;
use crate::filter::{ALL, RATING_OPTIONS};

/// Selector options derived from the whole dataset, never from a filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Facets {
    pub ratings: Vec<f64>,
    pub cuisines: Vec<String>,
    pub price_ranges: Vec<String>,
}

impl Facets {
    pub fn of(restaurants: &[Restaurant]) -> Self {
        Self {
            ratings: RATING_OPTIONS.to_vec(),
            cuisines: distinct_with_sentinel(restaurants.iter().map(|r| r.cuisine.as_str())),
            price_ranges: distinct_with_sentinel(
                restaurants.iter().map(|r| r.price_range.as_str()),
            ),
        }
    }
}

// first appearance order, `all` always in front
fn distinct_with_sentinel<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}
