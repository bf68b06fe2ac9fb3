use derive_builder::Builder;
use serde::{Serialize, Serializer};

use crate::data::Restaurant;

/// Reserved selector value meaning "no restriction".
pub const ALL: &str = "all";

/// Options offered by the minimum rating selector, `0` being "All Ratings".
pub const RATING_OPTIONS: [f64; 4] = [0.0, 4.5, 4.0, 3.5];

/// A categorical selector value, either the `all` sentinel or one exact token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Exact, case-sensitive comparison unless this is the sentinel.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => ALL.to_string(),
            Selection::Only(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize)]
#[builder(default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub min_rating: f64,
    #[builder(setter(into))]
    pub cuisine: Selection,
    #[builder(setter(into))]
    pub price_range: Selection,
}

impl FilterState {
    // A NaN or infinite threshold can only come from a broken selector, treat it as unset.
    fn admits_rating(&self, rating: f64) -> bool {
        !self.min_rating.is_finite() || rating >= self.min_rating
    }
}

/// Free text query, compared case-insensitively against name and cuisine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }

    fn admits(&self, restaurant: &Restaurant) -> bool {
        self.is_empty() || self.found_in(&restaurant.name) || self.found_in(&restaurant.cuisine)
    }
}

impl Serialize for SearchQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Whether `restaurant` survives both the query and every filter.
pub fn matches(restaurant: &Restaurant, query: &SearchQuery, filters: &FilterState) -> bool {
    query.admits(restaurant)
        && filters.admits_rating(restaurant.rating)
        && filters.cuisine.admits(&restaurant.cuisine)
        && filters.price_range.admits(&restaurant.price_range)
}

/// Filter `restaurants`, keeping dataset order.
pub fn filter_restaurants<'a>(
    restaurants: &'a [Restaurant],
    query: &SearchQuery,
    filters: &FilterState,
) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| matches(restaurant, query, filters))
        .collect()
}
