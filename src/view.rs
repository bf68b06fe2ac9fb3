use derive_builder::Builder;

use crate::data::Restaurant;
use crate::facets::Facets;
use crate::filter::{self, FilterState, SearchQuery, Selection};

/// A single user action against the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Search(String),
    MinRating(f64),
    Cuisine(String),
    PriceRange(String),
    ClearFilters,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct ViewOptions {
    /// Also empty the search box on "clear filters".
    pub clear_resets_search: bool,
}

/// Owns the query and filter state over an immutable dataset.
#[derive(Debug)]
pub struct ListingView {
    restaurants: Vec<Restaurant>,
    facets: Facets,
    query: SearchQuery,
    filters: FilterState,
    options: ViewOptions,
}

impl ListingView {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self::with_options(restaurants, ViewOptions::default())
    }

    pub fn with_options(restaurants: Vec<Restaurant>, options: ViewOptions) -> Self {
        let facets = Facets::of(&restaurants);
        Self {
            restaurants,
            facets,
            query: SearchQuery::default(),
            filters: FilterState::default(),
            options,
        }
    }

    pub fn apply(&mut self, event: Event) {
        tracing::debug!(?event, "apply");
        match event {
            Event::Search(text) => self.set_query(text),
            Event::MinRating(rating) => self.filters.min_rating = rating,
            Event::Cuisine(cuisine) => self.filters.cuisine = Selection::from(cuisine),
            Event::PriceRange(price) => self.filters.price_range = Selection::from(price),
            Event::ClearFilters => self.clear_filters(),
        }
        tracing::debug!(count = self.count(), "derived list updated");
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        if self.options.clear_resets_search {
            self.query = SearchQuery::default();
        }
    }

    /// The derived list, recomputed on every call.
    pub fn results(&self) -> Vec<&Restaurant> {
        filter::filter_restaurants(&self.restaurants, &self.query, &self.filters)
    }

    pub fn count(&self) -> usize {
        self.results().len()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }
}
