//! Text and JSON presentation of a [`ListingView`].

use std::fmt::Write;
use std::io::Write as IoWrite;

use anyhow::Context;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::data::Restaurant;
use crate::facets::Facets;
use crate::filter::{FilterState, SearchQuery, ALL};
use crate::stars::{render_stars, Star};
use crate::view::ListingView;

pub const DEFAULT_TITLE: &str = "Top Restaurants in Rabat";

/// Whether stdout can show colors.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub title: String,
    pub color: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: false,
        }
    }
}

impl TextRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: supports_color(),
        }
    }

    pub fn listing(&self, view: &ListingView) -> String {
        let results = view.results();
        let mut out = String::new();

        let title = if self.color {
            self.title.bold().to_string()
        } else {
            self.title.clone()
        };
        let _ = writeln!(out, "{title}\n");
        let _ = writeln!(out, "{}", self.controls(view.query(), view.filters()));
        let _ = writeln!(out, "Found {} restaurants\n", results.len());

        for restaurant in results {
            out.push_str(&self.card(restaurant));
            out.push('\n');
        }
        out
    }

    fn controls(&self, query: &SearchQuery, filters: &FilterState) -> String {
        let rating = if filters.min_rating > 0.0 {
            format!("{:.1}+ ★", filters.min_rating)
        } else {
            "All Ratings".to_string()
        };
        let cuisine = match filters.cuisine.as_str() {
            ALL => "All Cuisines",
            other => other,
        };
        let price = match filters.price_range.as_str() {
            ALL => "All Prices",
            other => other,
        };
        let line = format!(
            "Search: {:?} | {rating} | {cuisine} | {price}",
            query.as_str()
        );
        if self.color {
            line.dimmed().to_string()
        } else {
            line
        }
    }

    pub fn stars(&self, rating: f64) -> String {
        render_stars(rating)
            .iter()
            .map(|star| match (star, self.color) {
                (Star::Filled, true) => "★".yellow().to_string(),
                (Star::Filled, false) => "★".to_string(),
                (Star::Empty, true) => "☆".bright_black().to_string(),
                (Star::Empty, false) => "☆".to_string(),
            })
            .collect()
    }

    pub fn card(&self, restaurant: &Restaurant) -> String {
        let mut out = String::new();
        let name = if self.color {
            restaurant.name.bold().to_string()
        } else {
            restaurant.name.clone()
        };
        let _ = writeln!(out, "{name}  [{}]", restaurant.price_range);
        let _ = writeln!(
            out,
            "  {} {}",
            restaurant.rating,
            self.stars(restaurant.rating)
        );
        let cuisine = format!("<{}>", restaurant.cuisine);
        if self.color {
            let _ = writeln!(out, "  {}", cuisine.blue());
        } else {
            let _ = writeln!(out, "  {cuisine}");
        }
        if !restaurant.description.is_empty() {
            let _ = writeln!(out, "  {}", restaurant.description);
        }
        if let Some(review) = &restaurant.review {
            let _ = writeln!(
                out,
                "  \"{}\" - {} {}",
                review.text,
                review.author,
                self.stars(review.rating)
            );
        }
        for (label, value) in [
            ("Address", &restaurant.address),
            ("Hours", &restaurant.hours),
            ("Phone", &restaurant.phone),
        ] {
            if let Some(value) = value {
                let _ = writeln!(out, "  {label}: {value}");
            }
        }
        out
    }

    pub fn facets(&self, facets: &Facets) -> String {
        let ratings: Vec<String> = facets.ratings.iter().map(|r| format!("{r:.1}")).collect();
        format!(
            "rating:  {}\ncuisine: {}\nprice:   {}\n",
            ratings.join(", "),
            facets.cuisines.join(", "),
            facets.price_ranges.join(", ")
        )
    }
}

/// Write a rendered listing out, reporting a closed pipe as an error instead of panicking.
pub fn emit<W: IoWrite>(out: &mut W, text: &str) -> anyhow::Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("fail to write listing")
}

#[derive(Serialize)]
struct JsonListing<'a> {
    count: usize,
    query: &'a SearchQuery,
    filters: &'a FilterState,
    restaurants: Vec<&'a Restaurant>,
}

pub fn json(view: &ListingView) -> anyhow::Result<String> {
    let restaurants = view.results();
    let listing = JsonListing {
        count: restaurants.len(),
        query: view.query(),
        filters: view.filters(),
        restaurants,
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}
