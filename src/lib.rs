pub mod command;
pub mod config;
pub mod data;
pub mod facets;
pub mod filter;
pub mod render;
pub mod shell;
pub mod stars;
pub mod view;

pub use data::Restaurant;
pub use filter::{FilterState, FilterStateBuilder, SearchQuery, Selection};
pub use view::{Event, ListingView};
