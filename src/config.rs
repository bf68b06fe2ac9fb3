use std::path::PathBuf;

use anyhow::Context;

use crate::render::DEFAULT_TITLE;

pub const DATASET_ENV: &str = "LISTING_DATASET";
pub const TITLE_ENV: &str = "LISTING_TITLE";
pub const CLEAR_RESETS_SEARCH_ENV: &str = "LISTING_CLEAR_RESETS_SEARCH";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON dataset to load instead of the embedded sample.
    pub dataset: Option<PathBuf>,
    pub title: String,
    pub clear_resets_search: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            title: DEFAULT_TITLE.to_string(),
            clear_resets_search: false,
        }
    }
}

impl Config {
    /// Read `.env` if present, then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(DATASET_ENV).filter(|path| !path.is_empty()) {
            config.dataset = Some(PathBuf::from(path));
        }
        if let Some(title) = lookup(TITLE_ENV) {
            config.title = title;
        }
        if let Some(flag) = lookup(CLEAR_RESETS_SEARCH_ENV) {
            config.clear_resets_search = parse_flag(&flag)
                .with_context(|| format!("invalid {CLEAR_RESETS_SEARCH_ENV} value {flag:?}"))?;
        }
        Ok(config)
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => anyhow::bail!("expected true or false"),
    }
}
