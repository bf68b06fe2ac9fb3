use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use restaurant_listing::{
    config::Config,
    data,
    render::{self, TextRenderer},
    shell,
    view::{ListingView, ViewOptionsBuilder},
    FilterStateBuilder,
};

/// Browse and filter the restaurant directory.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// JSON dataset to load instead of the embedded sample [env: LISTING_DATASET]
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Case-insensitive text matched against name and cuisine
    #[arg(short, long)]
    query: Option<String>,

    /// Minimum rating, inclusive
    #[arg(long)]
    min_rating: Option<f64>,

    /// Exact cuisine, or `all`
    #[arg(long)]
    cuisine: Option<String>,

    /// Exact price tier such as `$$`, or `all`
    #[arg(long)]
    price: Option<String>,

    /// Print the results as JSON
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Read filter commands from stdin and re-render after each one
    #[arg(short, long)]
    interactive: bool,

    /// Header printed above the listing [env: LISTING_TITLE]
    #[arg(long)]
    title: Option<String>,

    /// Make `clear` also empty the search text [env: LISTING_CLEAR_RESETS_SEARCH]
    #[arg(long)]
    clear_resets_search: bool,
}

impl Cli {
    async fn run(self) -> anyhow::Result<()> {
        setup_logging(self.verbose)?;

        let mut config = Config::from_env()?;
        if let Some(dataset) = self.dataset.clone() {
            config.dataset = Some(dataset);
        }
        if let Some(title) = self.title.clone() {
            config.title = title;
        }
        config.clear_resets_search |= self.clear_resets_search;
        tracing::debug!(?config, "resolved configuration");

        let restaurants = match &config.dataset {
            Some(path) => data::load_dataset(path)?,
            None => data::sample_restaurants(),
        };
        let options = ViewOptionsBuilder::default()
            .clear_resets_search(config.clear_resets_search)
            .build()?;
        let mut view = ListingView::with_options(restaurants, options);
        self.apply_flags(&mut view)?;

        if self.json {
            let json = render::json(&view)?;
            render::emit(&mut std::io::stdout().lock(), &format!("{json}\n"))?;
            return Ok(());
        }

        let renderer = TextRenderer::new(config.title);
        if self.interactive {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(&mut view, &renderer, input, tokio::io::stdout()).await
        } else {
            render::emit(&mut std::io::stdout().lock(), &renderer.listing(&view))
        }
    }

    fn apply_flags(&self, view: &mut ListingView) -> anyhow::Result<()> {
        if let Some(query) = &self.query {
            view.set_query(query.as_str());
        }

        let mut filters = FilterStateBuilder::default();
        if let Some(rating) = self.min_rating {
            filters.min_rating(rating);
        }
        if let Some(cuisine) = &self.cuisine {
            filters.cuisine(cuisine.as_str());
        }
        if let Some(price) = &self.price {
            filters.price_range(price.as_str());
        }
        view.set_filters(filters.build()?);
        Ok(())
    }
}

fn setup_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(render::supports_color())
        .with_file(false)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    Cli::parse().run().await
}
