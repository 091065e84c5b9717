mod render;
mod shop;

use clap::{Parser, Subcommand};
use meprice_catalog::CatalogClient;
use meprice_core::SortKey;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "meprice")]
#[command(about = "MePrice storefront in the terminal")]
struct Cli {
    /// Product feed to load; overrides `MEPRICE_CATALOG_URL`.
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally searched, filtered and sorted.
    Products {
        /// Case-insensitive substring of the product name.
        #[arg(long, default_value = "")]
        search: String,
        /// Category to show, or `all`.
        #[arg(long, default_value = meprice_core::ALL_CATEGORIES)]
        category: String,
        /// One of: default, name-asc, name-desc, price-asc, price-desc.
        #[arg(long, default_value_t = SortKey::Default)]
        sort: SortKey,
    },
    /// Homepage view: up to three products per category.
    Featured {
        /// Case-insensitive substring of the product name.
        #[arg(long, default_value = "")]
        search: String,
        /// Category chip to show, or `all`.
        #[arg(long, default_value = meprice_core::ALL_CATEGORIES)]
        category: String,
    },
    /// List the category filter choices.
    Categories,
    /// Add products to the cart by id and check out.
    Buy {
        /// Product ids; repeat an id to buy more than one.
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = meprice_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog_url = cli.catalog_url.as_deref().unwrap_or(&config.catalog_url);
    let client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)?;

    let mut session = shop::load_session(&client, catalog_url).await?;

    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
        } => shop::run_products(&mut session, search, category, sort),
        Commands::Featured { search, category } => {
            shop::run_featured(&mut session, search, category);
        }
        Commands::Categories => shop::run_categories(&session),
        Commands::Buy { ids } => shop::run_buy(&mut session, &ids)?,
    }

    Ok(())
}
