//! Loomwear CLI - Storefront driver.
//!
//! The CLI is the single logical actor behind the shop state store: it
//! opens the store from the configured slot, issues one operation, and
//! exits (the store persists after every mutation).
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! lw-cli catalog list --featured
//! lw-cli catalog show 4
//! lw-cli catalog search leather
//!
//! # Manage the cart
//! lw-cli cart add 1 -q 2 --size M --color white
//! lw-cli cart update 1 3 --size M --color white
//! lw-cli cart show
//!
//! # Wishlist and history
//! lw-cli wishlist add 4
//! lw-cli recent
//!
//! # Check out
//! lw-cli checkout --email shopper@example.com
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// User-facing output goes to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use loomwear_storefront::checkout::CheckoutClient;
use loomwear_storefront::config::ShopConfig;
use loomwear_storefront::error::AppError;
use loomwear_storefront::store::{ShopStore, StateSlot};

mod commands;

#[derive(Parser)]
#[command(name = "lw-cli")]
#[command(author, version, about = "Loomwear storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show recently viewed products
    Recent,
    /// Create a checkout session from the cart
    Checkout {
        /// Customer email address
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only products in this category
        #[arg(long)]
        category: Option<String>,

        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only best sellers
        #[arg(long)]
        best_sellers: bool,

        /// Only new arrivals
        #[arg(long)]
        new_arrivals: bool,
    },
    /// Show one product in detail (records it as recently viewed)
    Show {
        /// Product ID
        id: String,
    },
    /// Search products by name, description, or category
    Search {
        /// Search query
        query: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Selected size
        #[arg(long)]
        size: Option<String>,

        /// Selected color
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a cart line
    Remove {
        /// Product ID
        id: String,

        /// Selected size
        #[arg(long)]
        size: Option<String>,

        /// Selected color
        #[arg(long)]
        color: Option<String>,
    },
    /// Set a cart line's quantity (0 removes the line)
    Update {
        /// Product ID
        id: String,

        /// New quantity
        quantity: u32,

        /// Selected size
        #[arg(long)]
        size: Option<String>,

        /// Selected color
        #[arg(long)]
        color: Option<String>,
    },
    /// Empty the cart
    Clear,
    /// Show the cart with totals
    Show,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add a product to the wishlist
    Add {
        /// Product ID
        id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product ID
        id: String,
    },
    /// Show the wishlist
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loomwear=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = ShopConfig::from_env()?;
    let slot = StateSlot::new(&config.data_dir, &config.state_slot);
    let mut store = ShopStore::open(slot);

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                featured,
                best_sellers,
                new_arrivals,
            } => commands::catalog::list(category.as_deref(), featured, best_sellers, new_arrivals),
            CatalogAction::Show { id } => commands::catalog::show(&mut store, &id)?,
            CatalogAction::Search { query } => commands::catalog::search(&query),
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                id,
                quantity,
                size,
                color,
            } => commands::cart::add(&mut store, &id, quantity, size, color)?,
            CartAction::Remove { id, size, color } => {
                commands::cart::remove(&mut store, &id, size, color);
            }
            CartAction::Update {
                id,
                quantity,
                size,
                color,
            } => commands::cart::update(&mut store, &id, quantity, size, color),
            CartAction::Clear => commands::cart::clear(&mut store),
            CartAction::Show => commands::cart::show(&store),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { id } => commands::wishlist::add(&mut store, &id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&mut store, &id),
            WishlistAction::Show => commands::wishlist::show(&store),
        },
        Commands::Recent => commands::recent::show(&store),
        Commands::Checkout { email } => {
            let client = CheckoutClient::new(config.base_url.clone());
            commands::checkout::run(&mut store, &client, &email)?;
        }
    }
    Ok(())
}
