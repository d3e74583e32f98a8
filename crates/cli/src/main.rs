//! Marketplace CLI - Cart inspection and management.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! marketplace show
//!
//! # Add a product (bumps quantity if already in the cart)
//! marketplace add --id prod-1 --title "Widget" --image-url https://example.com/w.png --price 19.99
//!
//! # Adjust quantities
//! marketplace increment prod-1
//! marketplace decrement prod-1
//!
//! # Drop a whole line
//! marketplace remove prod-1
//! ```
//!
//! # Commands
//!
//! - `show` - Print the current cart contents
//! - `add` - Add a product to the cart
//! - `increment` / `decrement` - Adjust a line's quantity
//! - `remove` - Remove a line entirely
//!
//! The cart is persisted under `MARKETPLACE_DATA_DIR` (default
//! `.marketplace/`) and survives across invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use marketplace_cart::{CartStore, FileStore};
use marketplace_core::{NewCartItem, ProductId};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "marketplace")]
#[command(author, version, about = "Marketplace cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current cart contents
    Show,
    /// Add a product to the cart
    Add {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Product display name
        #[arg(long)]
        title: String,

        /// Product image URL
        #[arg(long)]
        image_url: String,

        /// Unit price (e.g. 19.99)
        #[arg(long)]
        price: Decimal,
    },
    /// Increase a line's quantity by 1
    Increment {
        /// Product identifier
        id: String,
    },
    /// Decrease a line's quantity by 1, removing the line at 0
    Decrement {
        /// Product identifier
        id: String,
    },
    /// Remove a line entirely
    Remove {
        /// Product identifier
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; quiet by default for a CLI
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marketplace=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Composition root: config, storage backend, then the cart store,
    // wired once and passed down by reference.
    let config = CliConfig::from_env()?;
    let store = FileStore::open(&config.data_dir).await?;
    let cart = CartStore::open(store).await?;

    match cli.command {
        Commands::Show => commands::cart::show(&cart),
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => {
            let product = NewCartItem {
                id: ProductId::from(id),
                title,
                image_url,
                price,
            };
            commands::cart::add(&cart, product).await?;
        }
        Commands::Increment { id } => {
            commands::cart::increment(&cart, &ProductId::from(id)).await?;
        }
        Commands::Decrement { id } => {
            commands::cart::decrement(&cart, &ProductId::from(id)).await?;
        }
        Commands::Remove { id } => {
            commands::cart::remove(&cart, &ProductId::from(id)).await?;
        }
    }
    Ok(())
}
