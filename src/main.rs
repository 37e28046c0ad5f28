//! Cart store CLI.
//!
//! Opens the persisted cart, applies one operation against the stock API and prints the
//! resulting line items as JSON.
//!
//! # Usage
//!
//! ```bash
//! cart-store show
//! cart-store add 3
//! cart-store amount 3 2
//! cart-store remove 3
//! ```
//!
//! Configuration comes from the environment (see [`cart_store::config`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

use cart_store::catalog::HttpCatalog;
use cart_store::config::CartConfig;
use cart_store::lifecycle::{setup_tracing, CartSystem};
use cart_store::model::{CartItem, ProductId, UpdateProductAmount};
use cart_store::notify::TracingNotifier;
use cart_store::storage::FileStorage;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cart-store")]
#[command(author, version, about = "Shopping cart backed by the stock API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: u32,
    },
    /// Set the quantity of a product already in the cart
    Amount {
        /// Product id
        id: u32,

        /// New quantity; zero or below is ignored
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() {
    setup_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    info!(api_url = %config.api_url, storage_dir = %config.storage_dir.display(), "Configuration loaded");

    let catalog = HttpCatalog::new(config.api_url.clone(), config.http_timeout)?;
    let storage = FileStorage::new(config.storage_dir.clone());
    let system = CartSystem::start(
        &config.cart,
        Arc::new(catalog),
        Arc::new(storage),
        Arc::new(TracingNotifier),
    )
    .await?;

    let store = system.store.clone();
    // The notifier has already reported a failure; the cart is printed either way.
    let outcome = match cli.command {
        Commands::Show => store.cart().await,
        Commands::Add { id } => store.add_product(ProductId(id)).await,
        Commands::Remove { id } => store.remove_product(ProductId(id)).await,
        Commands::Amount { id, amount } => {
            store
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId(id),
                    amount,
                })
                .await
        }
    };
    let items = match outcome {
        Ok(items) => items,
        Err(_) => store.cart().await?,
    };
    drop(store);

    print_cart(&items)?;
    system.shutdown().await?;
    Ok(())
}

fn print_cart(items: &[CartItem]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(items)?);
    Ok(())
}
