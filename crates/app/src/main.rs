//! Checkout CLI

use std::process;

use checkout::{pricing::to_display, products::ProductCode};
use clap::{Parser, Subcommand};
use tracing::error;

use checkout_app::{config::AppConfig, context::AppContext, observability};

#[derive(Debug, Parser)]
#[command(name = "checkout-cli", about = "Basket pricing CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open a basket, add each product code in turn and print the total
    Price {
        /// Product codes, one per unit
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// List the product catalog
    Products,

    /// List the loaded promotions in the order they apply
    Promotions,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init(&cli.config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(message) = run(cli).await {
        error!("{message}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let ctx = AppContext::from_config(&cli.config.catalog)
        .map_err(|error| format!("{error}: {}", error_source(&error)))?;

    match cli.command {
        Commands::Price { codes } => price(&ctx, codes).await,
        Commands::Products => {
            products(&ctx);
            Ok(())
        }
        Commands::Promotions => {
            promotions(&ctx);
            Ok(())
        }
    }
}

fn error_source(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}

async fn price(ctx: &AppContext, codes: Vec<String>) -> Result<(), String> {
    let basket = ctx
        .checkout
        .create_basket()
        .await
        .map_err(|error| error.to_string())?;

    for code in codes {
        ctx.checkout
            .add_product(basket.clone(), ProductCode::from(code))
            .await
            .map_err(|error| error.to_string())?;
    }

    let total = ctx
        .checkout
        .basket_price(basket.clone())
        .await
        .map_err(|error| error.to_string())?;

    ctx.checkout
        .delete_basket(basket)
        .await
        .map_err(|error| error.to_string())?;

    #[expect(clippy::print_stdout, reason = "command output")]
    {
        println!("{total}");
    }

    Ok(())
}

fn products(ctx: &AppContext) {
    for product in ctx.datasource.products() {
        #[expect(clippy::print_stdout, reason = "command output")]
        {
            println!(
                "{}\t{}\t{}",
                product.code,
                product.name,
                to_display(product.price)
            );
        }
    }
}

fn promotions(ctx: &AppContext) {
    for promotion in ctx.datasource.promotions().iter() {
        let codes: Vec<&str> = promotion
            .product_codes()
            .into_iter()
            .map(ProductCode::as_str)
            .collect();

        #[expect(clippy::print_stdout, reason = "command output")]
        {
            println!("{}\t{}", promotion.kind(), codes.join(","));
        }
    }
}
