use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use storefront_cart::utils::{logger, validation::Validate};
use storefront_cart::{
    ApiClient, CartCommand, CartRepository, CartStore, CliConfig, ConfigProvider, LocalStorage,
    Outcome, TomlConfig, TracingNotifier, UpdateProductAmount,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            let file_config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file {}", path.display()))?;
            let format = if cli.log_format == logger::LogFormat::Json {
                cli.log_format
            } else {
                file_config.log_format()
            };
            logger::init_logger(cli.verbose, file_config.log_level(), format);
            run(&file_config, &cli.command).await
        }
        None => {
            logger::init_logger(cli.verbose, None, cli.log_format);
            run(&cli, &cli.command).await
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C, command: &CartCommand) -> anyhow::Result<()> {
    config.validate().context("configuration validation failed")?;

    tracing::debug!(
        "Using API {} and storage {}",
        config.api_base_url(),
        config.storage_path()
    );

    let api = Arc::new(ApiClient::from_config(config));
    let repository = CartRepository::new(
        LocalStorage::new(config.storage_path().to_string()),
        config.storage_key(),
    );
    let store = CartStore::open(repository, api.clone(), api, Arc::new(TracingNotifier)).await;

    let outcome = match *command {
        CartCommand::Show => None,
        CartCommand::Add { product_id } => Some(store.add_product(product_id).await),
        CartCommand::Remove { product_id } => Some(store.remove_product(product_id).await),
        CartCommand::Update { product_id, amount } => Some(
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await,
        ),
    };

    if let Some(outcome) = outcome {
        tracing::info!("Cart operation finished: {:?}", outcome);
    }

    let cart = store.cart();
    if cart.is_empty() {
        println!("🛒 Cart is empty");
    } else {
        for item in cart.items() {
            println!(
                "{:>6}  {:<40} x{:<3} {:>10.2}",
                item.id(),
                item.product.title,
                item.amount,
                item.product.price
            );
        }
    }

    if let Some(Outcome::Rejected(kind)) = outcome {
        eprintln!("❌ {}", kind.message());
        std::process::exit(2);
    }

    Ok(())
}
