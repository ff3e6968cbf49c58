use crate::core::repository::DEFAULT_CART_KEY;
use crate::core::{ConfigProvider, ProductId};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-cart")]
#[command(about = "Inspect and change a locally persisted storefront cart")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3333")]
    pub api_base_url: String,

    #[arg(long, default_value = "./.cart")]
    pub storage_path: String,

    #[arg(long, default_value = DEFAULT_CART_KEY)]
    pub storage_key: String,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Read settings from a TOML file instead of the flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Print the stored cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Drop a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("storage_path", &self.storage_path)?;
        validate_non_empty_string("storage_key", &self.storage_key)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["storefront-cart", "show"]);

        assert_eq!(config.command, CartCommand::Show);
        assert_eq!(config.storage_key(), DEFAULT_CART_KEY);
        assert_eq!(config.request_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_update_with_negative_amount() {
        let config = CliConfig::parse_from(["storefront-cart", "update", "3", "-1"]);

        assert_eq!(
            config.command,
            CartCommand::Update {
                product_id: 3,
                amount: -1
            }
        );
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let config = CliConfig::parse_from([
            "storefront-cart",
            "--api-base-url",
            "localhost",
            "add",
            "1",
        ]);

        assert_eq!(config.command, CartCommand::Add { product_id: 1 });
        assert!(config.validate().is_err());
    }
}
