//! Application configuration

use clap::Args;

pub use self::{
    hosted::HostedConfig,
    logging::{LogFormat, LoggingConfig},
    storefront::{StockPolicyArg, StorefrontConfig},
};

pub(crate) mod hosted;
pub(crate) mod logging;
pub(crate) mod storefront;

/// Atelier configuration, read from CLI flags, the environment and `.env`.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Hosted project settings.
    #[command(flatten)]
    pub hosted: HostedConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Storefront behaviour.
    #[command(flatten)]
    pub storefront: StorefrontConfig,
}
