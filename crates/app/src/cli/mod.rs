use atelier_app::{
    admin::AdminConsole,
    config::AppConfig,
    context::AppContext,
    logging::init_subscriber,
};
use clap::{Args, Parser, Subcommand};
use zeroize::Zeroizing;

mod catalog;
mod inquiry;
mod inventory;
mod orders;
mod output;
mod settings;
mod upload;

#[derive(Debug, Parser)]
#[command(name = "atelier-app", about = "Atelier operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Photos on sale and whether they can be ordered
    Catalog,
    Orders(orders::OrdersCommand),
    Inventory(inventory::InventoryCommand),
    Settings(settings::SettingsCommand),
    Upload(upload::UploadArgs),
    Inquiry(inquiry::InquiryCommand),
}

/// Credentials for commands that go through the admin console.
#[derive(Debug, Args)]
pub(crate) struct AdminArgs {
    /// Admin panel password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: String,
}

impl AdminArgs {
    pub(crate) async fn login(self, ctx: &AppContext) -> Result<AdminConsole, String> {
        let password = Zeroizing::new(self.admin_password);

        ctx.admin_gate()
            .login(&password)
            .await
            .map_err(|error| format!("admin login failed: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        init_subscriber(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let ctx = AppContext::from_config(
            &self.config.hosted,
            self.config.storefront.stock_policy.into(),
        )
        .map_err(|error| format!("failed to initialise: {error}"))?;

        match self.command {
            Commands::Catalog => catalog::run(&ctx).await,
            Commands::Orders(command) => orders::run(&ctx, command).await,
            Commands::Inventory(command) => inventory::run(&ctx, command).await,
            Commands::Settings(command) => settings::run(&ctx, command).await,
            Commands::Upload(args) => upload::run(&ctx, args).await,
            Commands::Inquiry(command) => inquiry::run(&ctx, command).await,
        }
    }
}
