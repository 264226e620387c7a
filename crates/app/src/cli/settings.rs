use atelier::{admin::Tab, catalog::SettingKey};
use atelier_app::{admin::Listing, context::AppContext};
use clap::{Args, Subcommand};
use tabled::builder::Builder;

use crate::cli::{AdminArgs, output::print_table};

const MASK: &str = "********";

#[derive(Debug, Args)]
pub(crate) struct SettingsCommand {
    #[command(flatten)]
    admin: AdminArgs,

    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Debug, Subcommand)]
enum SettingsSubcommand {
    /// List site settings
    List,

    /// Change a site setting
    Set {
        /// Setting key, e.g. photography_order_enabled
        key: String,

        /// New value
        value: String,
    },
}

pub(crate) async fn run(ctx: &AppContext, command: SettingsCommand) -> Result<(), String> {
    let mut console = command.admin.login(ctx).await?;

    match command.command {
        SettingsSubcommand::List => {
            let listing = console
                .open_tab(Tab::Settings)
                .await
                .map_err(|error| format!("failed to list settings: {error}"))?;

            let Listing::Settings(settings) = listing else {
                return Err("unexpected listing for the settings tab".to_string());
            };

            let mut builder = Builder::default();
            builder.push_record(["Key", "Value", "Updated"]);

            for setting in settings {
                builder.push_record([
                    setting.key.clone(),
                    display_value(&setting.key, &setting.value).to_string(),
                    setting.updated_at.to_string(),
                ]);
            }

            print_table(builder, &[])
        }
        SettingsSubcommand::Set { key, value } => {
            let setting = console
                .update_setting(&key, &value)
                .await
                .map_err(|error| format!("failed to update setting: {error}"))?;

            println!("{}: {}", setting.key, display_value(&setting.key, &setting.value));
            Ok(())
        }
    }
}

fn display_value<'a>(key: &str, value: &'a str) -> &'a str {
    if key == SettingKey::AdminPassword.as_str() {
        MASK
    } else {
        value
    }
}
