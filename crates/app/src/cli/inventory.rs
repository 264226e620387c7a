use atelier::catalog::PhotoUuid;
use atelier_app::context::AppContext;
use clap::{Args, Subcommand};
use tabled::builder::Builder;

use crate::cli::output::{price, print_table};

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    /// List print inventory
    List(ListInventoryArgs),
}

#[derive(Debug, Args)]
struct ListInventoryArgs {
    /// Only show prints of this photo
    #[arg(long)]
    photo: Option<PhotoUuid>,
}

pub(crate) async fn run(ctx: &AppContext, command: InventoryCommand) -> Result<(), String> {
    match command.command {
        InventorySubcommand::List(args) => list(ctx, args).await,
    }
}

async fn list(ctx: &AppContext, args: ListInventoryArgs) -> Result<(), String> {
    let items = match args.photo {
        Some(photo) => ctx.inventory.list_for_photo(photo).await,
        None => ctx.inventory.list_inventory().await,
    }
    .map_err(|error| format!("failed to list inventory: {error}"))?;

    if items.is_empty() {
        println!("no inventory found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Item", "Photo", "Size", "Material", "Quantity", "Price"]);

    for item in items {
        builder.push_record([
            item.id.to_string(),
            item.photo_id.to_string(),
            item.size,
            item.material,
            item.quantity.to_string(),
            price(item.price),
        ]);
    }

    print_table(builder, &[4, 5])
}
