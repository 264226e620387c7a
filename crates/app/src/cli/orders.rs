use atelier::{
    admin::Tab,
    orders::{Order, OrderStatus, OrderUuid},
};
use atelier_app::{
    admin::{AdminConsole, Listing},
    context::AppContext,
};
use clap::{Args, Subcommand};
use tabled::builder::Builder;

use crate::cli::{
    AdminArgs,
    output::{price, print_table},
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(flatten)]
    admin: AdminArgs,

    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List orders, newest first
    List,

    /// Move an order to its next status
    Advance {
        /// Order id
        order: OrderUuid,
    },

    /// Set an order's status
    Status {
        /// Order id
        order: OrderUuid,

        /// pending, processing, shipped or completed
        status: OrderStatus,
    },
}

pub(crate) async fn run(ctx: &AppContext, command: OrdersCommand) -> Result<(), String> {
    let mut console = command.admin.login(ctx).await?;

    match command.command {
        OrdersSubcommand::List => list(&mut console).await,
        OrdersSubcommand::Advance { order } => {
            let order = console
                .advance_order(order)
                .await
                .map_err(|error| format!("failed to advance order: {error}"))?;

            print_order(&order);
            Ok(())
        }
        OrdersSubcommand::Status { order, status } => {
            let order = console
                .set_order_status(order, status)
                .await
                .map_err(|error| format!("failed to update order: {error}"))?;

            print_order(&order);
            Ok(())
        }
    }
}

async fn list(console: &mut AdminConsole) -> Result<(), String> {
    let listing = console
        .open_tab(Tab::Orders)
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    let Listing::Orders(orders) = listing else {
        return Err("unexpected listing for the orders tab".to_string());
    };

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Order", "Customer", "Email", "Items", "Total", "Status", "Placed"]);

    for order in orders {
        builder.push_record([
            order.order_number.to_string(),
            order.customer_name.clone(),
            order.customer_email.clone(),
            order.items.len().to_string(),
            price(order.total_price),
            order.status.to_string(),
            order.created_at.to_string(),
        ]);
    }

    print_table(builder, &[3, 4])
}

fn print_order(order: &Order) {
    println!("order_id: {}", order.id);
    println!("order_number: {}", order.order_number);
    println!("status: {}", order.status);
    println!("updated_at: {}", order.updated_at);
}
