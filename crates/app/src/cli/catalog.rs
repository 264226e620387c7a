use atelier_app::context::AppContext;
use tabled::builder::Builder;

use crate::cli::output::{price, print_table};

pub(crate) async fn run(ctx: &AppContext) -> Result<(), String> {
    let storefront = ctx
        .shop()
        .open()
        .await
        .map_err(|error| format!("failed to open the shop: {error}"))?;

    if storefront.photos().is_empty() {
        println!("no photos in the catalog");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Photo", "Title", "Category", "Prints", "From", "Orderable"]);

    for photo in storefront.photos() {
        let availability = storefront.availability(photo.id);
        let cheapest = availability.items.iter().map(|item| item.price).min();
        let orderable = if availability.has_stock { "yes" } else { "no" };

        builder.push_record([
            photo.id.to_string(),
            photo.title.clone(),
            photo.category.clone(),
            availability.items.len().to_string(),
            cheapest.map_or_else(|| "-".to_string(), price),
            orderable.to_string(),
        ]);
    }

    print_table(builder, &[3, 4])
}
