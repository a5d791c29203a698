//! Catalog listing commands.

use anyhow::{Context as _, Result};

use super::{EventsArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{status_badge, stock_badge};

/// List products, optionally narrowed to one category.
pub async fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    let spinner = ctx.output.spinner("Fetching products...");
    let products = api.products(args.category).await;
    spinner.finish_and_clear();
    let products = products.with_context(|| format!("Failed to list products from {}", api.base_url()))?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = match args.category {
        Some(category) => format!("Products: {}", category.display_name()),
        None => "Products".to_string(),
    };
    ctx.output.header(&title);

    if products.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    let table = ctx.output.table(&[("NAME", 38), ("CATEGORY", 16), ("PRICE", 14), ("STOCK", 12)]);
    for product in &products {
        table.row(&[
            product.name.clone(),
            product.category.as_str().to_string(),
            product.price_display(),
            stock_badge(product.stock),
        ]);
    }

    ctx.output.info(&format!("{} product(s)", products.len()));
    Ok(())
}

/// List events, optionally narrowed to one status.
pub async fn events(args: EventsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    let spinner = ctx.output.spinner("Fetching events...");
    let events = api.events(args.status).await;
    spinner.finish_and_clear();
    let events = events.with_context(|| format!("Failed to list events from {}", api.base_url()))?;

    if ctx.output.is_json() {
        ctx.output.json(&events);
        return Ok(());
    }

    ctx.output.header("Events");

    if events.is_empty() {
        ctx.output.info("No events found");
        return Ok(());
    }

    let table = ctx.output.table(&[("TITLE", 34), ("DATE", 22), ("LOCATION", 28), ("STATUS", 12)]);
    for event in &events {
        table.row(&[
            event.title.clone(),
            event.date_display(),
            event.location.clone(),
            status_badge(event.status),
        ]);

        if let Some(participants) = event.participants_label() {
            ctx.output.kv("participants", &participants);
        }
    }

    ctx.output.info(&format!("{} event(s)", events.len()));
    Ok(())
}
