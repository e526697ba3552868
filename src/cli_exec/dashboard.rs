use market_console::views::{format_category, format_currency, load_dashboard};

use super::*;

pub(super) fn handle_dashboard_command(console: &Console, json: bool) -> Result<()> {
    console.require_view(View::Dashboard)?;
    let user = console.require_user()?;
    let summary = load_dashboard(&console.client, &user).context("load dashboard")?;

    if json {
        return print_json(&summary, "dashboard");
    }

    println!("products: {}", summary.total_products);
    println!("stores: {}", summary.total_stores);
    if user.role == market_console::model::Role::Admin {
        match summary.total_users {
            Some(n) => println!("users: {}", n),
            None => println!("users: -"),
        }
    }

    println!();
    println!("recent products:");
    if summary.recent_products.is_empty() {
        println!("  (none)");
    }
    for recent in &summary.recent_products {
        println!(
            "  {} {} [{}] {} @ {}",
            recent.product.id,
            recent.product.name,
            format_category(recent.product.category),
            format_currency(recent.product.price),
            recent.store_name.as_deref().unwrap_or("-")
        );
    }

    if !summary.my_stores.is_empty() {
        println!();
        println!("my stores:");
        for store in &summary.my_stores {
            println!("  {} {}", store.id, store.name);
        }
    }

    println!();
    println!("categories:");
    for (category, count) in &summary.categories {
        println!("  {:<14} {}", format_category(*category), count);
    }
    Ok(())
}
