use market_console::model::{Product, ProductInput, Store, StoreInput};
use market_console::views::{
    ProductFilter, StoreFilter, can_edit_product, format_category, format_currency,
};

use super::*;

fn print_store_line(s: &Store) {
    println!(
        "{} {} ({}) manager={}{}",
        s.id,
        s.name,
        s.location.as_deref().unwrap_or("-"),
        s.manager_id,
        s.manager_name
            .as_deref()
            .map(|n| format!(" {}", n))
            .unwrap_or_default()
    );
}

fn print_product_line(p: &Product, store_name: Option<&str>) {
    println!(
        "{} {} [{}] {} @ {}",
        p.id,
        p.name,
        format_category(p.category),
        format_currency(p.price),
        store_name.unwrap_or("-")
    );
}

pub(super) fn handle_stores_command(console: &Console, command: StoresCommands) -> Result<()> {
    console.require_view(View::Stores)?;
    let stores_api = console.client.stores();

    match command {
        StoresCommands::List {
            search,
            mine,
            manager,
            json,
        } => {
            let stores = match manager {
                Some(manager_id) => stores_api
                    .get_by_manager(manager_id)
                    .context("list stores by manager")?,
                None => stores_api.get_all().context("list stores")?,
            };
            let manager_id = if mine {
                Some(console.require_user()?.id)
            } else {
                None
            };
            let filtered = StoreFilter { search, manager_id }.apply(&stores);
            if json {
                print_json(&filtered, "stores")?;
            } else {
                for s in &filtered {
                    print_store_line(s);
                }
                let n = filtered.len();
                println!("{} store{}", n, if n == 1 { "" } else { "s" });
            }
        }
        StoresCommands::Get { id, json } => {
            let store = stores_api.get_by_id(id).context("get store")?;
            if json {
                print_json(&store, "store")?;
            } else {
                print_store_line(&store);
            }
        }
        StoresCommands::Create {
            name,
            location,
            manager,
            json,
        } => {
            let manager_id = match manager {
                Some(id) => id,
                None => console.require_user()?.id,
            };
            let created = stores_api
                .create(&StoreInput {
                    name,
                    location,
                    manager_id,
                })
                .context("create store")?;
            if json {
                print_json(&created, "store")?;
            } else {
                println!("Created store {}", created.id);
            }
        }
        StoresCommands::Update {
            id,
            name,
            location,
            manager,
            json,
        } => {
            let manager_id = match manager {
                Some(id) => id,
                None => stores_api.get_by_id(id).context("get store")?.manager_id,
            };
            let updated = stores_api
                .update(
                    id,
                    &StoreInput {
                        name,
                        location,
                        manager_id,
                    },
                )
                .context("update store")?;
            if json {
                print_json(&updated, "store")?;
            } else {
                println!("Updated store {}", updated.id);
            }
        }
        StoresCommands::Delete { id } => {
            stores_api.delete(id).context("delete store")?;
            println!("Deleted store {}", id);
        }
    }
    Ok(())
}

/// Edits are allowed for admins and for the manager of the product's store.
fn require_product_edit(console: &Console, product: &Product) -> Result<()> {
    let user = console.require_user()?;
    let stores = console
        .client
        .stores()
        .get_all()
        .context("list stores")?;
    if !can_edit_product(&user, product, &stores) {
        anyhow::bail!(
            "You do not have permission to edit product {} (store {})",
            product.id,
            product.store_id
        );
    }
    Ok(())
}

pub(super) fn handle_products_command(console: &Console, command: ProductsCommands) -> Result<()> {
    console.require_view(View::Products)?;
    let products_api = console.client.products();

    match command {
        ProductsCommands::List {
            search,
            category,
            store,
            json,
        } => {
            let products = match (store, category) {
                (Some(store_id), _) => products_api
                    .get_by_store(store_id)
                    .context("list products by store")?,
                (None, Some(category)) => products_api
                    .get_by_category(category)
                    .context("list products by category")?,
                (None, None) => products_api.get_all().context("list products")?,
            };
            let filtered = ProductFilter {
                search,
                category,
                store_id: store,
            }
            .apply(&products);
            if json {
                print_json(&filtered, "products")?;
            } else {
                let stores = console.client.stores().get_all().unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "store names unavailable");
                    Vec::new()
                });
                for p in &filtered {
                    let store_name = stores
                        .iter()
                        .find(|s| s.id == p.store_id)
                        .map(|s| s.name.as_str());
                    print_product_line(p, store_name);
                }
                let n = filtered.len();
                println!("{} product{}", n, if n == 1 { "" } else { "s" });
            }
        }
        ProductsCommands::Get { id, json } => {
            let product = products_api.get_by_id(id).context("get product")?;
            if json {
                print_json(&product, "product")?;
            } else {
                print_product_line(&product, None);
                if let Some(description) = &product.description {
                    println!("  {}", description);
                }
            }
        }
        ProductsCommands::Search {
            keyword,
            store,
            json,
        } => {
            let found = match store {
                Some(store_id) => products_api
                    .search_by_store(store_id, &keyword)
                    .context("search store products")?,
                None => products_api.search(&keyword).context("search products")?,
            };
            if json {
                print_json(&found, "products")?;
            } else {
                for p in &found {
                    print_product_line(p, None);
                }
            }
        }
        ProductsCommands::Create {
            name,
            category,
            store,
            price,
            description,
            json,
        } => {
            let created = products_api
                .create(&ProductInput {
                    name,
                    category,
                    store_id: store,
                    description,
                    price,
                })
                .context("create product")?;
            if json {
                print_json(&created, "product")?;
            } else {
                println!("Created product {}", created.id);
            }
        }
        ProductsCommands::Update {
            id,
            name,
            category,
            store,
            price,
            description,
            json,
        } => {
            let existing = products_api.get_by_id(id).context("get product")?;
            require_product_edit(console, &existing)?;
            let updated = products_api
                .update(
                    id,
                    &ProductInput {
                        name,
                        category,
                        store_id: store,
                        description,
                        price,
                    },
                )
                .context("update product")?;
            if json {
                print_json(&updated, "product")?;
            } else {
                println!("Updated product {}", updated.id);
            }
        }
        ProductsCommands::Delete { id } => {
            let existing = products_api.get_by_id(id).context("get product")?;
            require_product_edit(console, &existing)?;
            products_api.delete(id).context("delete product")?;
            println!("Deleted product {}", id);
        }
    }
    Ok(())
}
