use super::*;

fn user(id: i64, role: Role) -> UserProfile {
    UserProfile {
        id,
        name: "U".to_string(),
        email: String::new(),
        role,
    }
}

fn products() -> Vec<Product> {
    (1..=7)
        .map(|i| Product {
            id: i,
            name: format!("P{}", i),
            category: if i % 2 == 0 {
                ProductCategory::Books
            } else {
                ProductCategory::Toys
            },
            store_id: if i == 1 { 99 } else { 1 },
            description: None,
            price: i as f64,
        })
        .collect()
}

fn stores() -> Vec<Store> {
    vec![
        Store {
            id: 1,
            name: "Main".to_string(),
            location: None,
            manager_id: 5,
            manager_name: None,
        },
        Store {
            id: 2,
            name: "Side".to_string(),
            location: None,
            manager_id: 6,
            manager_name: None,
        },
    ]
}

#[test]
fn summary_counts_and_recent_products() {
    let summary = DashboardSummary::build(&user(5, Role::Seller), &products(), &stores(), Some(3));
    assert_eq!(summary.total_products, 7);
    assert_eq!(summary.total_stores, 2);
    assert_eq!(summary.total_users, None);

    assert_eq!(summary.recent_products.len(), 5);
    assert_eq!(summary.recent_products[0].store_name, None);
    assert_eq!(summary.recent_products[1].store_name.as_deref(), Some("Main"));

    assert_eq!(summary.my_stores.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn categories_cover_every_category_in_order() {
    let summary = DashboardSummary::build(&user(1, Role::Customer), &products(), &stores(), None);
    assert_eq!(summary.categories.len(), ProductCategory::ALL.len());
    assert_eq!(summary.categories[0], (ProductCategory::Electronics, 0));
    let toys = summary
        .categories
        .iter()
        .find(|(c, _)| *c == ProductCategory::Toys)
        .unwrap();
    assert_eq!(toys.1, 4);
    assert!(summary.my_stores.is_empty());
}

#[test]
fn admins_see_user_totals() {
    let summary = DashboardSummary::build(&user(6, Role::Admin), &products(), &stores(), Some(3));
    assert_eq!(summary.total_users, Some(3));
    assert_eq!(summary.my_stores.len(), 1);
}

#[test]
fn my_stores_shows_at_most_four() {
    let many: Vec<Store> = (1..=6)
        .map(|id| Store {
            id,
            name: format!("Store {}", id),
            location: None,
            manager_id: 5,
            manager_name: None,
        })
        .collect();
    let summary = DashboardSummary::build(&user(5, Role::Seller), &[], &many, None);
    assert_eq!(summary.total_stores, 6);
    assert_eq!(
        summary.my_stores.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}
