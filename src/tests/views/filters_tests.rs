use super::*;
use crate::views::{format_category, format_currency};

fn user(id: EntityId, name: &str, email: &str, role: Role) -> UserProfile {
    UserProfile {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

fn store(id: EntityId, name: &str, location: Option<&str>, manager_id: EntityId) -> Store {
    Store {
        id,
        name: name.to_string(),
        location: location.map(str::to_string),
        manager_id,
        manager_name: None,
    }
}

fn product(id: EntityId, name: &str, category: ProductCategory, store_id: EntityId) -> Product {
    Product {
        id,
        name: name.to_string(),
        category,
        store_id,
        description: None,
        price: 1.0,
    }
}

#[test]
fn user_filter_matches_name_or_email_and_role() {
    let users = vec![
        user(1, "Alice Admin", "alice@corp.test", Role::Admin),
        user(2, "Bob", "bob@SHOP.test", Role::Seller),
        user(3, "Carol", "carol@home.test", Role::Customer),
    ];

    let by_email = UserFilter {
        search: Some("shop".to_string()),
        role: None,
    };
    assert_eq!(by_email.apply(&users).iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);

    let by_role = UserFilter {
        search: Some("   ".to_string()),
        role: Some(Role::Customer),
    };
    assert_eq!(by_role.apply(&users).iter().map(|u| u.id).collect::<Vec<_>>(), vec![3]);

    assert_eq!(UserFilter::default().apply(&users).len(), 3);
}

#[test]
fn store_filter_handles_missing_location_and_mine_only() {
    let stores = vec![
        store(1, "Corner Shop", None, 10),
        store(2, "Mall Outlet", Some("Downtown Mall"), 11),
        store(3, "Kiosk", Some("downtown station"), 10),
    ];

    let downtown = StoreFilter {
        search: Some("Downtown".to_string()),
        manager_id: None,
    };
    assert_eq!(downtown.apply(&stores).iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 3]);

    let mine = StoreFilter {
        search: Some("downtown".to_string()),
        manager_id: Some(10),
    };
    assert_eq!(mine.apply(&stores).iter().map(|s| s.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn product_filter_combines_all_criteria() {
    let mut described = product(2, "Cable", ProductCategory::Electronics, 1);
    described.description = Some("USB-C charging lead".to_string());
    let products = vec![
        product(1, "Laptop", ProductCategory::Electronics, 1),
        described,
        product(3, "Charger", ProductCategory::Electronics, 2),
        product(4, "Apples", ProductCategory::Grocery, 1),
    ];

    let filter = ProductFilter {
        search: Some("charg".to_string()),
        category: Some(ProductCategory::Electronics),
        store_id: Some(1),
    };
    assert_eq!(filter.apply(&products).iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

    let grocery = ProductFilter {
        category: Some(ProductCategory::Grocery),
        ..ProductFilter::default()
    };
    assert_eq!(grocery.apply(&products).len(), 1);
}

#[test]
fn edit_permission_is_admin_or_store_manager() {
    let stores = vec![store(1, "A", None, 10), store(2, "B", None, 11)];
    let p = product(1, "Thing", ProductCategory::Toys, 1);

    assert!(can_edit_product(&user(99, "Root", "r@x", Role::Admin), &p, &stores));
    assert!(can_edit_product(&user(10, "Mgr", "m@x", Role::Seller), &p, &stores));
    assert!(!can_edit_product(&user(11, "Other", "o@x", Role::Seller), &p, &stores));

    let orphan = product(2, "Lost", ProductCategory::Toys, 42);
    assert!(!can_edit_product(&user(10, "Mgr", "m@x", Role::Seller), &orphan, &stores));
}

#[test]
fn category_labels_are_title_cased() {
    assert_eq!(format_category(ProductCategory::PersonalCare), "Personal Care");
    assert_eq!(format_category(ProductCategory::Electronics), "Electronics");
}

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(5.5), "$5.50");
    assert_eq!(format_currency(1234.5), "$1,234.50");
    assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_currency(-12.5), "-$12.50");
}
