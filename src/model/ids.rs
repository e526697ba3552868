/// Numeric primary key used by every backend record (users, stores, products).
pub type EntityId = i64;
