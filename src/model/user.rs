use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Seller,
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Seller, Role::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Seller => "SELLER",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "SELLER" => Ok(Role::Seller),
            "CUSTOMER" => Ok(Role::Customer),
            other => Err(format!(
                "unknown role `{}` (expected one of {})",
                other,
                Role::ALL.map(|r| r.as_str()).join(", ")
            )),
        }
    }
}

/// A user record as served by `/api/users` and `/api/users/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: EntityId,
    pub name: String,

    #[serde(default)]
    pub email: String,

    pub role: Role,
}

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,

    /// Left out of the payload when unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    pub role: Role,
}
