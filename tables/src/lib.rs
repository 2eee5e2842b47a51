use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod client;
pub mod changes;
pub mod rows;

pub use client::{ClientError, Order, TableClient, TableQuery, ok_body, ok_empty};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
#[serde(transparent)]
pub struct NewsId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

/// Authorization level of a user.
///
/// The declaration order is the privilege hierarchy, so the derived
/// `Ord` gives `Role::User < Role::Editor < Role::Admin`. The wire form
/// is the lowercase label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("user")]
    User,
    #[display("editor")]
    Editor,
    #[display("admin")]
    Admin,
}

impl Role {
    /// All roles, least privileged first.
    pub const ALL: [Role; 3] = [Role::User, Role::Editor, Role::Admin];

    /// True if this role is at least as privileged as `required`.
    pub fn meets(self, required: Role) -> bool {
        self >= required
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            _ => Err(ParseRoleError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRoleError;

impl std::fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown role label")
    }
}

impl std::error::Error for ParseRoleError {}

/// The authenticated caller as reported by the auth service.
///
/// Extra profile fields the service returns are ignored; only the
/// stable identifier and the sign-in email are consumed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "id")]
    pub user_id: UserId,
    pub email: String,
}

/// A bearer session issued by the auth service on sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(rename = "user")]
    pub identity: Identity,
}
