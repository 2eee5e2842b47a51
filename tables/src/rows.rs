//! Rows as read from the remote tables.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{NewsId, ProductId, Role, UserId};

/// A post in the `news` table.
///
/// Drafts have `published == false` and usually no `published_at`; the
/// timestamp is set on first publish. Public listings must only show
/// rows that are published and carry a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A catalog entry in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// A role assignment in the `user_roles` table.
///
/// The service enforces at most one row per user. A user without a row
/// has the implicit [`Role::User`]; that default lives in the role
/// resolution code, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: UserId,
    pub role: Role,
    pub updated_at: Timestamp,
}
