//! Write payloads for the remote tables.
//!
//! Row ids and `created_at` are assigned by the service, so the write
//! types carry only the editable columns.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Editable columns of a news row. Used both to insert a new post and
/// to overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsChanges {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<Timestamp>,
}

/// Partial update flipping a post between published and draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishChange {
    pub published: bool,
    pub published_at: Option<Timestamp>,
}

/// Editable columns of a product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
}

/// Upsert payload for `user_roles`, keyed on `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleUpsert {
    pub user_id: UserId,
    pub role: Role,
}
