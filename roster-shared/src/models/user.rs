//! User resource model
//!
//! A user is the only resource the service exposes. On the wire it is a JSON
//! object with exactly three fields, in declaration order:
//!
//! ```json
//! { "id": 1, "name": "Ada Lovelace", "email": "ada@example.com" }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id SERIAL PRIMARY KEY,
//!     name TEXT,
//!     email TEXT
//! );
//! ```
//!
//! Field presence is the only thing the service checks. Absent fields decode
//! to their zero value (empty string, or 0 for `id`), and so does an explicit
//! JSON `null` for `name` or `email`.

use serde::{Deserialize, Deserializer, Serialize};

/// User record as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-assigned surrogate key (`SERIAL`)
    ///
    /// Immutable once created. The service never picks it on the client's
    /// behalf.
    #[serde(default)]
    pub id: i32,

    /// Display name, may be empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Email address, unvalidated and not unique
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// Request payload for create and update
///
/// Clients send a full user object; any `id` they include is ignored because
/// serde skips unknown fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInput {
    /// New display name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// New email address
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl User {
    /// Builds a user from a payload and the id the store assigned to it
    pub fn from_input(id: i32, input: UserInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
