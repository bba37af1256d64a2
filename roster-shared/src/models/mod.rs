//! Resource models for Roster
//!
//! # Models
//!
//! - `user`: The `User` resource and the `UserInput` request payload
//!
//! # Example
//!
//! ```
//! use roster_shared::models::user::{User, UserInput};
//!
//! let input: UserInput = serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
//! let user = User::from_input(7, input);
//! assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"id":7,"name":"Ada","email":"ada@example.com"}"#);
//! ```

pub mod user;
