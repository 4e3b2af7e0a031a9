//! Patient Records Shared Library
//!
//! Wire types, domain models, and validation helpers shared between the
//! backend and any Rust client of the API.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{AccountId, Patient};
pub use types::*;
pub use validation::{Credentials, Registration};
