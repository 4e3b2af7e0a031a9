//! Authentication module
//!
//! Provides stateless JWT sessions with argon2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenService};
pub use middleware::{authenticate, require_auth, AuthUser, TOKEN_INVALID, TOKEN_REQUIRED};
pub use password::PasswordService;
