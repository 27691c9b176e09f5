//! Authentication module
//!
//! Stateless bearer tokens signed with a key supplied at startup

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, TokenError, TokenService};
pub use middleware::{AuthUser, BearerToken, bearer_token};
