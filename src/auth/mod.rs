//! Cookie-based JWT authentication
//!
//! Incoming requests carry a signed access token in an HTTP-only cookie. The
//! authenticator decodes the token, resolves the `user_id` claim against the
//! user directory and enforces the active-account policy. Token issuance is
//! owned by the account service; this module only consumes tokens.

pub mod extract;
pub mod jwt;
pub mod middleware;

pub use extract::MaybeAuthUser;
pub use jwt::{Claims, TokenError};
pub use middleware::{authenticate, require_auth, AuthOutcome, AuthRejection, AuthUser};

/// Cookie name for the JWT access token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
