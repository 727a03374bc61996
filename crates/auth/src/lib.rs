//! `storefront-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: sessions are
//! issued and decoded by the transport layer; this crate only reads them.

pub mod authorize;
pub mod claims;
pub mod roles;
pub mod session;

pub use authorize::{authorize, AuthzError};
pub use claims::{validate_claims, SessionClaims, TokenValidationError};
pub use roles::Role;
pub use session::{Session, SessionUser};
