//! Session verification and authorization.
//!
//! Authentication itself (token issuance, OAuth code exchange internals)
//! lives in the external auth provider; this module only verifies bearer
//! credentials against it, enforces the admin role from the store, and
//! picks the redirect origin after a callback code exchange.

pub mod client;
pub mod guard;
pub mod redirect;

pub use client::{AuthProviderClient, AuthUser, SessionVerifier};
pub use guard::{require_admin, require_session};
pub use redirect::select_redirect_origin;
