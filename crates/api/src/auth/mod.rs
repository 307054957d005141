//! Caller token verification.
//!
//! - [`jwt`] -- HS256 JWT validation for externally issued caller tokens.

pub mod jwt;
