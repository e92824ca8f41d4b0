//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Access-token signing/validation and refresh-token hashing.
//! - [`cookie`] -- The `gohte_session` cookie carrying the access token.

pub mod cookie;
pub mod jwt;
pub mod password;
