//! Request authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the signed-in admin from a Bearer token or session cookie.
//! - [`guard::route_guard`] -- Redirects page requests for the admin area and login page.

pub mod auth;
pub mod guard;
