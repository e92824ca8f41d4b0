//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus the input DTOs its repository accepts.

pub mod page;
pub mod publication;
pub mod session;
pub mod user;
pub mod work;
