//! Domain logic for the Gohte Architects portfolio and admin CMS.
//!
//! Pure types and functions only: no I/O, no database, no HTTP.

pub mod blocks;
pub mod carousel;
pub mod contact;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod guard;
pub mod layout;
pub mod publication;
pub mod render;
pub mod types;
pub mod upload;
pub mod video;
pub mod work;
