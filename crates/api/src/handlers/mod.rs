pub mod auth;
pub mod contact;
pub mod editor;
pub mod layouts;
pub mod pages;
pub mod publications;
pub mod uploads;
pub mod works;
