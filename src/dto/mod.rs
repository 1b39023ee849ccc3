//! DTO modules that bridge services with templates and the JSON API.

pub mod api;
pub mod blog;
pub mod contact;
pub mod main;
pub mod research;
