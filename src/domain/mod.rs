//! Domain records exposed by the site's service layer.

pub mod article;
pub mod contact;
pub mod page;
pub mod research;
pub mod types;
