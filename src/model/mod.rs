//! Data transfer objects exchanged over the HTTP API.
//!
//! Field names on the wire are Spanish camelCase
//! (`idEncuesta`, `titulo`, ...). Rust-side names are English.

pub mod answer;
pub mod api;
pub mod question;
pub mod survey;
pub mod user;
