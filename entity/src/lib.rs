//! SeaORM entity definitions for the survey store.
//!
//! Each module maps one table. Relations declare the ownership chain
//! `survey -> question -> answer` and `user -> answer`, all with
//! `ON DELETE CASCADE` foreign keys.

pub mod prelude;

pub mod answer;
pub mod question;
pub mod survey;
pub mod user;
