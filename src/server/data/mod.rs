//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity. Repositories use SeaORM entity models internally and return them to the service
//! layer, which converts them into domain models. Deletes that cascade to child rows run
//! inside a single transaction.

pub mod answer;
pub mod question;
pub mod survey;
pub mod user;

#[cfg(test)]
mod test;
