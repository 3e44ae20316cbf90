//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Server-assigned timestamps, the forced active flag on new
//!   surveys, and partial-update semantics
//! - **Orchestration**: Checking that parent rows exist before inserting children and
//!   loading child collections alongside their parents
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Lookups return `Option` and deletes return `bool`; the controller decides how a
//! missing row is reported.

pub mod answer;
pub mod question;
pub mod survey;
pub mod user;
