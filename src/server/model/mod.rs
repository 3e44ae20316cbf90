//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the
//! validated input of a single operation from controller to service.

pub mod answer;
pub mod question;
pub mod survey;
pub mod user;

/// Returns the value when present and non-empty.
///
/// Required text fields are rejected both when absent and when sent as `""`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
