//! HTTP request handlers.
//!
//! Controllers validate the shape of incoming payloads, convert DTOs into
//! parameters, call the matching service, and map the result to a status code and
//! JSON body. A missing row becomes `AppError::NotFound` here, not in the service.

pub mod answer;
pub mod question;
pub mod survey;
pub mod user;

#[cfg(test)]
mod test;
