//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Factories for child
//! entities take the ids of their parents, so create parents first or use
//! the combined helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let survey = factory::create_survey(&db).await?;
//! let question = factory::create_question(&db, survey.id).await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Ana")
//!     .email("ana@example.com")
//!     .build()
//!     .await?;
//!
//! let (survey, question, user, answer) =
//!     factory::helpers::create_answer_with_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `survey` - Create survey entities
//! - `question` - Create question entities for a survey
//! - `user` - Create user entities
//! - `answer` - Create answer entities for a question and user
//! - `helpers` - ID generation and creation of entities with dependencies

pub mod answer;
pub mod helpers;
pub mod question;
pub mod survey;
pub mod user;

pub use answer::create_answer;
pub use question::create_question;
pub use survey::create_survey;
pub use user::create_user;
