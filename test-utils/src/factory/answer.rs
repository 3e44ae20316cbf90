//! Factory for creating answer entities in tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating a user's answer to a question.
pub struct AnswerFactory<'a> {
    db: &'a DatabaseConnection,
    question_id: i32,
    user_id: i32,
    text: String,
    recorded_at: DateTime<Utc>,
}

impl<'a> AnswerFactory<'a> {
    /// Creates a new AnswerFactory with text `"Answer {id}"` recorded now.
    pub fn new(db: &'a DatabaseConnection, question_id: i32, user_id: i32) -> Self {
        Self {
            db,
            question_id,
            user_id,
            text: format!("Answer {}", next_id()),
            recorded_at: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// Builds and inserts the answer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::answer::Model)` - Created answer entity
    /// - `Err(DbErr)` - Database error during insert (e.g. missing question or user)
    pub async fn build(self) -> Result<entity::answer::Model, DbErr> {
        entity::answer::ActiveModel {
            question_id: ActiveValue::Set(self.question_id),
            user_id: ActiveValue::Set(self.user_id),
            text: ActiveValue::Set(self.text),
            recorded_at: ActiveValue::Set(self.recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an answer with default text for the given question and user.
pub async fn create_answer(
    db: &DatabaseConnection,
    question_id: i32,
    user_id: i32,
) -> Result<entity::answer::Model, DbErr> {
    AnswerFactory::new(db, question_id, user_id).build().await
}
