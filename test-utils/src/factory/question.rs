//! Factory for creating question entities in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating question entities belonging to a survey.
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    survey_id: i32,
    text: String,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory for `survey_id` with text `"Question {id}?"`.
    pub fn new(db: &'a DatabaseConnection, survey_id: i32) -> Self {
        Self {
            db,
            survey_id,
            text: format!("Question {}?", next_id()),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::question::Model)` - Created question entity
    /// - `Err(DbErr)` - Database error during insert (e.g. missing survey)
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            survey_id: ActiveValue::Set(self.survey_id),
            text: ActiveValue::Set(self.text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default text in the given survey.
pub async fn create_question(
    db: &DatabaseConnection,
    survey_id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, survey_id).build().await
}
