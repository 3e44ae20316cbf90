//! Factory for creating survey entities in tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating survey entities with customizable fields.
pub struct SurveyFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    active: bool,
}

impl<'a> SurveyFactory<'a> {
    /// Creates a new SurveyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Survey {id}"` where id is auto-incremented
    /// - description: `"Description for survey {id}"`
    /// - created_at: now
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Survey {}", id),
            description: Some(format!("Description for survey {}", id)),
            created_at: Utc::now(),
            active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the survey entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::survey::Model)` - Created survey entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::survey::Model, DbErr> {
        entity::survey::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a survey with default values.
///
/// Shorthand for `SurveyFactory::new(db).build().await`.
pub async fn create_survey(db: &DatabaseConnection) -> Result<entity::survey::Model, DbErr> {
    SurveyFactory::new(db).build().await
}
