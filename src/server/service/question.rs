use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{question::QuestionRepository, survey::SurveyRepository},
    error::AppError,
    model::{
        question::{CreateQuestionParam, Question, UpdateQuestionParam},
        survey::SURVEY_NOT_FOUND,
    },
};

pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Question>, AppError> {
        let questions = QuestionRepository::new(self.db).get_all().await?;

        Ok(questions.into_iter().map(Question::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Question>, AppError> {
        let question = QuestionRepository::new(self.db).get_by_id(id).await?;

        Ok(question.map(Question::from_entity))
    }

    /// Creates a question in an existing survey
    ///
    /// # Returns
    /// - `Ok(Question)` - Created question
    /// - `Err(AppError::NotFound)` - The survey does not exist
    pub async fn create(&self, params: CreateQuestionParam) -> Result<Question, AppError> {
        self.require_survey(params.survey_id).await?;

        let question = QuestionRepository::new(self.db).create(params).await?;

        tracing::debug!(
            "Created question {} in survey {}",
            question.id,
            question.survey_id
        );

        Ok(Question::from_entity(question))
    }

    /// Applies a partial update
    /// Returns None if the question doesn't exist
    ///
    /// Moving the question to another survey requires that survey to exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateQuestionParam,
    ) -> Result<Option<Question>, AppError> {
        let repo = QuestionRepository::new(self.db);

        if let Some(survey_id) = params.survey_id {
            self.require_survey(survey_id).await?;
        }

        let question = match repo.update(id, params).await {
            Ok(question) => question,
            Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Question::from_entity(question)))
    }

    /// Deletes a question along with its answers
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = QuestionRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted question {}", id);

        Ok(true)
    }

    async fn require_survey(&self, survey_id: i32) -> Result<(), AppError> {
        if !SurveyRepository::new(self.db).exists(survey_id).await? {
            return Err(AppError::NotFound(SURVEY_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
