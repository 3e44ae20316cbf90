use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{answer::AnswerRepository, question::QuestionRepository, user::UserRepository},
    error::AppError,
    model::{
        answer::{Answer, CreateAnswerParam, UpdateAnswerParam},
        question::QUESTION_NOT_FOUND,
        user::USER_NOT_FOUND,
    },
};

pub struct AnswerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnswerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Answer>, AppError> {
        let answers = AnswerRepository::new(self.db).get_all().await?;

        Ok(answers.into_iter().map(Answer::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Answer>, AppError> {
        let answer = AnswerRepository::new(self.db).get_by_id(id).await?;

        Ok(answer.map(Answer::from_entity))
    }

    /// Records an answer stamped with the current time
    ///
    /// # Returns
    /// - `Ok(Answer)` - Created answer
    /// - `Err(AppError::NotFound)` - The question or the user does not exist
    pub async fn create(&self, params: CreateAnswerParam) -> Result<Answer, AppError> {
        if !QuestionRepository::new(self.db)
            .exists(params.question_id)
            .await?
        {
            return Err(AppError::NotFound(QUESTION_NOT_FOUND.to_string()));
        }

        if !UserRepository::new(self.db).exists(params.user_id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let answer = AnswerRepository::new(self.db)
            .create(params, Utc::now())
            .await?;

        tracing::debug!(
            "User {} answered question {}",
            answer.user_id,
            answer.question_id
        );

        Ok(Answer::from_entity(answer))
    }

    /// Applies a partial update
    /// Returns None if the answer doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnswerParam,
    ) -> Result<Option<Answer>, AppError> {
        let repo = AnswerRepository::new(self.db);

        let answer = match repo.update(id, params).await {
            Ok(answer) => answer,
            Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Answer::from_entity(answer)))
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AnswerRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
