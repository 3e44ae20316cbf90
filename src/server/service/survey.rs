use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;

use crate::server::{
    data::{question::QuestionRepository, survey::SurveyRepository},
    error::AppError,
    model::{
        question::Question,
        survey::{CreateSurveyParam, Survey, UpdateSurveyParam},
    },
};

pub struct SurveyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all surveys, each with its questions
    pub async fn get_all(&self) -> Result<Vec<Survey>, AppError> {
        let surveys = SurveyRepository::new(self.db).get_all().await?;

        let survey_ids = surveys.iter().map(|s| s.id).collect();
        let mut questions_by_survey: HashMap<i32, Vec<Question>> = HashMap::new();
        for question in QuestionRepository::new(self.db)
            .get_by_survey_ids(survey_ids)
            .await?
        {
            questions_by_survey
                .entry(question.survey_id)
                .or_default()
                .push(Question::from_entity(question));
        }

        Ok(surveys
            .into_iter()
            .map(|survey| {
                let questions = questions_by_survey.remove(&survey.id).unwrap_or_default();
                Survey::from_entity(survey).with_questions(questions)
            })
            .collect())
    }

    /// Gets a survey by ID with its questions
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Survey>, AppError> {
        let Some(survey) = SurveyRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load_questions(survey).await?))
    }

    /// Creates a survey stamped with the current time and marked active
    ///
    /// The returned survey has no questions loaded.
    pub async fn create(&self, params: CreateSurveyParam) -> Result<Survey, AppError> {
        let survey = SurveyRepository::new(self.db)
            .create(params, Utc::now(), true)
            .await?;

        tracing::info!("Created survey {} \"{}\"", survey.id, survey.title);

        Ok(Survey::from_entity(survey))
    }

    /// Applies a partial update
    /// Returns None if the survey doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateSurveyParam,
    ) -> Result<Option<Survey>, AppError> {
        let repo = SurveyRepository::new(self.db);

        let survey = match repo.update(id, params).await {
            Ok(survey) => survey,
            Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(self.load_questions(survey).await?))
    }

    /// Deletes a survey along with its questions and their answers
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SurveyRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted survey {}", id);

        Ok(true)
    }

    async fn load_questions(&self, survey: entity::survey::Model) -> Result<Survey, AppError> {
        let questions = QuestionRepository::new(self.db)
            .get_by_survey_ids(vec![survey.id])
            .await?
            .into_iter()
            .map(Question::from_entity)
            .collect();

        Ok(Survey::from_entity(survey).with_questions(questions))
    }
}
