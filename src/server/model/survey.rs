//! Survey domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::survey::{CreateSurveyDto, SurveyDto, UpdateSurveyDto},
    server::{
        error::AppError,
        model::{non_empty, question::Question},
    },
};

pub const SURVEY_NOT_FOUND: &str = "Encuesta no encontrada";
pub const SURVEY_DELETED: &str = "Encuesta eliminada correctamente";
pub const SURVEY_TITLE_REQUIRED: &str = "El título es obligatorio";

/// A questionnaire with its metadata and, when loaded, its questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Server-assigned when the survey is created.
    pub created_at: DateTime<Utc>,
    pub active: bool,
    /// `None` when questions were not loaded, as on the create response.
    pub questions: Option<Vec<Question>>,
}

impl Survey {
    /// Converts an entity model to the survey domain model without questions.
    pub fn from_entity(entity: entity::survey::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            active: entity.active,
            questions: None,
        }
    }

    /// Attaches the survey's questions.
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = Some(questions);
        self
    }

    pub fn into_dto(self) -> SurveyDto {
        SurveyDto {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            active: self.active,
            questions: self
                .questions
                .map(|questions| questions.into_iter().map(Question::into_dto).collect()),
        }
    }
}

/// Parameters for creating a survey.
///
/// Creation timestamp and active flag are not part of the input; the service
/// assigns them.
#[derive(Debug, Clone)]
pub struct CreateSurveyParam {
    pub title: String,
    pub description: Option<String>,
}

impl TryFrom<CreateSurveyDto> for CreateSurveyParam {
    type Error = AppError;

    /// # Returns
    /// - `Ok(CreateSurveyParam)` - Title present and non-empty
    /// - `Err(AppError::BadRequest)` - Title missing or empty
    fn try_from(dto: CreateSurveyDto) -> Result<Self, Self::Error> {
        let title = non_empty(dto.title)
            .ok_or_else(|| AppError::BadRequest(SURVEY_TITLE_REQUIRED.to_string()))?;

        Ok(Self {
            title,
            description: dto.description,
        })
    }
}

/// Partial update for a survey. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSurveyParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl From<UpdateSurveyDto> for UpdateSurveyParam {
    fn from(dto: UpdateSurveyDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            active: dto.active,
        }
    }
}
