//! Question domain model and parameters.

use crate::{
    model::question::{CreateQuestionDto, QuestionDto, UpdateQuestionDto},
    server::{error::AppError, model::non_empty},
};

pub const QUESTION_NOT_FOUND: &str = "Pregunta no encontrada";
pub const QUESTION_DELETED: &str = "Pregunta eliminada correctamente";
pub const QUESTION_FIELDS_REQUIRED: &str =
    "El texto de la pregunta y la encuesta son obligatorios";

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub survey_id: i32,
    pub text: String,
}

impl Question {
    pub fn from_entity(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            survey_id: entity.survey_id,
            text: entity.text,
        }
    }

    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            survey_id: self.survey_id,
            text: self.text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateQuestionParam {
    pub survey_id: i32,
    pub text: String,
}

impl TryFrom<CreateQuestionDto> for CreateQuestionParam {
    type Error = AppError;

    fn try_from(dto: CreateQuestionDto) -> Result<Self, Self::Error> {
        match (dto.survey_id, non_empty(dto.text)) {
            (Some(survey_id), Some(text)) => Ok(Self { survey_id, text }),
            _ => Err(AppError::BadRequest(QUESTION_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Partial update for a question. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateQuestionParam {
    pub survey_id: Option<i32>,
    pub text: Option<String>,
}

impl From<UpdateQuestionDto> for UpdateQuestionParam {
    fn from(dto: UpdateQuestionDto) -> Self {
        Self {
            survey_id: dto.survey_id,
            text: dto.text,
        }
    }
}
