//! Answer domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::answer::{AnswerDto, CreateAnswerDto, UpdateAnswerDto},
    server::{error::AppError, model::non_empty},
};

pub const ANSWER_NOT_FOUND: &str = "Respuesta no encontrada";
pub const ANSWER_DELETED: &str = "Respuesta eliminada correctamente";
pub const ANSWER_FIELDS_REQUIRED: &str =
    "El texto de la respuesta, la pregunta y el usuario son obligatorios";

/// One user's response to one question.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub id: i32,
    pub question_id: i32,
    pub user_id: i32,
    pub text: String,
    /// Server-assigned when the answer is recorded.
    pub recorded_at: DateTime<Utc>,
}

impl Answer {
    pub fn from_entity(entity: entity::answer::Model) -> Self {
        Self {
            id: entity.id,
            question_id: entity.question_id,
            user_id: entity.user_id,
            text: entity.text,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> AnswerDto {
        AnswerDto {
            id: self.id,
            question_id: self.question_id,
            user_id: self.user_id,
            text: self.text,
            recorded_at: self.recorded_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnswerParam {
    pub question_id: i32,
    pub user_id: i32,
    pub text: String,
}

impl TryFrom<CreateAnswerDto> for CreateAnswerParam {
    type Error = AppError;

    fn try_from(dto: CreateAnswerDto) -> Result<Self, Self::Error> {
        match (dto.question_id, dto.user_id, non_empty(dto.text)) {
            (Some(question_id), Some(user_id), Some(text)) => Ok(Self {
                question_id,
                user_id,
                text,
            }),
            _ => Err(AppError::BadRequest(ANSWER_FIELDS_REQUIRED.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAnswerParam {
    pub text: Option<String>,
}

impl From<UpdateAnswerDto> for UpdateAnswerParam {
    fn from(dto: UpdateAnswerDto) -> Self {
        Self { text: dto.text }
    }
}
