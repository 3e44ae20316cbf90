use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::question::QuestionDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SurveyDto {
    #[serde(rename = "idEncuesta")]
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "estatus")]
    pub active: bool,
    /// `null` on the create response, the survey's questions otherwise
    #[serde(rename = "preguntas")]
    pub questions: Option<Vec<QuestionDto>>,
}

/// Body accepted by `POST /api/encuestas`.
///
/// `estatus` and `fechaCreacion` are server-assigned, so any value the caller
/// sends for them is ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateSurveyDto {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// Body accepted by `PUT /api/encuestas/{id}`. Absent or `null` fields keep
/// their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateSurveyDto {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "estatus", default)]
    pub active: Option<bool>,
}
