use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuestionDto {
    #[serde(rename = "idPregunta")]
    pub id: i32,
    #[serde(rename = "idEncuesta")]
    pub survey_id: i32,
    #[serde(rename = "textPregunta")]
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(rename = "idEncuesta", default)]
    pub survey_id: Option<i32>,
    #[serde(rename = "textPregunta", default)]
    pub text: Option<String>,
}

/// Partial update; a new `idEncuesta` moves the question to another survey.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateQuestionDto {
    #[serde(rename = "idEncuesta", default)]
    pub survey_id: Option<i32>,
    #[serde(rename = "textPregunta", default)]
    pub text: Option<String>,
}
