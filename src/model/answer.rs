use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AnswerDto {
    #[serde(rename = "idRespuesta")]
    pub id: i32,
    #[serde(rename = "idPregunta")]
    pub question_id: i32,
    #[serde(rename = "idUsuario")]
    pub user_id: i32,
    #[serde(rename = "textoRespuesta")]
    pub text: String,
    #[serde(rename = "fechaRegistrada")]
    pub recorded_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateAnswerDto {
    #[serde(rename = "idPregunta", default)]
    pub question_id: Option<i32>,
    #[serde(rename = "idUsuario", default)]
    pub user_id: Option<i32>,
    #[serde(rename = "textoRespuesta", default)]
    pub text: Option<String>,
}

/// Only the answer text can change; the owning question and user are fixed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateAnswerDto {
    #[serde(rename = "textoRespuesta", default)]
    pub text: Option<String>,
}
