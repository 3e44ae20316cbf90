use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::answer::AnswerDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    #[serde(rename = "idUsuario")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surname: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
    /// `null` on the create response, the user's answers otherwise
    #[serde(rename = "respuestas")]
    pub answers: Option<Vec<AnswerDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateUserDto {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "apellidos", default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
}

/// Partial update; absent or `null` fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "apellidos", default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
}
