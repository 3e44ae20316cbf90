//! User domain model and parameters.
//!
//! Users are survey respondents identified by a unique email. Gender is kept
//! as the free single-character code the client sends; it is not validated.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        model::{answer::Answer, non_empty},
    },
};

pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const USER_DELETED: &str = "Usuario eliminado correctamente";
pub const USER_FIELDS_REQUIRED: &str = "Nombre, apellidos y email son obligatorios";

/// Survey respondent with contact details and, when loaded, their answers.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    /// `None` when answers were not loaded, as on the create response.
    pub answers: Option<Vec<Answer>>,
}

impl User {
    /// Converts an entity model to the user domain model without answers.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
            phone: entity.phone,
            gender: entity.gender,
            answers: None,
        }
    }

    pub fn with_answers(mut self, answers: Vec<Answer>) -> Self {
        self.answers = Some(answers);
        self
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            answers: self
                .answers
                .map(|answers| answers.into_iter().map(Answer::into_dto).collect()),
        }
    }
}

/// Parameters for creating a user. Stored as given.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
}

impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = AppError;

    /// # Returns
    /// - `Ok(CreateUserParam)` - Name, surname and email all present and non-empty
    /// - `Err(AppError::BadRequest)` - Any of the three missing or empty
    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        match (
            non_empty(dto.name),
            non_empty(dto.surname),
            non_empty(dto.email),
        ) {
            (Some(name), Some(surname), Some(email)) => Ok(Self {
                name,
                surname,
                email,
                phone: dto.phone,
                gender: dto.gender,
            }),
            _ => Err(AppError::BadRequest(USER_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Partial update for a user. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            email: dto.email,
            phone: dto.phone,
            gender: dto.gender,
        }
    }
}
