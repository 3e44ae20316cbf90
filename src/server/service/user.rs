use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;

use crate::server::{
    data::{answer::AnswerRepository, user::UserRepository},
    error::AppError,
    model::{
        answer::Answer,
        user::{CreateUserParam, UpdateUserParam, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users, each with their answers
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        let user_ids = users.iter().map(|u| u.id).collect();
        let mut answers_by_user: HashMap<i32, Vec<Answer>> = HashMap::new();
        for answer in AnswerRepository::new(self.db)
            .get_by_user_ids(user_ids)
            .await?
        {
            answers_by_user
                .entry(answer.user_id)
                .or_default()
                .push(Answer::from_entity(answer));
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let answers = answers_by_user.remove(&user.id).unwrap_or_default();
                User::from_entity(user).with_answers(answers)
            })
            .collect())
    }

    /// Gets a user by ID with their answers
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let Some(user) = UserRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load_answers(user).await?))
    }

    /// Creates a user as given
    ///
    /// A duplicate email is rejected by the store and surfaces as `AppError::DbErr`.
    pub async fn create(&self, params: CreateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).create(params).await?;

        tracing::info!("Created user {}", user.id);

        Ok(User::from_entity(user))
    }

    /// Applies a partial update
    /// Returns None if the user doesn't exist
    pub async fn update(&self, id: i32, params: UpdateUserParam) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let user = match repo.update(id, params).await {
            Ok(user) => user,
            Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(self.load_answers(user).await?))
    }

    /// Deletes a user along with their answers
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted user {}", id);

        Ok(true)
    }

    async fn load_answers(&self, user: entity::user::Model) -> Result<User, AppError> {
        let answers = AnswerRepository::new(self.db)
            .get_by_user_ids(vec![user.id])
            .await?
            .into_iter()
            .map(Answer::from_entity)
            .collect();

        Ok(User::from_entity(user).with_answers(answers))
    }
}
