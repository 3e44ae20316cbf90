use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::answer::{CreateAnswerParam, UpdateAnswerParam};

pub struct AnswerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnswerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::answer::Model>, DbErr> {
        entity::prelude::Answer::find()
            .order_by_asc(entity::answer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::answer::Model>, DbErr> {
        entity::prelude::Answer::find_by_id(id).one(self.db).await
    }

    /// Gets the answers given by every listed user, ordered by id
    pub async fn get_by_user_ids(
        &self,
        user_ids: Vec<i32>,
    ) -> Result<Vec<entity::answer::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Answer::find()
            .filter(entity::answer::Column::UserId.is_in(user_ids))
            .order_by_asc(entity::answer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Answer::find()
            .filter(entity::answer::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts an answer with the given recorded timestamp
    pub async fn create(
        &self,
        params: CreateAnswerParam,
        recorded_at: DateTime<Utc>,
    ) -> Result<entity::answer::Model, DbErr> {
        entity::answer::ActiveModel {
            question_id: ActiveValue::Set(params.question_id),
            user_id: ActiveValue::Set(params.user_id),
            text: ActiveValue::Set(params.text),
            recorded_at: ActiveValue::Set(recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the answer text when present in `params`
    ///
    /// # Returns
    /// - `Ok(Model)` - The merged answer as stored
    /// - `Err(DbErr::RecordNotFound)` - No answer with `id`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnswerParam,
    ) -> Result<entity::answer::Model, DbErr> {
        let answer = entity::prelude::Answer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Answer with id {} not found",
                id
            )))?;

        let Some(text) = params.text else {
            return Ok(answer);
        };

        let mut active_model: entity::answer::ActiveModel = answer.into();
        active_model.text = ActiveValue::Set(text);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Answer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
