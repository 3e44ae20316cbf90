use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::survey::{CreateSurveyParam, UpdateSurveyParam};

pub struct SurveyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every survey ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::survey::Model>, DbErr> {
        entity::prelude::Survey::find()
            .order_by_asc(entity::survey::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::survey::Model>, DbErr> {
        entity::prelude::Survey::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Survey::find()
            .filter(entity::survey::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a survey with the given creation timestamp and active flag
    pub async fn create(
        &self,
        params: CreateSurveyParam,
        created_at: DateTime<Utc>,
        active: bool,
    ) -> Result<entity::survey::Model, DbErr> {
        entity::survey::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(created_at),
            active: ActiveValue::Set(active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites only the fields present in `params`
    ///
    /// # Returns
    /// - `Ok(Model)` - The merged survey as stored
    /// - `Err(DbErr::RecordNotFound)` - No survey with `id`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateSurveyParam,
    ) -> Result<entity::survey::Model, DbErr> {
        let survey = entity::prelude::Survey::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Survey with id {} not found",
                id
            )))?;

        let mut active_model: entity::survey::ActiveModel = survey.clone().into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }

        if !active_model.is_changed() {
            return Ok(survey);
        }

        active_model.update(self.db).await
    }

    /// Deletes a survey together with its questions and their answers
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let question_ids: Vec<i32> = entity::prelude::Question::find()
            .filter(entity::question::Column::SurveyId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|q| q.id)
            .collect();

        if !question_ids.is_empty() {
            entity::prelude::Answer::delete_many()
                .filter(entity::answer::Column::QuestionId.is_in(question_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Question::delete_many()
            .filter(entity::question::Column::SurveyId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Survey::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
