use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::question::{CreateQuestionParam, UpdateQuestionParam};

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::question::Model>, DbErr> {
        entity::prelude::Question::find()
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::question::Model>, DbErr> {
        entity::prelude::Question::find_by_id(id).one(self.db).await
    }

    /// Gets the questions of every listed survey, ordered by id
    pub async fn get_by_survey_ids(
        &self,
        survey_ids: Vec<i32>,
    ) -> Result<Vec<entity::question::Model>, DbErr> {
        if survey_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Question::find()
            .filter(entity::question::Column::SurveyId.is_in(survey_ids))
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Question::find()
            .filter(entity::question::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(
        &self,
        params: CreateQuestionParam,
    ) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            survey_id: ActiveValue::Set(params.survey_id),
            text: ActiveValue::Set(params.text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites only the fields present in `params`
    ///
    /// # Returns
    /// - `Ok(Model)` - The merged question as stored
    /// - `Err(DbErr::RecordNotFound)` - No question with `id`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateQuestionParam,
    ) -> Result<entity::question::Model, DbErr> {
        let question = entity::prelude::Question::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Question with id {} not found",
                id
            )))?;

        let mut active_model: entity::question::ActiveModel = question.clone().into();
        if let Some(survey_id) = params.survey_id {
            active_model.survey_id = ActiveValue::Set(survey_id);
        }
        if let Some(text) = params.text {
            active_model.text = ActiveValue::Set(text);
        }

        if !active_model.is_changed() {
            return Ok(question);
        }

        active_model.update(self.db).await
    }

    /// Deletes a question together with its answers
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Answer::delete_many()
            .filter(entity::answer::Column::QuestionId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Question::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
