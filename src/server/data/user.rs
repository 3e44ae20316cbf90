use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a user as given
    ///
    /// # Returns
    /// - `Ok(Model)` - Created user with generated id
    /// - `Err(DbErr)` - Includes unique constraint violations on `email`
    pub async fn create(&self, params: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            surname: ActiveValue::Set(params.surname),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            gender: ActiveValue::Set(params.gender),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites only the fields present in `params`
    ///
    /// # Returns
    /// - `Ok(Model)` - The merged user as stored
    /// - `Err(DbErr::RecordNotFound)` - No user with `id`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParam,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(surname) = params.surname {
            active_model.surname = ActiveValue::Set(surname);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(gender) = params.gender {
            active_model.gender = ActiveValue::Set(Some(gender));
        }

        if !active_model.is_changed() {
            return Ok(user);
        }

        active_model.update(self.db).await
    }

    /// Deletes a user together with every answer they gave
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Answer::delete_many()
            .filter(entity::answer::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
