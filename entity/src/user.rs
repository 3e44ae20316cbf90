use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_usuario")]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    #[sea_orm(column_name = "apellidos")]
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_name = "telefono", nullable)]
    pub phone: Option<String>,
    /// Free single-character code, conventionally `M`, `H` or `O`.
    #[sea_orm(column_name = "genero", nullable)]
    pub gender: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
