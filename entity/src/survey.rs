use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "encuestas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_encuesta")]
    pub id: i32,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "descripcion", column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "estatus")]
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question::Entity")]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
