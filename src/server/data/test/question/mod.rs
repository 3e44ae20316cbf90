use crate::server::{
    data::question::QuestionRepository,
    model::question::{CreateQuestionParam, UpdateQuestionParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_survey_ids;
mod update;
