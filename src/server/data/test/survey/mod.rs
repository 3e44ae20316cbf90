use crate::server::{
    data::survey::SurveyRepository,
    model::survey::{CreateSurveyParam, UpdateSurveyParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
