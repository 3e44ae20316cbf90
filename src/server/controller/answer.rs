use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        answer::{AnswerDto, CreateAnswerDto, UpdateAnswerDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::answer::{CreateAnswerParam, UpdateAnswerParam, ANSWER_DELETED, ANSWER_NOT_FOUND},
        service::answer::AnswerService,
        state::AppState,
    },
};

pub static ANSWER_TAG: &str = "respuestas";

#[utoipa::path(
    get,
    path = "/api/respuestas",
    tag = ANSWER_TAG,
    responses(
        (status = 200, description = "All answers", body = Vec<AnswerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_answers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let answers = AnswerService::new(&state.db).get_all().await?;

    let dto: Vec<AnswerDto> = answers.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/respuestas/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "The answer", body = AnswerDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answer_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let answer = AnswerService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(ANSWER_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

/// Record a user's answer to a question. The timestamp is server-assigned.
#[utoipa::path(
    post,
    path = "/api/respuestas",
    tag = ANSWER_TAG,
    request_body = CreateAnswerDto,
    responses(
        (status = 201, description = "Successfully recorded answer", body = AnswerDto),
        (status = 400, description = "Text, question and user are required", body = ErrorDto),
        (status = 404, description = "Question or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_answer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAnswerParam::try_from(payload)?;

    let answer = AnswerService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(answer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/respuestas/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    request_body = UpdateAnswerDto,
    responses(
        (status = 200, description = "Successfully updated answer", body = AnswerDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_answer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let answer = AnswerService::new(&state.db)
        .update(id, UpdateAnswerParam::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound(ANSWER_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/respuestas/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted answer", body = MessageDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_answer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !AnswerService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(ANSWER_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            mensaje: ANSWER_DELETED.to_string(),
        }),
    ))
}
