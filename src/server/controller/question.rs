use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        question::{CreateQuestionDto, QuestionDto, UpdateQuestionDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::question::{
            CreateQuestionParam, UpdateQuestionParam, QUESTION_DELETED, QUESTION_NOT_FOUND,
        },
        service::question::QuestionService,
        state::AppState,
    },
};

pub static QUESTION_TAG: &str = "preguntas";

#[utoipa::path(
    get,
    path = "/api/preguntas",
    tag = QUESTION_TAG,
    responses(
        (status = 200, description = "All questions", body = Vec<QuestionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_questions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let questions = QuestionService::new(&state.db).get_all().await?;

    let dto: Vec<QuestionDto> = questions.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/preguntas/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "The question", body = QuestionDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_question_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let question = QuestionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(QUESTION_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(question.into_dto())))
}

/// Add a question to an existing survey.
#[utoipa::path(
    post,
    path = "/api/preguntas",
    tag = QUESTION_TAG,
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Successfully created question", body = QuestionDto),
        (status = 400, description = "Text and survey are required", body = ErrorDto),
        (status = 404, description = "Survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateQuestionParam::try_from(payload)?;

    let question = QuestionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(question.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/preguntas/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionDto,
    responses(
        (status = 200, description = "Successfully updated question", body = QuestionDto),
        (status = 404, description = "Question or target survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_question(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let question = QuestionService::new(&state.db)
        .update(id, UpdateQuestionParam::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound(QUESTION_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(question.into_dto())))
}

/// Delete a question and its answers.
#[utoipa::path(
    delete,
    path = "/api/preguntas/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted question", body = MessageDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !QuestionService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(QUESTION_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            mensaje: QUESTION_DELETED.to_string(),
        }),
    ))
}
