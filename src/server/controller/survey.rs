use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        survey::{CreateSurveyDto, SurveyDto, UpdateSurveyDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::survey::{
            CreateSurveyParam, UpdateSurveyParam, SURVEY_DELETED, SURVEY_NOT_FOUND,
        },
        service::survey::SurveyService,
        state::AppState,
    },
};

/// Tag for grouping survey endpoints in OpenAPI documentation
pub static SURVEY_TAG: &str = "encuestas";

/// List every survey with its questions.
///
/// # Returns
/// - `200 OK` - JSON array of surveys, empty when none exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/encuestas",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "All surveys", body = Vec<SurveyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_surveys(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let surveys = SurveyService::new(&state.db).get_all().await?;

    let dto: Vec<SurveyDto> = surveys.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a single survey with its questions.
///
/// # Returns
/// - `200 OK` - The survey
/// - `404 Not Found` - No survey with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/encuestas/{id}",
    tag = SURVEY_TAG,
    params(
        ("id" = i32, Path, description = "Survey ID")
    ),
    responses(
        (status = 200, description = "The survey", body = SurveyDto),
        (status = 404, description = "Survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_survey_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let survey = SurveyService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(SURVEY_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(survey.into_dto())))
}

/// Create a survey.
///
/// The creation timestamp is set to the current server time and the survey is
/// always created active, whatever the request says.
///
/// # Returns
/// - `201 Created` - The stored survey including its generated ID
/// - `400 Bad Request` - Title missing or empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/encuestas",
    tag = SURVEY_TAG,
    request_body = CreateSurveyDto,
    responses(
        (status = 201, description = "Successfully created survey", body = SurveyDto),
        (status = 400, description = "Title is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_survey(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSurveyDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSurveyParam::try_from(payload)?;

    let survey = SurveyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(survey.into_dto())))
}

/// Partially update a survey.
///
/// Only `titulo`, `descripcion` and `estatus` values present and non-null in the
/// body overwrite the stored survey.
///
/// # Returns
/// - `200 OK` - The merged survey
/// - `404 Not Found` - No survey with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/encuestas/{id}",
    tag = SURVEY_TAG,
    params(
        ("id" = i32, Path, description = "Survey ID")
    ),
    request_body = UpdateSurveyDto,
    responses(
        (status = 200, description = "Successfully updated survey", body = SurveyDto),
        (status = 404, description = "Survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_survey(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateSurveyDto>,
) -> Result<impl IntoResponse, AppError> {
    let survey = SurveyService::new(&state.db)
        .update(id, UpdateSurveyParam::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound(SURVEY_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(survey.into_dto())))
}

/// Delete a survey, its questions and their answers.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No survey with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/encuestas/{id}",
    tag = SURVEY_TAG,
    params(
        ("id" = i32, Path, description = "Survey ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted survey", body = MessageDto),
        (status = 404, description = "Survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_survey(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !SurveyService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(SURVEY_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            mensaje: SURVEY_DELETED.to_string(),
        }),
    ))
}
