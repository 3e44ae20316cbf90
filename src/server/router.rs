use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{answer, question, survey, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Encuestas API",
    description = "CRUD API for surveys, questions, answers and users"
))]
struct ApiDoc;

/// Builds the API router with OpenAPI docs served at `/api/docs`.
///
/// Cross-origin requests are accepted from any origin.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(survey::get_all_surveys, survey::create_survey))
        .routes(routes!(
            survey::get_survey_by_id,
            survey::update_survey,
            survey::delete_survey
        ))
        .routes(routes!(user::get_all_users, user::create_user))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(question::get_all_questions, question::create_question))
        .routes(routes!(
            question::get_question_by_id,
            question::update_question,
            question::delete_question
        ))
        .routes(routes!(answer::get_all_answers, answer::create_answer))
        .routes(routes!(
            answer::get_answer_by_id,
            answer::update_answer,
            answer::delete_answer
        ))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
