use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::server::error::AppError;


/// Renders a handler result the way Axum would and decodes its JSON body.
async fn respond<T: IntoResponse>(result: Result<T, AppError>) -> (StatusCode, Value) {
    let response: Response = match result {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    };

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
