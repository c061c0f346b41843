use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ActivityDirectory;
use crate::services::activities_service::{self, MessageView};
use crate::web::router::AppState;

/// Raw query pairs; a repeated `email` resolves to its last value.
type EmailQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn unprocessable(detail: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "detail": detail })),
    )
        .into_response()
}

fn require_email(query: EmailQuery) -> Result<String, Response> {
    let Query(pairs) = query.map_err(|e| unprocessable(e.body_text()))?;

    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| unprocessable("Query parameter `email` is required".to_string()))
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(state.activities.as_ref()).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: EmailQuery,
) -> Result<Json<MessageView>, Response> {
    let email = require_email(query)?;
    activities_service::sign_up(state.activities.as_ref(), &activity_name, &email)
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: EmailQuery,
) -> Result<Json<MessageView>, Response> {
    let email = require_email(query)?;
    activities_service::unregister(state.activities.as_ref(), &activity_name, &email)
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}
