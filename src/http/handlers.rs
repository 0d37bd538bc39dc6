use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::query::{ListParams, ListQuery};
use crate::service::{CreateFeedback, FeedbackService, ServiceError, UpdateFeedback};
use crate::store::FeedbackStore;

type Service<S> = State<Arc<FeedbackService<S>>>;

/// `GET /health`
pub(super) async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `GET /feedback?page&limit&search&category&status&sort&order`
pub(super) async fn list<S: FeedbackStore + 'static>(
    State(service): Service<S>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ServiceError> {
    let params = ListParams::from_pairs(pairs);
    let page = service.list(&ListQuery::from(params))?;
    Ok(Json(page))
}

/// `GET /feedback/:id`
pub(super) async fn get_one<S: FeedbackStore + 'static>(
    State(service): Service<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(service.get(&id)?))
}

/// `POST /feedback`
pub(super) async fn create<S: FeedbackStore + 'static>(
    State(service): Service<S>,
    Json(input): Json<CreateFeedback>,
) -> Result<impl IntoResponse, ServiceError> {
    let feedback = service.create(input)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Feedback created successfully",
            "feedback": feedback,
        })),
    ))
}

/// `PUT /feedback/:id`
pub(super) async fn update<S: FeedbackStore + 'static>(
    State(service): Service<S>,
    Path(id): Path<String>,
    Json(input): Json<UpdateFeedback>,
) -> Result<impl IntoResponse, ServiceError> {
    let feedback = service.update(&id, input)?;
    Ok(Json(json!({
        "message": "Feedback updated successfully",
        "feedback": feedback,
    })))
}

/// `DELETE /feedback/:id`
pub(super) async fn delete<S: FeedbackStore + 'static>(
    State(service): Service<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    service.delete(&id)?;
    Ok(Json(json!({ "message": "Feedback deleted successfully" })))
}

/// `GET /feedback/sub/categories`
pub(super) async fn categories<S: FeedbackStore + 'static>(
    State(service): Service<S>,
) -> impl IntoResponse {
    Json(service.categories())
}

/// `GET /feedback/sub/statuses`
pub(super) async fn statuses<S: FeedbackStore + 'static>(
    State(service): Service<S>,
) -> impl IntoResponse {
    Json(service.statuses())
}
