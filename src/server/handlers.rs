//! Route handlers

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::responses::{
    ApiMessage, ContactResponse, HealthResponse, ProjectDetailResponse, ProjectListResponse,
};
use super::AppState;
use crate::catalog::{category_options, CatalogQuery, ProjectSummary};
use crate::contact::{validate, SubmissionPayload};
use crate::error::Error;

/// Query string of `GET /api/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        projects: state.catalog.len(),
    })
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProjectsParams>,
) -> Response {
    let query = CatalogQuery::from_raw(params.category.as_deref(), params.q.as_deref());
    let projects = state.catalog.query(&query);
    debug!(
        "Project query category={} search='{}' matched {}",
        query.category,
        query.search,
        projects.len()
    );

    Json(ProjectListResponse {
        category: query.category.to_string(),
        search: query.search.trim().to_string(),
        count: projects.len(),
        projects,
    })
    .into_response()
}

pub async fn get_project(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    match state.catalog.detail(&slug) {
        Ok((project, next)) => Json(ProjectDetailResponse {
            project,
            next: ProjectSummary::from(next),
        })
        .into_response(),
        Err(Error::NotFound(what)) => (
            StatusCode::NOT_FOUND,
            Json(ApiMessage::error(format!("No {what}"))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to resolve project {}: {}", slug, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiMessage::error("Failed to load project")),
            )
                .into_response()
        }
    }
}

pub async fn list_categories() -> Response {
    Json(category_options()).into_response()
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<ContactResponse>) {
    // Content type is ignored; any JSON body is judged field by field.
    let payload = match SubmissionPayload::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Contact form error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::internal_error()),
            );
        }
    };

    let submission = match validate(&payload) {
        Ok(submission) => submission,
        Err(errors) => {
            warn!("Rejected contact submission: {}", errors);
            return (StatusCode::BAD_REQUEST, Json(ContactResponse::rejected(errors)));
        }
    };

    if let Err(e) = state.delivery.deliver(&submission).await {
        error!("Failed to deliver contact submission: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::internal_error()),
        );
    }

    info!("Accepted contact submission from {}", submission.email);
    (
        StatusCode::OK,
        Json(ContactResponse::accepted(state.success_message.clone())),
    )
}
