use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::candidate_dto::ApplicantResponse,
    dto::job_dto::{
        CreateJobPayload, JobListQuery, JobListResponse, JobPublicListResponse, JobPublicQuery,
        JobPublicSummary, JobResponse, UpdateJobPayload,
    },
    error::Result,
    matching::match_score,
    models::job::JobStatus,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/integration/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created successfully", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

#[utoipa::path(
    patch,
    path = "/api/integration/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated successfully", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    delete,
    path = "/api/integration/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job deleted successfully"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/integration/jobs",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("per_page" = Option<i64>, Query, description = "Items per page"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("company" = Option<String>, Query, description = "Filter by company"),
        ("search" = Option<String>, Query, description = "Search in title and locations")
    ),
    responses(
        (status = 200, description = "List of jobs", body = Json<JobListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let result = state.job_service.list(query).await?;
    Ok(Json(JobListResponse::from(result)))
}

#[utoipa::path(
    get,
    path = "/api/integration/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<JobResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    get,
    path = "/api/integration/jobs/{id}/applicants",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applicants with their match scores"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn list_applicants(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    let applications = state.application_service.list_for_job(id).await?;

    let ids: Vec<Uuid> = applications.iter().map(|a| a.candidate_id).collect();
    let candidates: HashMap<Uuid, _> = state
        .candidate_service
        .get_many(&ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let applicants: Vec<ApplicantResponse> = applications
        .into_iter()
        .filter_map(|application| {
            candidates.get(&application.candidate_id).map(|candidate| ApplicantResponse {
                match_score: match_score(candidate, &job),
                candidate_name: candidate.name.clone(),
                candidate_email: candidate.email.clone(),
                application,
            })
        })
        .collect();

    Ok(Json(applicants))
}

#[utoipa::path(
    get,
    path = "/api/public/jobs",
    params(
        ("limit" = Option<i64>, Query, description = "Number of items to return")
    ),
    responses(
        (status = 200, description = "Open postings", body = Json<JobPublicListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_public_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobPublicQuery>,
) -> Result<impl IntoResponse> {
    let limit = query.limit.unwrap_or(20).min(100);
    let items = state.job_service.list_public(limit).await?;
    let summaries: Vec<JobPublicSummary> = items.into_iter().map(Into::into).collect();
    Ok(Json(JobPublicListResponse { items: summaries }))
}

#[utoipa::path(
    get,
    path = "/api/public/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Open posting found", body = Json<JobPublicSummary>),
        (status = 404, description = "Job not found or not active")
    )
)]
#[axum::debug_handler]
pub async fn get_public_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    if job.status != JobStatus::Active {
        return Err(crate::error::Error::NotFound("Job not found".into()));
    }
    Ok(Json(JobPublicSummary::from(job)))
}
