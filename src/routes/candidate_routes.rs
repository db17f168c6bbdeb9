use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        ApplyPayload, CandidateResponse, ParseResumePayload, RegisterCandidatePayload,
        UpdateApplicationStatusPayload, UpdateCandidatePayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = RegisterCandidatePayload,
    responses(
        (status = 201, description = "Candidate registered", body = Json<CandidateResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Email already registered")
    )
)]
#[axum::debug_handler]
pub async fn register_candidate(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(CandidateResponse::from(candidate))))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate found", body = Json<CandidateResponse>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get_by_id(id).await?;
    Ok(Json(CandidateResponse::from(candidate)))
}

#[utoipa::path(
    patch,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = UpdateCandidatePayload,
    responses(
        (status = 200, description = "Profile updated", body = Json<CandidateResponse>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.update(id, payload).await?;
    Ok(Json(CandidateResponse::from(candidate)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/resume/parse",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = ParseResumePayload,
    responses(
        (status = 200, description = "Resume parsed and profile updated", body = Json<CandidateResponse>),
        (status = 404, description = "Candidate not found"),
        (status = 502, description = "Parser unavailable")
    )
)]
#[axum::debug_handler]
pub async fn parse_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ParseResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.candidate_service.get_by_id(id).await?;

    let parsed = state.ai_service.parse_resume(&payload.resume_text).await?;
    let update = UpdateCandidatePayload {
        name: parsed.name,
        phone: parsed.phone,
        total_experience_years: parsed.total_experience_years,
        current_role: parsed.current_role,
        skills: if parsed.skills.is_empty() {
            None
        } else {
            Some(parsed.skills)
        },
        preferred_locations: if parsed.preferred_locations.is_empty() {
            None
        } else {
            Some(parsed.preferred_locations)
        },
        expected_compensation: parsed.expected_compensation,
        ..UpdateCandidatePayload::default()
    };

    let candidate = state.candidate_service.update(id, update).await?;
    Ok(Json(CandidateResponse::from(candidate)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/applications",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Application recorded"),
        (status = 404, description = "Candidate or job not found")
    )
)]
#[axum::debug_handler]
pub async fn apply_for_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    state.candidate_service.get_by_id(id).await?;
    state.job_service.get_by_id(payload.job_id).await?;
    let application = state.application_service.apply(id, payload.job_id).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/applications",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate's applications")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate_applications(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.list_for_candidate(id).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    post,
    path = "/api/integration/applications/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .update_status(id, payload.status)
        .await?;
    Ok(Json(application))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/saved-jobs/{job_id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID"),
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 201, description = "Job saved"),
        (status = 404, description = "Candidate or job not found")
    )
)]
#[axum::debug_handler]
pub async fn save_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    state.candidate_service.get_by_id(id).await?;
    state.job_service.get_by_id(job_id).await?;
    let saved = state.candidate_service.save_job(id, job_id).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{id}/saved-jobs/{job_id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID"),
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job unsaved")
    )
)]
#[axum::debug_handler]
pub async fn unsave_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    state.candidate_service.unsave_job(id, job_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/saved-jobs",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate's saved jobs")
    )
)]
#[axum::debug_handler]
pub async fn get_saved_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let saved = state.candidate_service.saved_jobs(id).await?;
    Ok(Json(saved))
}
