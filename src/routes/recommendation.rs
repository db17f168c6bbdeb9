use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::recommendation_dto::{MatchScoreResponse, RecommendedJobsResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/recommended-jobs",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Ranked job recommendations", body = Json<RecommendedJobsResponse>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn recommended_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let recommendations = state.recommendation_service.recommended_jobs(id).await?;
    Ok(Json(RecommendedJobsResponse {
        jobs: recommendations.jobs,
        total_jobs: recommendations.total_jobs,
    }))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/match/{job_id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID"),
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Match score for the pair", body = Json<MatchScoreResponse>),
        (status = 404, description = "Candidate or job not found")
    )
)]
#[axum::debug_handler]
pub async fn match_for_pair(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    let result = state.recommendation_service.pair_score(id, job_id).await?;
    Ok(Json(MatchScoreResponse {
        job_id: result.job_id,
        score: result.score,
    }))
}
