use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::chat_dto::{
        ChatHistoryResponse, RecruiterMessagePayload, SendChatMessagePayload, UnreadCountResponse,
    },
    error::Result,
    models::message::{CreateChatMessage, SenderRole},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/jobs/{job_id}/messages",
    params(
        ("id" = Uuid, Path, description = "Candidate ID"),
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    request_body = SendChatMessagePayload,
    responses(
        (status = 200, description = "Message stored; bot reply included unless a recruiter must take over"),
        (status = 404, description = "Candidate or job not found")
    )
)]
#[axum::debug_handler]
pub async fn send_candidate_message(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SendChatMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.get_by_id(id).await?;
    let job = state.job_service.get_by_id(job_id).await?;

    let turn = state
        .chat_service
        .candidate_turn(&candidate, &job, payload.text, &state.ai_service)
        .await?;

    Ok(Json(turn))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/jobs/{job_id}/messages",
    params(
        ("id" = Uuid, Path, description = "Candidate ID"),
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Conversation history", body = Json<ChatHistoryResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_chat_history(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    let messages = state.chat_service.history(id, job_id).await?;
    Ok(Json(ChatHistoryResponse { messages }))
}

#[utoipa::path(
    post,
    path = "/api/integration/messages",
    request_body = RecruiterMessagePayload,
    responses(
        (status = 201, description = "Recruiter message stored"),
        (status = 404, description = "Candidate or job not found")
    )
)]
#[axum::debug_handler]
pub async fn send_recruiter_message(
    State(state): State<AppState>,
    Json(payload): Json<RecruiterMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.candidate_service.get_by_id(payload.candidate_id).await?;
    state.job_service.get_by_id(payload.job_id).await?;

    let message = state
        .chat_service
        .create(CreateChatMessage {
            candidate_id: payload.candidate_id,
            job_id: payload.job_id,
            sender_role: SenderRole::Recruiter,
            text: payload.text,
            intervention_needed: false,
        })
        .await?;

    // Taking over also clears the unread badge for this conversation.
    state
        .chat_service
        .mark_as_read(payload.candidate_id, payload.job_id)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/api/integration/messages/unread",
    responses(
        (status = 200, description = "Unread candidate message count", body = Json<UnreadCountResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_unread_count(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let unread = state.chat_service.total_unread_count().await?;
    Ok(Json(UnreadCountResponse { unread }))
}
