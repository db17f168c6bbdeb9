use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "sender_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderRole {
    Candidate,
    Recruiter,
    Bot,
}

/// One turn of a candidate/job conversation. `intervention_needed` is set
/// on candidate messages the co-pilot must not answer on its own.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub sender_role: SenderRole,
    pub text: String,
    pub intervention_needed: bool,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateChatMessage {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub sender_role: SenderRole,
    pub text: String,
    pub intervention_needed: bool,
}
