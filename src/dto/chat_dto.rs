use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::message::ChatMessage;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendChatMessagePayload {
    #[validate(length(min = 1))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecruiterMessagePayload {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    #[validate(length(min = 1))]
    pub text: String,
}

/// Outcome of a candidate turn: the stored message, the bot's reply when
/// the co-pilot was allowed to answer, and the two heuristic verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateTurnResponse {
    pub message: ChatMessage,
    pub bot_reply: Option<ChatMessage>,
    pub intervention_needed: bool,
    pub conversation_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}
