use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::chat_dto::CandidateTurnResponse;
use crate::error::Result;
use crate::matching::{is_conversation_complete, needs_intervention};
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::models::message::{ChatMessage, CreateChatMessage, SenderRole};
use crate::services::ai_service::AiService;

#[derive(Clone)]
pub struct ChatService {
    pool: PgPool,
}

impl ChatService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, msg: CreateChatMessage) -> Result<ChatMessage> {
        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO messages (candidate_id, job_id, sender_role, text, intervention_needed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(msg.candidate_id)
        .bind(msg.job_id)
        .bind(msg.sender_role)
        .bind(&msg.text)
        .bind(msg.intervention_needed)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// A full candidate turn: store the message, run the intervention
    /// heuristic against the posting's non-negotiables, and only when the
    /// conversation stays in bot territory ask the co-pilot for a reply.
    pub async fn candidate_turn(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
        text: String,
        ai: &AiService,
    ) -> Result<CandidateTurnResponse> {
        let intervention_needed = needs_intervention(&text, &job.non_negotiables);

        // History is snapshotted before the insert; the new turn enters
        // the co-pilot prompt exactly once, as the latest message.
        let history = self.history(candidate.id, job.id).await?;

        let message = self
            .create(CreateChatMessage {
                candidate_id: candidate.id,
                job_id: job.id,
                sender_role: SenderRole::Candidate,
                text: text.clone(),
                intervention_needed,
            })
            .await?;

        if intervention_needed {
            tracing::info!(
                candidate_id = %candidate.id,
                job_id = %job.id,
                "conversation flagged for recruiter takeover"
            );
            return Ok(CandidateTurnResponse {
                message,
                bot_reply: None,
                intervention_needed: true,
                conversation_complete: false,
            });
        }

        let reply_text = ai.copilot_reply(job, &history, &text).await?;
        let conversation_complete = is_conversation_complete(&text, &reply_text);

        let bot_reply = self
            .create(CreateChatMessage {
                candidate_id: candidate.id,
                job_id: job.id,
                sender_role: SenderRole::Bot,
                text: reply_text,
                intervention_needed: false,
            })
            .await?;

        Ok(CandidateTurnResponse {
            message,
            bot_reply: Some(bot_reply),
            intervention_needed: false,
            conversation_complete,
        })
    }

    pub async fn history(&self, candidate_id: Uuid, job_id: Uuid) -> Result<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT * FROM messages
            WHERE candidate_id = $1 AND job_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(candidate_id)
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn mark_as_read(&self, candidate_id: Uuid, job_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET read_at = NOW()
            WHERE candidate_id = $1 AND job_id = $2
              AND sender_role = 'CANDIDATE' AND read_at IS NULL
            "#,
        )
        .bind(candidate_id)
        .bind(job_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Unread candidate messages across every conversation, for the
    /// recruiter dashboard badge.
    pub async fn total_unread_count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM messages
            WHERE sender_role = 'CANDIDATE' AND read_at IS NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
