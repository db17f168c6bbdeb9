use crate::error::Result;
use crate::models::job::JobPosting;
use crate::models::message::{ChatMessage, SenderRole};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

/// How many recent turns of history ride along with a co-pilot request.
const HISTORY_WINDOW: usize = 12;

/// Profile fields the resume parser tries to pull out of raw resume text.
/// Everything is optional; absent fields simply leave the profile alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub total_experience_years: Option<f64>,
    pub current_role: Option<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    pub expected_compensation: Option<i64>,
}

#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_key: String,
}

impl AiService {
    pub fn new(api_key: String, client: Client) -> Self {
        Self { client, api_key }
    }

    /// Draft the co-pilot's next reply in a candidate conversation.
    ///
    /// Falls back to a canned reply when the provider errors so a chat
    /// never dies on an upstream hiccup. The caller decides beforehand
    /// whether the bot is allowed to answer at all (intervention check),
    /// and supplies a history that does not yet contain `latest_message`.
    pub async fn copilot_reply(
        &self,
        job: &JobPosting,
        history: &[ChatMessage],
        latest_message: &str,
    ) -> Result<String> {
        let payload = serde_json::json!({
            "model": "gpt-4o",
            "messages": conversation_messages(job, history, latest_message),
            "response_format": { "type": "json_object" },
            "temperature": 0.4
        });

        match self.chat_openai(payload).await {
            Ok(resp) => {
                if let Some(reply) = resp.get("reply").and_then(|v| v.as_str()) {
                    return Ok(reply.trim().to_string());
                }
                tracing::warn!("Co-pilot response missing 'reply' field, using fallback");
            }
            Err(e) => tracing::error!("Co-pilot reply generation failed: {:?}", e),
        }

        Ok(self.fallback_reply(job))
    }

    /// Extract structured profile fields from raw resume text.
    pub async fn parse_resume(&self, resume_text: &str) -> Result<ParsedResume> {
        let system_prompt = r#"You are a resume parser. Extract the candidate's profile from the resume text.
Return a JSON object with these fields (omit anything the resume does not state):
  name, phone, skills (array of strings), total_experience_years (number),
  current_role, preferred_locations (array of strings), expected_compensation (integer, annual).
Do not invent values."#;

        let payload = serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": resume_text}
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.0
        });

        let resp = self.chat_openai(payload).await?;
        let parsed: ParsedResume = serde_json::from_value(resp)?;
        Ok(parsed)
    }

    async fn chat_openai(&self, payload: JsonValue) -> Result<JsonValue> {
        let res = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("OpenAI API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;

        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .and_then(|s| serde_json::from_str(s).ok())
            .ok_or_else(|| anyhow::anyhow!("Invalid OpenAI response format").into())
    }

    fn fallback_reply(&self, job: &JobPosting) -> String {
        format!(
            "Thanks for your message! A recruiter from {} will get back to you about the {} role shortly.",
            job.company, job.title
        )
    }
}

/// Assembles the chat-completions message list: two system turns (role
/// instructions, posting details), the trailing window of prior history,
/// then the latest candidate message as the final user turn. `history`
/// must not already contain the latest message.
fn conversation_messages(
    job: &JobPosting,
    history: &[ChatMessage],
    latest_message: &str,
) -> Vec<JsonValue> {
    let system_prompt = format!(
        "You are a recruiting assistant chatting with a job candidate on the recruiter's behalf. \
         The conversation is about the position '{}' at {}. \
         Answer questions about the role factually based on the posting details provided. \
         Do not negotiate salary, discuss benefits, or make promises about visa sponsorship. \
         Keep replies short and friendly. \
         Return a JSON object with a single field 'reply'.",
        job.title, job.company
    );

    let mut messages = vec![
        serde_json::json!({ "role": "system", "content": system_prompt }),
        serde_json::json!({
            "role": "system",
            "content": format!(
                "Posting details: {}",
                serde_json::to_string(job).unwrap_or_default()
            )
        }),
    ];
    for turn in history.iter().rev().take(HISTORY_WINDOW).rev() {
        let role = match turn.sender_role {
            SenderRole::Candidate => "user",
            SenderRole::Recruiter | SenderRole::Bot => "assistant",
        };
        messages.push(serde_json::json!({ "role": role, "content": turn.text }));
    }
    messages.push(serde_json::json!({ "role": "user", "content": latest_message }));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{EmploymentType, JobStatus, WorkMode};
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn job() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            description: None,
            required_skills: Json(vec!["Rust".into()]),
            experience_min: None,
            experience_max: None,
            salary_min: None,
            salary_max: None,
            locations: Json(vec!["Remote".into()]),
            non_negotiables: Json(vec![]),
            employment_type: EmploymentType::FullTime,
            work_mode: WorkMode::Remote,
            status: JobStatus::Active,
            application_deadline: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn turn(role: SenderRole, text: &str) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            candidate_id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            sender_role: role,
            text: text.into(),
            intervention_needed: false,
            created_at: Utc::now(),
            read_at: None,
        }
    }

    #[test]
    fn latest_message_appears_exactly_once_in_the_prompt() {
        let history = vec![
            turn(SenderRole::Candidate, "Is the role remote?"),
            turn(SenderRole::Bot, "Yes, fully remote."),
        ];
        let messages = conversation_messages(&job(), &history, "What tech stack do you use?");

        // 2 system turns + 2 history turns + the latest message.
        assert_eq!(messages.len(), 5);
        let occurrences = messages
            .iter()
            .filter(|m| m["content"] == "What tech stack do you use?")
            .count();
        assert_eq!(occurrences, 1);
        assert_eq!(messages.last().unwrap()["role"], "user");
    }

    #[test]
    fn history_roles_map_to_chat_roles() {
        let history = vec![
            turn(SenderRole::Candidate, "hi"),
            turn(SenderRole::Recruiter, "hello"),
            turn(SenderRole::Bot, "how can I help?"),
        ];
        let messages = conversation_messages(&job(), &history, "next");
        assert_eq!(messages[2]["role"], "user");
        assert_eq!(messages[3]["role"], "assistant");
        assert_eq!(messages[4]["role"], "assistant");
    }

    #[test]
    fn history_is_capped_to_the_window() {
        let history: Vec<ChatMessage> = (0..40)
            .map(|i| turn(SenderRole::Candidate, &format!("turn {}", i)))
            .collect();
        let messages = conversation_messages(&job(), &history, "latest");
        assert_eq!(messages.len(), 2 + HISTORY_WINDOW + 1);
        // The window keeps the most recent turns.
        assert_eq!(messages[2]["content"], "turn 28");
    }
}
