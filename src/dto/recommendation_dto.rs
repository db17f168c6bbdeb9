use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::MatchResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJobsResponse {
    pub jobs: Vec<MatchResult>,
    #[serde(rename = "totalJobs")]
    pub total_jobs: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScoreResponse {
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
    pub score: i32,
}
