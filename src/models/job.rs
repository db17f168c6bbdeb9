use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "employment_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "work_mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkMode {
    Onsite,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "job_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Draft,
    Active,
    Paused,
    Closed,
}

/// A job posting. `required_skills` and `locations` are JSONB arrays in the
/// database; `Json<Vec<String>>` is the single decode boundary for both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    pub required_skills: Json<Vec<String>>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub locations: Json<Vec<String>>,
    /// Hard requirements the co-pilot may not negotiate away; feeds the
    /// chat intervention heuristic.
    pub non_negotiables: Json<Vec<String>>,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub status: JobStatus,
    pub application_deadline: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobPosting {
    /// A remote or hybrid posting stays workable for a candidate whose
    /// preferred locations do not overlap the posting's.
    pub fn is_remote_friendly(&self) -> bool {
        matches!(self.work_mode, WorkMode::Remote | WorkMode::Hybrid)
    }
}
