use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::{EmploymentType, WorkMode};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub total_experience_years: Option<f64>,
    pub current_role: Option<String>,
    pub expected_role: Option<String>,
    pub skills: Json<Vec<String>>,
    pub preferred_locations: Json<Vec<String>>,
    pub current_compensation: Option<i64>,
    pub expected_compensation: Option<i64>,
    pub notice_period_days: Option<i32>,
    pub preferred_employment_type: Option<EmploymentType>,
    pub preferred_work_mode: Option<WorkMode>,
    pub resume_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
