use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::matching::profile_completeness;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::candidate::CandidateProfile;
use crate::models::job::{EmploymentType, WorkMode};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterCandidatePayload {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCandidatePayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub total_experience_years: Option<f64>,
    pub current_role: Option<String>,
    pub expected_role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub preferred_locations: Option<Vec<String>>,
    pub current_compensation: Option<i64>,
    pub expected_compensation: Option<i64>,
    pub notice_period_days: Option<i32>,
    pub preferred_employment_type: Option<EmploymentType>,
    pub preferred_work_mode: Option<WorkMode>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub id: uuid::Uuid,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub total_experience_years: Option<f64>,
    pub current_role: Option<String>,
    pub expected_role: Option<String>,
    pub skills: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub current_compensation: Option<i64>,
    pub expected_compensation: Option<i64>,
    pub notice_period_days: Option<i32>,
    pub preferred_employment_type: Option<EmploymentType>,
    pub preferred_work_mode: Option<WorkMode>,
    pub resume_url: Option<String>,
    pub profile_completeness: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CandidateProfile> for CandidateResponse {
    fn from(value: CandidateProfile) -> Self {
        let profile_completeness = profile_completeness(&value);
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            dob: value.dob,
            total_experience_years: value.total_experience_years,
            current_role: value.current_role,
            expected_role: value.expected_role,
            skills: value.skills.0,
            preferred_locations: value.preferred_locations.0,
            current_compensation: value.current_compensation,
            expected_compensation: value.expected_compensation,
            notice_period_days: value.notice_period_days,
            preferred_employment_type: value.preferred_employment_type,
            preferred_work_mode: value.preferred_work_mode,
            resume_url: value.resume_url,
            profile_completeness,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParseResumePayload {
    #[validate(length(min = 1))]
    pub resume_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyPayload {
    pub job_id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusPayload {
    pub status: ApplicationStatus,
}

/// One applicant row on the recruiter side, scored with the real match
/// scorer rather than a placeholder number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantResponse {
    pub application: JobApplication,
    pub candidate_name: Option<String>,
    pub candidate_email: String,
    pub match_score: i32,
}
