use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::{EmploymentType, JobPosting, JobStatus, WorkMode};
use crate::services::job_service::JobList;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub non_negotiables: Vec<String>,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub status: Option<JobStatus>,
    pub application_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub company: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub locations: Option<Vec<String>>,
    pub non_negotiables: Option<Vec<String>>,
    pub employment_type: Option<EmploymentType>,
    pub work_mode: Option<WorkMode>,
    pub status: Option<JobStatus>,
    pub application_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: uuid::Uuid,
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub locations: Vec<String>,
    pub non_negotiables: Vec<String>,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub status: JobStatus,
    pub application_deadline: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub items: Vec<JobResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

/// Trimmed posting for the public job board; recruiter-only fields such
/// as the non-negotiable list stay out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPublicSummary {
    pub id: uuid::Uuid,
    pub title: String,
    pub company: String,
    pub summary: Option<String>,
    pub required_skills: Vec<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub locations: Vec<String>,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub application_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPublicListResponse {
    pub items: Vec<JobPublicSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<JobStatus>,
    pub company: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobPublicQuery {
    pub limit: Option<i64>,
}

impl From<JobPosting> for JobResponse {
    fn from(value: JobPosting) -> Self {
        Self {
            id: value.id,
            title: value.title,
            company: value.company,
            description: value.description,
            required_skills: value.required_skills.0,
            experience_min: value.experience_min,
            experience_max: value.experience_max,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            locations: value.locations.0,
            non_negotiables: value.non_negotiables.0,
            employment_type: value.employment_type,
            work_mode: value.work_mode,
            status: value.status,
            application_deadline: value.application_deadline,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<JobPosting> for JobPublicSummary {
    fn from(value: JobPosting) -> Self {
        let summary = value.description.as_ref().map(|text| {
            let trimmed = text.trim();
            if trimmed.chars().count() > 320 {
                format!("{}…", trimmed.chars().take(320).collect::<String>())
            } else {
                trimmed.to_string()
            }
        });

        Self {
            id: value.id,
            title: value.title,
            company: value.company,
            summary,
            required_skills: value.required_skills.0,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            locations: value.locations.0,
            employment_type: value.employment_type,
            work_mode: value.work_mode,
            application_deadline: value.application_deadline,
        }
    }
}

impl From<JobList> for JobListResponse {
    fn from(value: JobList) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}
