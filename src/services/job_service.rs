use crate::dto::job_dto::{CreateJobPayload, JobListQuery, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::{JobPosting, JobStatus};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Upper bound on how many open postings are loaded per ranking request.
const OPEN_JOBS_FETCH_LIMIT: i64 = 500;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

pub struct JobList {
    pub items: Vec<JobPosting>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<JobPosting> {
        check_range("experience", payload.experience_min, payload.experience_max)?;
        check_range(
            "salary",
            payload.salary_min.map(|v| v as f64),
            payload.salary_max.map(|v| v as f64),
        )?;

        let status = payload.status.unwrap_or(JobStatus::Draft);
        let job = sqlx::query_as::<_, JobPosting>(
            r#"
            INSERT INTO jobs (
                title, company, description, required_skills,
                experience_min, experience_max, salary_min, salary_max,
                locations, non_negotiables, employment_type, work_mode,
                status, application_deadline
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.company)
        .bind(&payload.description)
        .bind(Json(&payload.required_skills))
        .bind(payload.experience_min)
        .bind(payload.experience_max)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .bind(Json(&payload.locations))
        .bind(Json(&payload.non_negotiables))
        .bind(payload.employment_type)
        .bind(payload.work_mode)
        .bind(status)
        .bind(payload.application_deadline)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<JobPosting> {
        let current = self.get_by_id(id).await?;

        check_range(
            "experience",
            payload.experience_min.or(current.experience_min),
            payload.experience_max.or(current.experience_max),
        )?;
        check_range(
            "salary",
            payload.salary_min.or(current.salary_min).map(|v| v as f64),
            payload.salary_max.or(current.salary_max).map(|v| v as f64),
        )?;

        let job = sqlx::query_as::<_, JobPosting>(
            r#"
            UPDATE jobs
            SET
                title = COALESCE($2, title),
                company = COALESCE($3, company),
                description = COALESCE($4, description),
                required_skills = COALESCE($5, required_skills),
                experience_min = COALESCE($6, experience_min),
                experience_max = COALESCE($7, experience_max),
                salary_min = COALESCE($8, salary_min),
                salary_max = COALESCE($9, salary_max),
                locations = COALESCE($10, locations),
                non_negotiables = COALESCE($11, non_negotiables),
                employment_type = COALESCE($12, employment_type),
                work_mode = COALESCE($13, work_mode),
                status = COALESCE($14, status),
                application_deadline = COALESCE($15, application_deadline),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.title)
        .bind(payload.company)
        .bind(payload.description)
        .bind(payload.required_skills.map(Json))
        .bind(payload.experience_min)
        .bind(payload.experience_max)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .bind(payload.locations.map(Json))
        .bind(payload.non_negotiables.map(Json))
        .bind(payload.employment_type)
        .bind(payload.work_mode)
        .bind(payload.status)
        .bind(payload.application_deadline)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn list(&self, query: JobListQuery) -> Result<JobList> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;

        let items = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT * FROM jobs
            WHERE ($1::job_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR company ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%' OR locations::text ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(query.status)
        .bind(&query.company)
        .bind(&query.search)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM jobs
            WHERE ($1::job_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR company ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%' OR locations::text ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(query.status)
        .bind(&query.company)
        .bind(&query.search)
        .fetch_one(&self.pool)
        .await?;

        let total_pages = ((total as f64) / (per_page as f64)).ceil() as i64;

        Ok(JobList {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<JobPosting> {
        let job = sqlx::query_as::<_, JobPosting>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(job)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    /// Postings eligible for ranking: ACTIVE with an absent or future
    /// deadline. Eligibility lives here so the ranker never has to know
    /// about statuses or deadlines.
    pub async fn list_open(&self) -> Result<Vec<JobPosting>> {
        let items = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT * FROM jobs
            WHERE status = 'ACTIVE'
              AND (application_deadline IS NULL OR application_deadline > NOW())
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(OPEN_JOBS_FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list_public(&self, limit: i64) -> Result<Vec<JobPosting>> {
        let limit = if limit <= 0 { 20 } else { limit.min(100) };
        let items = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT * FROM jobs
            WHERE status = 'ACTIVE'
              AND (application_deadline IS NULL OR application_deadline > NOW())
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}

fn check_range(what: &str, min: Option<f64>, max: Option<f64>) -> Result<()> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo < 0.0 || hi < 0.0 {
            return Err(Error::BadRequest(format!("{} bounds must be non-negative", what)));
        }
        if lo > hi {
            return Err(Error::BadRequest(format!(
                "{} minimum must not exceed maximum",
                what
            )));
        }
    }
    Ok(())
}
