use crate::error::{Error, Result};
use crate::models::application::{ApplicationStatus, JobApplication};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotent: re-applying to the same job returns the existing row
    /// instead of erroring.
    pub async fn apply(&self, candidate_id: Uuid, job_id: Uuid) -> Result<JobApplication> {
        let application = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO applications (candidate_id, job_id)
            VALUES ($1, $2)
            ON CONFLICT (candidate_id, job_id) DO UPDATE SET job_id = EXCLUDED.job_id
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM applications WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    pub async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM applications WHERE job_id = $1 ORDER BY created_at DESC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication> {
        let application = sqlx::query_as::<_, JobApplication>(
            "UPDATE applications SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;

        Ok(application)
    }
}
