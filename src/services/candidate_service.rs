use crate::dto::candidate_dto::{RegisterCandidatePayload, UpdateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::application::SavedJob;
use crate::models::candidate::CandidateProfile;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, payload: RegisterCandidatePayload) -> Result<CandidateProfile> {
        let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM candidates WHERE email = $1")
            .bind(&payload.email)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::Conflict(
                "A candidate with this email address already exists".to_string(),
            ));
        }

        let candidate = sqlx::query_as::<_, CandidateProfile>(
            r#"
            INSERT INTO candidates (email, name, phone)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&payload.email)
        .bind(&payload.name)
        .bind(&payload.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(candidate)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CandidateProfile> {
        let candidate =
            sqlx::query_as::<_, CandidateProfile>("SELECT * FROM candidates WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(candidate)
    }

    pub async fn get_many(&self, ids: &[Uuid]) -> Result<Vec<CandidateProfile>> {
        let candidates =
            sqlx::query_as::<_, CandidateProfile>("SELECT * FROM candidates WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&self.pool)
                .await?;

        Ok(candidates)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateCandidatePayload) -> Result<CandidateProfile> {
        let candidate = sqlx::query_as::<_, CandidateProfile>(
            r#"
            UPDATE candidates
            SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                dob = COALESCE($4, dob),
                total_experience_years = COALESCE($5, total_experience_years),
                current_role = COALESCE($6, current_role),
                expected_role = COALESCE($7, expected_role),
                skills = COALESCE($8, skills),
                preferred_locations = COALESCE($9, preferred_locations),
                current_compensation = COALESCE($10, current_compensation),
                expected_compensation = COALESCE($11, expected_compensation),
                notice_period_days = COALESCE($12, notice_period_days),
                preferred_employment_type = COALESCE($13, preferred_employment_type),
                preferred_work_mode = COALESCE($14, preferred_work_mode),
                resume_url = COALESCE($15, resume_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name)
        .bind(payload.phone)
        .bind(payload.dob)
        .bind(payload.total_experience_years)
        .bind(payload.current_role)
        .bind(payload.expected_role)
        .bind(payload.skills.map(Json))
        .bind(payload.preferred_locations.map(Json))
        .bind(payload.current_compensation)
        .bind(payload.expected_compensation)
        .bind(payload.notice_period_days)
        .bind(payload.preferred_employment_type)
        .bind(payload.preferred_work_mode)
        .bind(payload.resume_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(candidate)
    }

    pub async fn save_job(&self, candidate_id: Uuid, job_id: Uuid) -> Result<SavedJob> {
        let saved = sqlx::query_as::<_, SavedJob>(
            r#"
            INSERT INTO saved_jobs (candidate_id, job_id)
            VALUES ($1, $2)
            ON CONFLICT (candidate_id, job_id) DO UPDATE SET job_id = EXCLUDED.job_id
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    pub async fn unsave_job(&self, candidate_id: Uuid, job_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM saved_jobs WHERE candidate_id = $1 AND job_id = $2")
            .bind(candidate_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn saved_jobs(&self, candidate_id: Uuid) -> Result<Vec<SavedJob>> {
        let saved = sqlx::query_as::<_, SavedJob>(
            "SELECT * FROM saved_jobs WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(saved)
    }
}
