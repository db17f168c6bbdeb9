use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::scorer::match_score;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

/// Default cut-off: results scoring 20 or below are treated as noise.
pub const DEFAULT_MIN_SCORE: i32 = 20;
/// Default cap on how many recommendations a single request returns.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
    pub score: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    /// Strictly-greater-than threshold: a score equal to `min_score` is
    /// excluded.
    pub min_score: i32,
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Scores every posting for the candidate, drops everything at or below
/// the threshold, sorts descending and truncates to the cap.
///
/// The caller supplies only postings eligible for recommendation (ACTIVE,
/// deadline absent or in the future); that filter belongs to the job
/// repository, not here. The sort is stable, so equal scores keep their
/// input order and identical inputs always produce identical rankings.
pub fn rank(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    options: RankOptions,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = jobs
        .iter()
        .map(|job| MatchResult {
            job_id: job.id,
            score: match_score(candidate, job),
        })
        .filter(|result| result.score > options.min_score)
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(options.limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{EmploymentType, JobStatus, WorkMode};
    use sqlx::types::Json;

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            name: None,
            email: "bob@example.com".into(),
            phone: None,
            dob: None,
            total_experience_years: Some(5.0),
            current_role: None,
            expected_role: None,
            skills: Json(vec!["Rust".into(), "Postgres".into()]),
            preferred_locations: Json(vec!["Remote".into()]),
            current_compensation: None,
            expected_compensation: Some(100_000),
            notice_period_days: None,
            preferred_employment_type: Some(EmploymentType::FullTime),
            preferred_work_mode: None,
            resume_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn job_with_skills(skills: Vec<&str>) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            description: None,
            required_skills: Json(skills.into_iter().map(String::from).collect()),
            experience_min: Some(3.0),
            experience_max: Some(8.0),
            salary_min: Some(90_000),
            salary_max: Some(130_000),
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

    fn unrelated_job() -> JobPosting {
        let mut job = job_with_skills(vec!["Cobol", "Fortran", "Ada", "Pascal"]);
        job.experience_min = Some(20.0);
        job.experience_max = Some(30.0);
        job.salary_min = Some(10_000);
        job.salary_max = Some(12_000);
        job.locations = Json(vec!["Antarctica".into()]);
        job.work_mode = WorkMode::Onsite;
        job.employment_type = EmploymentType::Internship;
        job
    }

    #[test]
    fn empty_job_list_yields_empty_ranking() {
        assert!(rank(&candidate(), &[], RankOptions::default()).is_empty());
    }

    #[test]
    fn results_are_sorted_descending() {
        let jobs = vec![
            unrelated_job(),
            job_with_skills(vec!["Rust"]),
            job_with_skills(vec!["Rust", "Postgres"]),
        ];
        let ranked = rank(&candidate(), &jobs, RankOptions::default());
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(ranked.first().map(|r| r.job_id), Some(jobs[2].id));
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let jobs = vec![unrelated_job()];
        // The unrelated job still lands a score (employment mismatch,
        // everything else off), which must stay below the cut.
        let ranked = rank(&candidate(), &jobs, RankOptions::default());
        assert!(ranked.iter().all(|r| r.score > DEFAULT_MIN_SCORE));

        // With the threshold disabled the same job comes back.
        let all = rank(
            &candidate(),
            &jobs,
            RankOptions {
                min_score: -1,
                limit: 10,
            },
        );
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn cap_limits_result_count() {
        let jobs: Vec<JobPosting> = (0..25).map(|_| job_with_skills(vec!["Rust"])).collect();
        let ranked = rank(&candidate(), &jobs, RankOptions::default());
        assert_eq!(ranked.len(), DEFAULT_LIMIT);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let jobs: Vec<JobPosting> = (0..5).map(|_| job_with_skills(vec!["Rust"])).collect();
        let ranked = rank(&candidate(), &jobs, RankOptions::default());
        let expected: Vec<Uuid> = jobs.iter().take(ranked.len()).map(|j| j.id).collect();
        let actual: Vec<Uuid> = ranked.iter().map(|r| r.job_id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn options_override_policy_defaults() {
        let jobs: Vec<JobPosting> = (0..8).map(|_| job_with_skills(vec!["Rust"])).collect();
        let ranked = rank(
            &candidate(),
            &jobs,
            RankOptions {
                min_score: 20,
                limit: 3,
            },
        );
        assert_eq!(ranked.len(), 3);
    }
}
