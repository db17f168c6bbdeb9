use uuid::Uuid;

use crate::config::get_config;
use crate::error::Result;
use crate::matching::{match_score, rank, MatchResult, RankOptions};
use crate::services::candidate_service::CandidateService;
use crate::services::job_service::JobService;

/// Glue between the persistence layer and the pure ranking core: loads the
/// candidate and the open postings, ranks, and reports how many postings
/// were considered. Nothing is cached; every call recomputes from scratch.
#[derive(Clone)]
pub struct RecommendationService {
    candidate_service: CandidateService,
    job_service: JobService,
}

pub struct Recommendations {
    pub jobs: Vec<MatchResult>,
    pub total_jobs: i64,
}

impl RecommendationService {
    pub fn new(candidate_service: CandidateService, job_service: JobService) -> Self {
        Self {
            candidate_service,
            job_service,
        }
    }

    fn rank_options() -> RankOptions {
        let config = get_config();
        RankOptions {
            min_score: config.recommendation_min_score,
            limit: config.recommendation_limit,
        }
    }

    pub async fn recommended_jobs(&self, candidate_id: Uuid) -> Result<Recommendations> {
        let candidate = self.candidate_service.get_by_id(candidate_id).await?;
        let open_jobs = self.job_service.list_open().await?;
        let total_jobs = open_jobs.len() as i64;

        let jobs = rank(&candidate, &open_jobs, Self::rank_options());
        tracing::debug!(
            candidate_id = %candidate_id,
            considered = total_jobs,
            returned = jobs.len(),
            "ranked open postings"
        );

        Ok(Recommendations { jobs, total_jobs })
    }

    pub async fn pair_score(&self, candidate_id: Uuid, job_id: Uuid) -> Result<MatchResult> {
        let candidate = self.candidate_service.get_by_id(candidate_id).await?;
        let job = self.job_service.get_by_id(job_id).await?;

        Ok(MatchResult {
            job_id: job.id,
            score: match_score(&candidate, &job),
        })
    }
}
