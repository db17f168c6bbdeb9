pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod matching;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    ai_service::AiService, application_service::ApplicationService,
    candidate_service::CandidateService, chat_service::ChatService, job_service::JobService,
    recommendation_service::RecommendationService,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub application_service: ApplicationService,
    pub recommendation_service: RecommendationService,
    pub chat_service: ChatService,
    pub ai_service: AiService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let job_service = JobService::new(pool.clone());
        let candidate_service = CandidateService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let recommendation_service =
            RecommendationService::new(candidate_service.clone(), job_service.clone());
        let chat_service = ChatService::new(pool.clone());
        let ai_service = AiService::new(config.openai_api_key.clone(), http_client);

        Self {
            pool,
            job_service,
            candidate_service,
            application_service,
            recommendation_service,
            chat_service,
            ai_service,
        }
    }
}
