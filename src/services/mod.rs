pub mod ai_service;
pub mod application_service;
pub mod candidate_service;
pub mod chat_service;
pub mod job_service;
pub mod recommendation_service;
