pub mod candidate_dto;
pub mod chat_dto;
pub mod job_dto;
pub mod recommendation_dto;
