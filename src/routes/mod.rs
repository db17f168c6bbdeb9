pub mod candidate_routes;
pub mod chat;
pub mod health;
pub mod job;
pub mod recommendation;
