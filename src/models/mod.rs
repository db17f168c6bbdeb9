pub mod application;
pub mod candidate;
pub mod job;
pub mod message;
