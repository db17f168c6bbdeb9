pub mod completeness;
pub mod intervention;
pub mod ranker;
pub mod scorer;

pub use completeness::profile_completeness;
pub use intervention::{is_conversation_complete, needs_intervention};
pub use ranker::{rank, MatchResult, RankOptions};
pub use scorer::match_score;
