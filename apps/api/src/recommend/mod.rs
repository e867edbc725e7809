// Job and course recommendation: scoring, ranking, the recommendation pipeline and its handlers.
// The external feed is only reached through crate::feed.

pub mod engine;
pub mod handlers;
pub mod ranking;
pub mod scoring;
