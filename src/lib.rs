//! Aggregate statistics over a fixed log of hobby sessions: totals,
//! unique hobbies, long sessions, mood counts, averages, sorts and
//! per-session enrichment.

pub mod session_resources;

pub use session_resources::analytics::{
    average_time_per_hobby, count_mood, hobby_total, long_sessions, mood_counts, session_count,
    sessions_on_day, sort_by_day, sort_by_minutes_desc, total_time, unique_hobbies,
};
pub use session_resources::enrichment::{enrich, DerivedValue, EnrichedSession, Enrichment};
pub use session_resources::exceptions::AnalyticsExceptions;
pub use session_resources::session::{Day, Session};
