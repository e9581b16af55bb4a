use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::session_resources::exceptions::AnalyticsExceptions;
use crate::session_resources::session::{Day, Session};

//
// Core aggregations
//

/// Sum of minutes across every session. Zero for an empty log.
pub fn total_time(log: &[Session]) -> u64 {
    log.iter().map(|session| u64::from(session.minutes)).sum()
}

/// Hobby names with duplicates removed, in order of first appearance.
pub fn unique_hobbies(log: &[Session]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut hobbies = Vec::new();

    for session in log {
        if seen.insert(session.hobby.as_str()) {
            hobbies.push(session.hobby.clone());
        }
    }

    hobbies
}

/// Sessions strictly longer than `threshold` minutes, in their original order.
pub fn long_sessions(log: &[Session], threshold: i64) -> Vec<Session> {
    log.iter()
        .filter(|session| i64::from(session.minutes) > threshold)
        .cloned()
        .collect()
}

/// Number of sessions whose mood matches `mood` exactly (case-sensitive).
pub fn count_mood(log: &[Session], mood: &str) -> usize {
    log.iter().filter(|session| session.mood == mood).count()
}

//
// Compositions
//

/// Sessions for one hobby, matched exactly, in their original order.
pub fn sessions_for_hobby(log: &[Session], hobby: &str) -> Vec<Session> {
    log.iter()
        .filter(|session| session.hobby == hobby)
        .cloned()
        .collect()
}

/// Total minutes spent on a single hobby.
pub fn hobby_total(log: &[Session], hobby: &str) -> u64 {
    total_time(&sessions_for_hobby(log, hobby))
}

/// Total minutes divided by the number of unique hobbies.
///
/// A log without hobbies has no average, so this returns
/// `AnalyticsExceptions::UndefinedAverage` instead of a NaN.
pub fn average_time_per_hobby(log: &[Session]) -> Result<f64, AnalyticsExceptions> {
    let unique_count = unique_hobbies(log).len();

    if unique_count == 0 {
        return Err(AnalyticsExceptions::UndefinedAverage { unique_hobbies: unique_count });
    }

    let average = total_time(log) as f64 / unique_count as f64;
    debug!(average, unique_count, "computed average time per hobby");
    Ok(average)
}

/// Count of sessions per mood label, built in a single pass.
pub fn mood_counts(log: &[Session]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for session in log {
        counts
            .entry(session.mood.clone())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    counts
}

/// Sessions recorded on `day`, in their original order.
pub fn sessions_on_day(log: &[Session], day: Day) -> Vec<Session> {
    log.iter().filter(|session| session.day == day).cloned().collect()
}

/// Number of sessions in the log.
pub fn session_count(log: &[Session]) -> usize {
    log.len()
}

//
// Sorting
//

// slice::sort_by is stable, equal keys keep their log order
pub fn sort_by_minutes_desc(log: &[Session]) -> Vec<Session> {
    let mut sorted = log.to_vec();
    sorted.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    sorted
}

/// Sorts alphabetically on the day name, not calendar order.
pub fn sort_by_day(log: &[Session]) -> Vec<Session> {
    let mut sorted = log.to_vec();
    sorted.sort_by(|a, b| a.day.name().cmp(b.day.name()));
    sorted
}
