use std::io::Write;
use tracing::info;

use crate::session_resources::analytics::{
    average_time_per_hobby, count_mood, hobby_total, long_sessions, mood_counts, session_count,
    sessions_on_day, sort_by_day, sort_by_minutes_desc, total_time, unique_hobbies,
};
use crate::session_resources::config::ReportSettings;
use crate::session_resources::enrichment::{enrich, Enrichment};
use crate::session_resources::exceptions::AnalyticsExceptions;
use crate::session_resources::implementation::Reporter;
use crate::session_resources::session::Session;

// Report Class
// Runs every aggregation over the hobby log once and hands each result to the reporter
// The log is only ever borrowed, so every section sees the same data in the same order

pub fn run_report<W: Write>(
    log: &[Session],
    settings: &ReportSettings,
    reporter: &mut Reporter<W>,
) -> Result<(), AnalyticsExceptions> {
    let threshold = settings.long_session_threshold;

    info!(sessions = log.len(), threshold, "running hobby log report");

    reporter.minutes("Total time spent", total_time(log))?;
    reporter.list("Unique hobbies", &unique_hobbies(log))?;
    reporter.sessions(
        &format!("Sessions longer than {} min", threshold),
        &long_sessions(log, threshold),
    )?;

    for mood in &settings.mood_tallies {
        reporter.value(&format!("Number of {} sessions", mood), count_mood(log, mood))?;
    }

    reporter.minutes(
        &format!("Total time for {}", settings.hobby_total_for),
        hobby_total(log, &settings.hobby_total_for),
    )?;
    reporter.value("Unique hobbies count", unique_hobbies(log).len())?;
    reporter.value("Long sessions count", long_sessions(log, threshold).len())?;
    reporter.counts("Mood counts", &mood_counts(log))?;
    report_average(log, reporter)?;

    for day in settings.days()? {
        reporter.sessions(&format!("Hobby sessions on {}", day), &sessions_on_day(log, day))?;
    }

    reporter.value("Total sessions", session_count(log))?;
    reporter.sessions("Hobby log sorted by minutes", &sort_by_minutes_desc(log))?;
    reporter.sessions("Hobby log sorted by day", &sort_by_day(log))?;

    for (label, enrichments) in enrichment_sections(settings) {
        reporter.enriched(&label, &enrich(log, &enrichments)?)?;
    }

    reporter.flush()
}

// An empty log has no average; report that instead of aborting the whole report
fn report_average<W: Write>(log: &[Session], reporter: &mut Reporter<W>) -> Result<(), AnalyticsExceptions> {
    match average_time_per_hobby(log) {
        Ok(average) => reporter.value("Average time per hobby", format!("{:.2} minutes", average)),
        Err(error) => reporter.value("Average time per hobby", error),
    }
}

pub fn enrichment_sections(settings: &ReportSettings) -> Vec<(String, Vec<Enrichment>)> {
    let long_threshold = settings.long_session_threshold;
    let enrichment_threshold = settings.enrichment_long_session_threshold;

    let mut sections = vec![
        ("Hobby log with mood counts".to_string(), vec![Enrichment::MoodCount]),
        ("Hobby log with unique hobbies".to_string(), vec![Enrichment::UniqueHobbies]),
        ("Hobby log with total time per hobby".to_string(), vec![Enrichment::HobbyTotal]),
        ("Hobby log with unique hobbies count".to_string(), vec![Enrichment::UniqueHobbiesCount]),
        (
            format!("Hobby log with long sessions count (over {} min)", long_threshold),
            vec![Enrichment::LongSessionsCount { threshold: long_threshold }],
        ),
        ("Hobby log with total time for all hobbies".to_string(), vec![Enrichment::TotalTime]),
        ("Hobby log with average time per hobby".to_string(), vec![Enrichment::AverageTimePerHobby]),
        (
            format!("Hobby log with long sessions count (over {} min)", enrichment_threshold),
            vec![Enrichment::LongSessionsCount { threshold: enrichment_threshold }],
        ),
    ];

    for mood in &settings.mood_tallies {
        sections.push((
            format!("Hobby log with total {} sessions", mood),
            vec![Enrichment::MoodTally { mood: mood.clone() }],
        ));
    }

    sections
}
