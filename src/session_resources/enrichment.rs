use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::session_resources::analytics::{
    average_time_per_hobby, count_mood, hobby_total, long_sessions, total_time, unique_hobbies,
};
use crate::session_resources::exceptions::AnalyticsExceptions;
use crate::session_resources::session::Session;

/// A value derived from the whole log and attached to each session.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    /// How many sessions share this session's mood
    MoodCount,
    UniqueHobbies,
    UniqueHobbiesCount,
    LongSessionsCount { threshold: i64 },
    /// Total minutes for this session's hobby
    HobbyTotal,
    TotalTime,
    AverageTimePerHobby,
    /// Log-wide count of one fixed mood label
    MoodTally { mood: String },
}

impl Enrichment {
    /// Key the value is stored under. Parameterised kinds carry their
    /// threshold or mood label verbatim, so distinct requests never share a key.
    pub fn field_name(&self) -> String {
        match self {
            Enrichment::MoodCount => "moodCount".to_string(),
            Enrichment::UniqueHobbies => "uniqueHobbies".to_string(),
            Enrichment::UniqueHobbiesCount => "uniqueHobbiesCount".to_string(),
            Enrichment::LongSessionsCount { threshold } => format!("longSessionsOver{}", threshold),
            Enrichment::HobbyTotal => "totalTimeForHobby".to_string(),
            Enrichment::TotalTime => "totalTimeForAllHobbies".to_string(),
            Enrichment::AverageTimePerHobby => "averageTimePerHobby".to_string(),
            Enrichment::MoodTally { mood } => format!("{}Sessions", mood),
        }
    }

    /// Computes this value for `session` against the entire `log`.
    pub fn derive(&self, log: &[Session], session: &Session) -> Result<DerivedValue, AnalyticsExceptions> {
        let value = match self {
            Enrichment::MoodCount => DerivedValue::Count(count_mood(log, &session.mood)),
            Enrichment::UniqueHobbies => DerivedValue::Hobbies(unique_hobbies(log)),
            Enrichment::UniqueHobbiesCount => DerivedValue::Count(unique_hobbies(log).len()),
            Enrichment::LongSessionsCount { threshold } => {
                DerivedValue::Count(long_sessions(log, *threshold).len())
            }
            Enrichment::HobbyTotal => DerivedValue::Minutes(hobby_total(log, &session.hobby)),
            Enrichment::TotalTime => DerivedValue::Minutes(total_time(log)),
            Enrichment::AverageTimePerHobby => DerivedValue::Average(average_time_per_hobby(log)?),
            Enrichment::MoodTally { mood } => DerivedValue::Count(count_mood(log, mood)),
        };
        Ok(value)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DerivedValue {
    Count(usize),
    Minutes(u64),
    Average(f64),
    Hobbies(Vec<String>),
}

impl fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivedValue::Count(count) => write!(f, "{}", count),
            DerivedValue::Minutes(minutes) => write!(f, "{}", minutes),
            DerivedValue::Average(average) => write!(f, "{:.2}", average),
            DerivedValue::Hobbies(hobbies) => write!(f, "{}", hobbies.join(", ")),
        }
    }
}

/// A session together with its derived fields. Serializes flat, as the
/// session's own fields followed by one key per derived value in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSession {
    pub session: Session,
    pub derived: Vec<(String, DerivedValue)>,
}

impl EnrichedSession {
    pub fn get(&self, field_name: &str) -> Option<&DerivedValue> {
        self.derived
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.derived.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Serialize for EnrichedSession {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4 + self.derived.len()))?;
        map.serialize_entry("day", &self.session.day)?;
        map.serialize_entry("hobby", &self.session.hobby)?;
        map.serialize_entry("minutes", &self.session.minutes)?;
        map.serialize_entry("mood", &self.session.mood)?;
        for (name, value) in &self.derived {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Builds a new sequence, same length and order as `log`, where each session
/// carries every requested derived value. The input is left untouched.
///
/// Asking for the same field twice is an error rather than a silent overwrite.
pub fn enrich(log: &[Session], enrichments: &[Enrichment]) -> Result<Vec<EnrichedSession>, AnalyticsExceptions> {
    let mut field_names = Vec::with_capacity(enrichments.len());
    let mut seen = HashSet::new();

    for enrichment in enrichments {
        let field_name = enrichment.field_name();
        if !seen.insert(field_name.clone()) {
            return Err(AnalyticsExceptions::DuplicateEnrichment { field_name });
        }
        field_names.push(field_name);
    }

    let mut enriched = Vec::with_capacity(log.len());

    for session in log {
        let mut derived = Vec::with_capacity(enrichments.len());
        for (field_name, enrichment) in field_names.iter().zip(enrichments) {
            derived.push((field_name.clone(), enrichment.derive(log, session)?));
        }
        enriched.push(EnrichedSession { session: session.clone(), derived });
    }

    debug!(sessions = enriched.len(), fields = enrichments.len(), "enriched hobby log");
    Ok(enriched)
}
