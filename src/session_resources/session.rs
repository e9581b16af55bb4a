use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::session_resources::exceptions::AnalyticsExceptions;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

// Accepts "Monday", "monday" or "Mon"
impl FromStr for Day {
    type Err = AnalyticsExceptions;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<Weekday>()
            .map(Day::from)
            .map_err(|_| AnalyticsExceptions::UnknownDay { error_message: value.to_string() })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One recorded hobby session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub day: Day,
    pub hobby: String,
    pub minutes: u32,
    pub mood: String,
}

impl Session {
    pub fn new(day: Day, hobby: &str, minutes: u32, mood: &str) -> Self {
        Self {
            day,
            hobby: hobby.to_string(),
            minutes,
            mood: mood.to_string(),
        }
    }

    pub fn to_string_for(&self, attribute: &str) -> Option<String> {
        match attribute {
            "day" => Some(self.day.to_string()),
            "hobby" => Some(self.hobby.clone()),
            "minutes" => Some(self.minutes.to_string()),
            "mood" => Some(self.mood.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}min ({})", self.day, self.hobby, self.minutes, self.mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parses_full_and_short_names() {
        assert_eq!("Monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("wednesday".parse::<Day>().unwrap(), Day::Wednesday);
        assert_eq!("Fri".parse::<Day>().unwrap(), Day::Friday);
    }

    #[test]
    fn unknown_day_is_rejected() {
        let error = "Funday".parse::<Day>().unwrap_err();
        assert!(matches!(error, AnalyticsExceptions::UnknownDay { .. }));
    }

    #[test]
    fn session_serializes_day_as_its_name() {
        let session = Session::new(Day::Tuesday, "reading", 20, "relaxed");
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["day"], "Tuesday");
        assert_eq!(json["minutes"], 20);
    }

    #[test]
    fn to_string_for_unknown_attribute_is_none() {
        let session = Session::new(Day::Monday, "drawing", 30, "focused");

        assert_eq!(session.to_string_for("hobby"), Some("drawing".to_string()));
        assert_eq!(session.to_string_for("colour"), None);
    }
}
