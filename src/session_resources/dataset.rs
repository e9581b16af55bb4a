use crate::session_resources::session::{Day, Session};

/// The fixed hobby log the report runs over, in chronological order.
pub fn hobby_log() -> Vec<Session> {
    vec![
        Session::new(Day::Monday, "drawing", 30, "focused"),
        Session::new(Day::Tuesday, "reading", 20, "relaxed"),
        Session::new(Day::Wednesday, "gaming", 45, "excited"),
        Session::new(Day::Thursday, "drawing", 25, "creative"),
        Session::new(Day::Friday, "reading", 35, "calm"),
    ]
}
