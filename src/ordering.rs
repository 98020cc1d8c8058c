use crate::models::{Announcement, Event};
use chrono::NaiveDateTime;
use std::cmp::Ordering;

pub fn compare_events(a: &Event, b: &Event, now: NaiveDateTime) -> Ordering {
    let (Some(date_a), Some(date_b)) = (a.parsed_date(), b.parsed_date()) else {
        // Unparseable dates keep their relative position.
        return Ordering::Equal;
    };

    let a_upcoming = date_a >= now;
    let b_upcoming = date_b >= now;

    match (a_upcoming, b_upcoming) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => date_a.cmp(&date_b),
        (false, false) => date_b.cmp(&date_a),
    }
}

pub fn sort_events<'a>(events: &mut Vec<&'a Event>, now: NaiveDateTime) {
    events.sort_by(|a, b| compare_events(a, b, now));
}

pub fn compare_announcements(a: &Announcement, b: &Announcement) -> Ordering {
    let (Some(date_a), Some(date_b)) = (
        crate::datetime::parse_date_time(&a.date),
        crate::datetime::parse_date_time(&b.date),
    ) else {
        return Ordering::Equal;
    };
    date_b.cmp(&date_a)
}

pub fn sorted_announcements(announcements: &[Announcement]) -> Vec<&Announcement> {
    let mut ordered: Vec<&Announcement> = announcements.iter().collect();
    ordered.sort_by(|a, b| compare_announcements(a, b));
    ordered
}
