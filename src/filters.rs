use crate::models::{Club, ClubQuery, Event, EventQuery, TimeBucket};
use chrono::NaiveDateTime;

pub fn event_matches(event: &Event, query: &EventQuery, now: NaiveDateTime) -> bool {
    text_matches(&event.title, &query.text)
        && category_matches(&event.category, &query.category)
        && time_matches(event, query.time, now)
}

pub fn club_matches(club: &Club, query: &ClubQuery) -> bool {
    text_matches(&club.name, &query.text) && category_matches(&club.category, &query.category)
}

fn text_matches(haystack: &str, query_text: &str) -> bool {
    let needle = query_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle)
}

fn category_matches(category: &str, query_category: &str) -> bool {
    query_category.is_empty() || category == query_category
}

fn time_matches(event: &Event, bucket: TimeBucket, now: NaiveDateTime) -> bool {
    let Some(date) = event.parsed_date() else {
        // Events without a parseable date never pass temporal filtering.
        tracing::warn!(event_id = event.id, date = ?event.date, "invalid date for event");
        return false;
    };
    match bucket {
        TimeBucket::All => true,
        TimeBucket::Upcoming => date >= now,
        TimeBucket::Past => date < now,
    }
}
