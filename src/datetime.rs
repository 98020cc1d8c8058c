use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_TBD: &str = "Date TBD";
pub const INVALID_DATE: &str = "Invalid Date";
pub const DATE_UNAVAILABLE: &str = "Date unavailable";

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%B %-d, %Y, %-I:%M %p";
const POSTED_FORMAT: &str = "%b %-d, %Y";

pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

pub fn format_date_time(value: Option<&str>) -> String {
    let raw = match value {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return DATE_TBD.to_string(),
    };
    match parse_date_time(raw) {
        Some(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::warn!(value = %raw, "invalid date string provided");
            INVALID_DATE.to_string()
        }
    }
}

pub fn format_posted_date(raw: &str) -> String {
    match parse_date_time(raw) {
        Some(parsed) => parsed.format(POSTED_FORMAT).to_string(),
        None => DATE_UNAVAILABLE.to_string(),
    }
}
