use crate::models::{
    Announcement, AnnouncementItem, Club, ClubCard, Event, EventCard, ListView,
};
use chrono::NaiveDateTime;

pub const EVENT_CARD_IMAGE_FALLBACK: &str =
    "https://placehold.co/300x150/CCCCCC/FFFFFF?text=No+Image";
pub const EVENT_DETAIL_IMAGE_FALLBACK: &str =
    "https://placehold.co/800x400/CCCCCC/FFFFFF?text=No+Image";
pub const CLUB_CARD_LOGO_FALLBACK: &str = "https://placehold.co/150x150/CCCCCC/FFFFFF?text=No+Logo";
pub const CLUB_DETAIL_LOGO_FALLBACK: &str =
    "https://placehold.co/200x200/CCCCCC/FFFFFF?text=No+Logo";

pub const NO_EVENTS_MESSAGE: &str = "No events found matching your criteria.";
pub const NO_CLUBS_MESSAGE: &str = "No clubs found matching your criteria.";
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming events scheduled at this time.";
pub const NO_ANNOUNCEMENTS_MESSAGE: &str = "No recent announcements.";

const DESCRIPTION_PREVIEW_CHARS: usize = 80;

pub fn event_card(event: &Event, now: NaiveDateTime) -> EventCard {
    let is_past = event.parsed_date().map(|date| date < now).unwrap_or(false);
    EventCard {
        id: event.id,
        title: fallback(&event.title, "Untitled Event"),
        date_line: crate::datetime::format_date_time(event.date.as_deref()),
        is_past,
        location: fallback(&event.location, "Location TBD"),
        description: preview(&event.description),
        category: fallback(&event.category, "General"),
        image: image_or(event.image.as_deref(), EVENT_CARD_IMAGE_FALLBACK),
        detail_href: format!("event-details.html?id={}", event.id),
    }
}

pub fn club_card(club: &Club) -> ClubCard {
    ClubCard {
        id: club.id,
        name: fallback(&club.name, "Unnamed Club"),
        category: fallback(&club.category, "General"),
        description: fallback(&club.description, "No description available."),
        logo: image_or(club.logo.as_deref(), CLUB_CARD_LOGO_FALLBACK),
        detail_href: format!("club-details.html?id={}", club.id),
    }
}

pub fn announcement_item(announcement: &Announcement) -> AnnouncementItem {
    AnnouncementItem {
        text: announcement.text.clone(),
        posted_line: format!(
            "Posted: {}",
            crate::datetime::format_posted_date(&announcement.date)
        ),
    }
}

pub fn event_list(events: &[&Event], now: NaiveDateTime, empty_message: &str) -> ListView<EventCard> {
    let cards = events.iter().map(|event| event_card(event, now)).collect();
    ListView::of(cards, empty_message)
}

pub fn club_list(clubs: &[&Club]) -> ListView<ClubCard> {
    let cards = clubs.iter().map(|club| club_card(club)).collect();
    ListView::of(cards, NO_CLUBS_MESSAGE)
}

pub fn announcement_list(announcements: &[&Announcement]) -> ListView<AnnouncementItem> {
    let items = announcements
        .iter()
        .map(|announcement| announcement_item(announcement))
        .collect();
    ListView::of(items, NO_ANNOUNCEMENTS_MESSAGE)
}

pub fn fallback(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

pub fn image_or(url: Option<&str>, default: &str) -> String {
    match url {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => default.to_string(),
    }
}

fn preview(description: &str) -> String {
    // Listing previews always carry the ellipsis, even for short text.
    let truncated: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::{announcement_item, club_card, event_card, event_list};
    use crate::models::{Announcement, Club, Event};
    use chrono::NaiveDateTime;

    fn at(raw: &str) -> NaiveDateTime {
        crate::datetime::parse_date_time(raw).expect("valid test datetime")
    }

    fn bare_event(id: i64) -> Event {
        Event {
            id,
            title: String::new(),
            date: None,
            location: String::new(),
            description: String::new(),
            organizer: String::new(),
            category: String::new(),
            image: None,
        }
    }

    #[test]
    fn card_applies_listing_fallbacks() {
        let card = event_card(&bare_event(9), at("2025-05-01T00:00:00"));
        assert_eq!(card.title, "Untitled Event");
        assert_eq!(card.date_line, "Date TBD");
        assert_eq!(card.location, "Location TBD");
        assert_eq!(card.category, "General");
        assert_eq!(card.description, "...");
        assert_eq!(card.image, super::EVENT_CARD_IMAGE_FALLBACK);
        assert_eq!(card.detail_href, "event-details.html?id=9");
        assert!(!card.is_past);
    }

    #[test]
    fn description_preview_is_eighty_chars_plus_ellipsis() {
        let mut event = bare_event(1);
        event.description = "x".repeat(200);
        let card = event_card(&event, at("2025-05-01T00:00:00"));
        assert_eq!(card.description.chars().count(), 83);
        assert!(card.description.ends_with("..."));
    }

    #[test]
    fn past_events_are_flagged() {
        let mut event = bare_event(1);
        event.date = Some("2025-05-10T18:00:00".to_string());
        let card = event_card(&event, at("2025-05-12T00:00:00"));
        assert!(card.is_past);

        let card = event_card(&event, at("2025-05-01T00:00:00"));
        assert!(!card.is_past);
    }

    #[test]
    fn club_card_keeps_full_description() {
        let club = Club {
            id: 101,
            name: "E-CELL".to_string(),
            description: "d".repeat(200),
            category: "Technical".to_string(),
            logo: None,
        };
        let card = club_card(&club);
        assert_eq!(card.description.len(), 200);
        assert_eq!(card.logo, super::CLUB_CARD_LOGO_FALLBACK);
        assert_eq!(card.detail_href, "club-details.html?id=101");
    }

    #[test]
    fn announcement_item_formats_posted_line() {
        let item = announcement_item(&Announcement {
            id: 201,
            text: "Library hours extended.".to_string(),
            date: "2025-04-20".to_string(),
        });
        assert_eq!(item.posted_line, "Posted: Apr 20, 2025");

        let item = announcement_item(&Announcement {
            id: 202,
            text: "No date".to_string(),
            date: "??".to_string(),
        });
        assert_eq!(item.posted_line, "Posted: Date unavailable");
    }

    #[test]
    fn empty_event_list_surfaces_marker_and_no_items() {
        let view = event_list(&[], at("2025-05-01T00:00:00"), super::NO_EVENTS_MESSAGE);
        assert!(view.items.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(super::NO_EVENTS_MESSAGE));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut event = bare_event(3);
        event.title = "Cultural night".to_string();
        event.date = Some("2025-05-10T18:00:00".to_string());
        let now = at("2025-05-01T00:00:00");
        assert_eq!(event_card(&event, now), event_card(&event, now));
    }
}
