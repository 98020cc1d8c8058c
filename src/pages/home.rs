use crate::config::PortalConfig;
use crate::models::{Event, HomePageView, ListView};
use crate::ordering::sorted_announcements;
use crate::render::{announcement_list, event_list, NO_UPCOMING_MESSAGE};
use crate::store::RecordStore;
use chrono::NaiveDateTime;

pub const HOME_EVENTS_DATA_MESSAGE: &str = "Event data is unavailable.";
pub const HOME_ANNOUNCEMENTS_DATA_MESSAGE: &str = "Announcement data is unavailable.";

pub fn home_page(
    store: Option<&RecordStore>,
    config: &PortalConfig,
    now: NaiveDateTime,
) -> HomePageView {
    let page_title = config.page_title("Home");
    let Some(store) = store else {
        tracing::error!("record store is missing; rendering home page placeholders");
        return HomePageView {
            page_title,
            upcoming: ListView::of(Vec::new(), HOME_EVENTS_DATA_MESSAGE),
            announcements: ListView::of(Vec::new(), HOME_ANNOUNCEMENTS_DATA_MESSAGE),
        };
    };

    let mut future: Vec<(&Event, NaiveDateTime)> = store
        .events()
        .iter()
        .filter_map(|event| event.parsed_date().map(|date| (event, date)))
        .filter(|(_, date)| *date >= now)
        .collect();
    future.sort_by_key(|(_, date)| *date);
    let upcoming: Vec<&Event> = future
        .into_iter()
        .take(config.home_upcoming_limit)
        .map(|(event, _)| event)
        .collect();

    let announcements: Vec<_> = sorted_announcements(store.announcements())
        .into_iter()
        .take(config.home_announcement_limit)
        .collect();

    HomePageView {
        page_title,
        upcoming: event_list(&upcoming, now, NO_UPCOMING_MESSAGE),
        announcements: announcement_list(&announcements),
    }
}

#[cfg(test)]
mod tests {
    use super::home_page;
    use crate::config::PortalConfig;
    use crate::store::RecordStore;
    use chrono::NaiveDateTime;

    fn at(raw: &str) -> NaiveDateTime {
        crate::datetime::parse_date_time(raw).expect("valid test datetime")
    }

    #[test]
    fn shows_next_four_upcoming_events_soonest_first() {
        let store = RecordStore::sample();
        let config = PortalConfig::default();
        let view = home_page(Some(&store), &config, at("2025-05-01T00:00:00"));

        let ids: Vec<i64> = view.upcoming.items.iter().map(|card| card.id).collect();
        // Five sample events are upcoming; the limit keeps the first four by date.
        assert_eq!(ids, vec![4, 2, 1, 3]);
        assert_eq!(view.page_title, "Home - Campus Connect Portal");
    }

    #[test]
    fn past_events_never_reach_the_home_list() {
        let store = RecordStore::sample();
        let config = PortalConfig::default();
        let view = home_page(Some(&store), &config, at("2025-05-12T00:00:00"));

        let ids: Vec<i64> = view.upcoming.items.iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn announcements_are_newest_first_and_limited() {
        let store = RecordStore::sample();
        let config = PortalConfig {
            home_announcement_limit: 2,
            ..PortalConfig::default()
        };
        let view = home_page(Some(&store), &config, at("2025-05-01T00:00:00"));

        let lines: Vec<&str> = view
            .announcements
            .items
            .iter()
            .map(|item| item.posted_line.as_str())
            .collect();
        assert_eq!(lines, vec!["Posted: Apr 20, 2025", "Posted: Apr 18, 2025"]);
    }

    #[test]
    fn empty_sections_carry_distinct_markers() {
        let config = PortalConfig::default();
        let view = home_page(None, &config, at("2025-05-01T00:00:00"));
        assert_eq!(
            view.upcoming.empty_message.as_deref(),
            Some(super::HOME_EVENTS_DATA_MESSAGE)
        );
        assert_eq!(
            view.announcements.empty_message.as_deref(),
            Some(super::HOME_ANNOUNCEMENTS_DATA_MESSAGE)
        );
    }

    #[test]
    fn no_upcoming_events_shows_schedule_marker() {
        let store = RecordStore::sample();
        let config = PortalConfig::default();
        let view = home_page(Some(&store), &config, at("2026-01-01T00:00:00"));
        assert!(view.upcoming.items.is_empty());
        assert_eq!(
            view.upcoming.empty_message.as_deref(),
            Some(crate::render::NO_UPCOMING_MESSAGE)
        );
    }
}
