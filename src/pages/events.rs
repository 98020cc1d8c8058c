use crate::config::PortalConfig;
use crate::filters::event_matches;
use crate::models::{Event, EventControls, EventQuery, EventsPageView, ListView, TimeBucket};
use crate::ordering::sort_events;
use crate::render::{event_list, NO_EVENTS_MESSAGE};
use crate::store::RecordStore;
use chrono::NaiveDateTime;

pub const EVENTS_DATA_MESSAGE: &str = "Could not load event information. Data unavailable.";

pub struct EventsPage<'a> {
    store: Option<&'a RecordStore>,
    config: &'a PortalConfig,
    query: EventQuery,
    now: NaiveDateTime,
}

impl<'a> EventsPage<'a> {
    pub fn new(store: Option<&'a RecordStore>, config: &'a PortalConfig, now: NaiveDateTime) -> Self {
        Self {
            store,
            config,
            query: EventQuery::default(),
            now,
        }
    }

    pub fn with_query(
        store: Option<&'a RecordStore>,
        config: &'a PortalConfig,
        query: EventQuery,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            store,
            config,
            query,
            now,
        }
    }

    pub fn set_search_text(&mut self, text: &str) -> EventsPageView {
        self.query.text = text.to_string();
        self.view()
    }

    pub fn set_category(&mut self, category: &str) -> EventsPageView {
        self.query.category = category.to_string();
        self.view()
    }

    pub fn set_time_bucket(&mut self, bucket: TimeBucket) -> EventsPageView {
        self.query.time = bucket;
        self.view()
    }

    pub fn view(&self) -> EventsPageView {
        let page_title = self.config.page_title("Events");
        let Some(store) = self.store else {
            tracing::error!("events data is missing; disabling filters");
            return EventsPageView {
                page_title,
                controls: self.controls(Vec::new(), true),
                data_message: Some(EVENTS_DATA_MESSAGE.to_string()),
                list: ListView::of(Vec::new(), NO_EVENTS_MESSAGE),
            };
        };

        let mut matched: Vec<&Event> = store
            .events()
            .iter()
            .filter(|event| event_matches(event, &self.query, self.now))
            .collect();
        sort_events(&mut matched, self.now);

        EventsPageView {
            page_title,
            controls: self.controls(categories(store.events()), false),
            data_message: None,
            list: event_list(&matched, self.now, NO_EVENTS_MESSAGE),
        }
    }

    fn controls(&self, categories: Vec<String>, disabled: bool) -> EventControls {
        EventControls {
            search: self.query.text.clone(),
            category: self.query.category.clone(),
            time: self.query.time,
            categories,
            disabled,
        }
    }
}

fn categories(events: &[Event]) -> Vec<String> {
    let mut seen: Vec<String> = events
        .iter()
        .filter(|event| !event.category.is_empty())
        .map(|event| event.category.clone())
        .collect();
    seen.sort();
    seen.dedup();
    seen
}
