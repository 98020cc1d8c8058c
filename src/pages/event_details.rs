use crate::config::PortalConfig;
use crate::models::{DetailView, Event, EventDetailContent, RegistrationState};
use crate::render::{fallback, image_or, EVENT_DETAIL_IMAGE_FALLBACK};
use crate::resolve::resolve_detail;
use crate::store::RecordStore;

pub fn event_details_page(
    store: Option<&RecordStore>,
    raw_id: Option<&str>,
    config: &PortalConfig,
) -> DetailView<EventDetailContent> {
    match resolve_detail::<Event>(raw_id, store.map(RecordStore::events)) {
        Ok(event) => DetailView::Found {
            page_title: config.page_title(&fallback(&event.title, "Event Details")),
            content: event_detail_content(event),
        },
        Err(err) => {
            tracing::error!(error = %err, "event details error");
            DetailView::Failed {
                page_title: config.error_title(),
                message: err.to_string(),
            }
        }
    }
}

fn event_detail_content(event: &Event) -> EventDetailContent {
    EventDetailContent {
        title: fallback(&event.title, "Untitled Event"),
        image: image_or(event.image.as_deref(), EVENT_DETAIL_IMAGE_FALLBACK),
        date_line: crate::datetime::format_date_time(event.date.as_deref()),
        location: fallback(&event.location, "To Be Determined"),
        category: fallback(&event.category, "General"),
        organizer: fallback(&event.organizer, "Campus Administration"),
        description: fallback(&event.description, "No description provided."),
        registration: RegistrationState::Open,
    }
}
