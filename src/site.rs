use crate::config::PortalConfig;
use crate::errors::PortalResult;
use crate::html;
use crate::pages::club_details::club_details_page;
use crate::pages::clubs::ClubsPage;
use crate::pages::event_details::event_details_page;
use crate::pages::events::EventsPage;
use crate::pages::home::home_page;
use crate::routes::Route;
use crate::store::RecordStore;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

pub fn render_route(
    route: &Route,
    store: Option<&RecordStore>,
    config: &PortalConfig,
    now: NaiveDateTime,
) -> String {
    match route {
        Route::Home => html::render_home(&home_page(store, config, now), config),
        Route::Events => {
            let page = EventsPage::new(store, config, now);
            html::render_events(&page.view(), config)
        }
        Route::Clubs => {
            let page = ClubsPage::new(store, config);
            html::render_clubs(&page.view(), config)
        }
        Route::EventDetails { id } => {
            let view = event_details_page(store, id.as_deref(), config);
            html::render_event_details(&view, config)
        }
        Route::ClubDetails { id } => {
            let view = club_details_page(store, id.as_deref(), config);
            html::render_club_details(&view, config)
        }
    }
}

pub fn generate_site(
    store: Option<&RecordStore>,
    config: &PortalConfig,
    now: NaiveDateTime,
    out_dir: &Path,
) -> PortalResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let fixed: [(&str, Route); 5] = [
        ("index.html", Route::Home),
        ("events.html", Route::Events),
        ("clubs.html", Route::Clubs),
        // Bare detail pages have no query string; they render the missing-id state.
        ("event-details.html", Route::EventDetails { id: None }),
        ("club-details.html", Route::ClubDetails { id: None }),
    ];
    for (name, route) in fixed {
        written.push(write_page(
            out_dir,
            name,
            &render_route(&route, store, config, now),
        )?);
    }

    if let Some(store) = store {
        for event in store.events() {
            let route = Route::EventDetails {
                id: Some(event.id.to_string()),
            };
            written.push(write_page(
                out_dir,
                &format!("event-detail-{}.html", event.id),
                &render_route(&route, Some(store), config, now),
            )?);
        }
        for club in store.clubs() {
            let route = Route::ClubDetails {
                id: Some(club.id.to_string()),
            };
            written.push(write_page(
                out_dir,
                &format!("club-detail-{}.html", club.id),
                &render_route(&route, Some(store), config, now),
            )?);
        }
    }

    tracing::info!(pages = written.len(), out_dir = %out_dir.display(), "generated portal page set");
    Ok(written)
}

fn write_page(out_dir: &Path, name: &str, contents: &str) -> PortalResult<PathBuf> {
    let path = out_dir.join(name);
    fs::write(&path, contents)?;
    tracing::debug!(page = name, bytes = contents.len(), "wrote page");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::render_route;
    use crate::config::PortalConfig;
    use crate::routes::Route;
    use crate::store::RecordStore;
    use chrono::NaiveDateTime;

    fn at(raw: &str) -> NaiveDateTime {
        crate::datetime::parse_date_time(raw).expect("valid test datetime")
    }

    #[test]
    fn detail_route_with_bad_id_renders_error_page() {
        let store = RecordStore::sample();
        let config = PortalConfig::default();
        let route = Route::parse("event-details.html?id=abc").expect("route");
        let html = render_route(&route, Some(&store), &config, at("2025-05-01T00:00:00"));
        assert!(html.contains("Error: Invalid event ID format: &quot;abc&quot;. ID must be a number."));
    }

    #[test]
    fn home_route_embeds_soonest_upcoming_event() {
        let store = RecordStore::sample();
        let config = PortalConfig::default();
        let html = render_route(&Route::Home, Some(&store), &config, at("2025-05-01T00:00:00"));
        assert!(html.contains("End-of-Semester Study Jam"));
        assert!(html.contains("May 8, 2025, 7:00 PM"));
    }
}
