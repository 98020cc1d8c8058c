use crate::config::PortalConfig;
use crate::models::{Club, ClubDetailContent, DetailView};
use crate::render::{fallback, image_or, CLUB_DETAIL_LOGO_FALLBACK};
use crate::resolve::resolve_detail;
use crate::store::RecordStore;

pub fn club_details_page(
    store: Option<&RecordStore>,
    raw_id: Option<&str>,
    config: &PortalConfig,
) -> DetailView<ClubDetailContent> {
    match resolve_detail::<Club>(raw_id, store.map(RecordStore::clubs)) {
        Ok(club) => DetailView::Found {
            page_title: config.page_title(&fallback(&club.name, "Club Details")),
            content: club_detail_content(club, config),
        },
        Err(err) => {
            tracing::error!(error = %err, "club details error");
            DetailView::Failed {
                page_title: config.error_title(),
                message: err.to_string(),
            }
        }
    }
}

fn club_detail_content(club: &Club, config: &PortalConfig) -> ClubDetailContent {
    let name = fallback(&club.name, "Unnamed Club");
    let contact_href = format!(
        "mailto:{}?subject=Inquiry about {}",
        config.contact_email, name
    );
    ClubDetailContent {
        name,
        logo: image_or(club.logo.as_deref(), CLUB_DETAIL_LOGO_FALLBACK),
        category: fallback(&club.category, "General"),
        description: fallback(&club.description, "No description provided."),
        contact_href,
    }
}
