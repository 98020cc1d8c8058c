use crate::config::PortalConfig;
use crate::filters::club_matches;
use crate::models::{Club, ClubControls, ClubQuery, ClubsPageView, ListView};
use crate::render::{club_list, NO_CLUBS_MESSAGE};
use crate::store::RecordStore;

pub const CLUBS_DATA_MESSAGE: &str =
    "Could not load club information. Please try again later.";

pub struct ClubsPage<'a> {
    store: Option<&'a RecordStore>,
    config: &'a PortalConfig,
    query: ClubQuery,
}

impl<'a> ClubsPage<'a> {
    pub fn new(store: Option<&'a RecordStore>, config: &'a PortalConfig) -> Self {
        Self {
            store,
            config,
            query: ClubQuery::default(),
        }
    }

    pub fn with_query(
        store: Option<&'a RecordStore>,
        config: &'a PortalConfig,
        query: ClubQuery,
    ) -> Self {
        Self { store, config, query }
    }

    pub fn set_search_text(&mut self, text: &str) -> ClubsPageView {
        self.query.text = text.to_string();
        self.view()
    }

    pub fn set_category(&mut self, category: &str) -> ClubsPageView {
        self.query.category = category.to_string();
        self.view()
    }

    pub fn view(&self) -> ClubsPageView {
        let page_title = self.config.page_title("Clubs");
        let Some(store) = self.store else {
            tracing::error!("clubs data is missing; disabling filters");
            return ClubsPageView {
                page_title,
                controls: self.controls(Vec::new(), true),
                data_message: Some(CLUBS_DATA_MESSAGE.to_string()),
                list: ListView::of(Vec::new(), NO_CLUBS_MESSAGE),
            };
        };

        let matched: Vec<&Club> = store
            .clubs()
            .iter()
            .filter(|club| club_matches(club, &self.query))
            .collect();

        ClubsPageView {
            page_title,
            controls: self.controls(categories(store.clubs()), false),
            data_message: None,
            list: club_list(&matched),
        }
    }

    fn controls(&self, categories: Vec<String>, disabled: bool) -> ClubControls {
        ClubControls {
            search: self.query.text.clone(),
            category: self.query.category.clone(),
            categories,
            disabled,
        }
    }
}

fn categories(clubs: &[Club]) -> Vec<String> {
    let mut seen: Vec<String> = clubs
        .iter()
        .filter(|club| !club.category.is_empty())
        .map(|club| club.category.clone())
        .collect();
    seen.sort();
    seen.dedup();
    seen
}
