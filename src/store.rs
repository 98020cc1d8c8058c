use crate::errors::{PortalError, PortalResult};
use crate::models::{Announcement, Club, Event};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const SAMPLE_DATA: &str = include_str!("sample_data.json");

static SAMPLE_STORE: Lazy<RecordStore> =
    Lazy::new(|| RecordStore::from_json(SAMPLE_DATA).expect("valid embedded sample data"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStore {
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    clubs: Vec<Club>,
    #[serde(default)]
    announcements: Vec<Announcement>,
}

impl RecordStore {
    pub fn sample() -> Self {
        SAMPLE_STORE.clone()
    }

    pub fn from_json(raw: &str) -> PortalResult<Self> {
        let store: Self =
            serde_json::from_str(raw).map_err(|err| PortalError::DataIntegrity(err.to_string()))?;
        store.validate()?;
        Ok(store)
    }

    pub fn from_json_file(path: &Path) -> PortalResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn load(path: Option<&Path>) -> PortalResult<Self> {
        match path {
            Some(path) => {
                let store = Self::from_json_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    events = store.events.len(),
                    clubs = store.clubs.len(),
                    announcements = store.announcements.len(),
                    "loaded record store from data file"
                );
                Ok(store)
            }
            None => Ok(Self::sample()),
        }
    }

    fn validate(&self) -> Result<(), PortalError> {
        check_unique_ids("event", self.events.iter().map(|event| event.id))?;
        check_unique_ids("club", self.clubs.iter().map(|club| club.id))?;
        check_unique_ids(
            "announcement",
            self.announcements.iter().map(|announcement| announcement.id),
        )?;
        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }
}

fn check_unique_ids(kind: &str, ids: impl Iterator<Item = i64>) -> Result<(), PortalError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortalError::DataIntegrity(format!(
                "duplicate {kind} id {id}"
            )));
        }
    }
    Ok(())
}
