use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Records ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Event,
    Club,
}

impl RecordKind {
    pub fn noun(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Club => "club",
        }
    }

    pub fn title_noun(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Club => "Club",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(crate::datetime::parse_date_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeBucket {
    #[default]
    All,
    Upcoming,
    Past,
}

impl TimeBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub time: TimeBucket,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
}

// ─── View Models ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub empty_message: Option<String>,
}

impl<T> ListView<T> {
    pub fn of(items: Vec<T>, empty_message: &str) -> Self {
        let empty_message = if items.is_empty() {
            Some(empty_message.to_string())
        } else {
            None
        };
        Self { items, empty_message }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: i64,
    pub title: String,
    pub date_line: String,
    pub is_past: bool,
    pub location: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub detail_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCard {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub logo: String,
    pub detail_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementItem {
    pub text: String,
    pub posted_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventControls {
    pub search: String,
    pub category: String,
    pub time: TimeBucket,
    pub categories: Vec<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubControls {
    pub search: String,
    pub category: String,
    pub categories: Vec<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPageView {
    pub page_title: String,
    pub controls: EventControls,
    pub data_message: Option<String>,
    pub list: ListView<EventCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubsPageView {
    pub page_title: String,
    pub controls: ClubControls,
    pub data_message: Option<String>,
    pub list: ListView<ClubCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageView {
    pub page_title: String,
    pub upcoming: ListView<EventCard>,
    pub announcements: ListView<AnnouncementItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "state")]
pub enum DetailView<T> {
    Found { page_title: String, content: T },
    Failed { page_title: String, message: String },
}

impl<T> DetailView<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn page_title(&self) -> &str {
        match self {
            Self::Found { page_title, .. } | Self::Failed { page_title, .. } => page_title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailContent {
    pub title: String,
    pub image: String,
    pub date_line: String,
    pub location: String,
    pub category: String,
    pub organizer: String,
    pub description: String,
    pub registration: RegistrationState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetailContent {
    pub name: String,
    pub logo: String,
    pub category: String,
    pub description: String,
    pub contact_href: String,
}

// ─── Registration (simulated, view state only) ──────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationState {
    #[default]
    Open,
    Registered,
}

impl RegistrationState {
    pub fn activate(self) -> Self {
        Self::Registered
    }

    pub fn button_enabled(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Open => "Register Now (Simulated)",
            Self::Registered => "Registered (Simulated)",
        }
    }

    pub fn button_style(self) -> &'static str {
        match self {
            Self::Open => "btn-primary",
            Self::Registered => "btn-success",
        }
    }

    pub fn status_message(self) -> Option<&'static str> {
        match self {
            Self::Open => None,
            Self::Registered => Some("Thank you for registering! (This is a simulation)."),
        }
    }
}
