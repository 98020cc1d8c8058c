use crate::errors::{PortalError, PortalResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Events,
    Clubs,
    EventDetails { id: Option<String> },
    ClubDetails { id: Option<String> },
}

impl Route {
    pub fn parse(input: &str) -> PortalResult<Self> {
        let trimmed = input.trim().trim_start_matches("./").trim_start_matches('/');
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (trimmed, None),
        };

        match path {
            "" | "index.html" | "index" | "home" => Ok(Self::Home),
            "events.html" | "events" => Ok(Self::Events),
            "clubs.html" | "clubs" => Ok(Self::Clubs),
            "event-details.html" | "event-details" => Ok(Self::EventDetails {
                id: query_param(query, "id"),
            }),
            "club-details.html" | "club-details" => Ok(Self::ClubDetails {
                id: query_param(query, "id"),
            }),
            other => Err(PortalError::UnknownRoute(other.to_string())),
        }
    }
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}
