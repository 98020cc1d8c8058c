use crate::models::RecordKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    #[error("No {0} ID specified in the URL.")]
    MissingId(RecordKind),
    #[error("Invalid {kind} ID format: \"{raw}\". ID must be a number.")]
    InvalidId { kind: RecordKind, raw: String },
    #[error("Could not retrieve {0} information. Data unavailable.")]
    DataUnavailable(RecordKind),
    #[error("{} with ID {id} not found.", .kind.title_noun())]
    NotFound { kind: RecordKind, id: i64 },
    #[error("DATA_INTEGRITY: {0}")]
    DataIntegrity(String),
    #[error("UNKNOWN_ROUTE: {0}")]
    UnknownRoute(String),
    #[error("CONFIG_INVALID: {0}")]
    Config(String),
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl From<std::io::Error> for PortalError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(value: serde_json::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

impl From<serde_yaml::Error> for PortalError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Config(value.to_string())
    }
}

pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::PortalError;
    use crate::models::RecordKind;

    #[test]
    fn detail_error_messages_match_page_copy() {
        assert_eq!(
            PortalError::MissingId(RecordKind::Event).to_string(),
            "No event ID specified in the URL."
        );
        assert_eq!(
            PortalError::InvalidId {
                kind: RecordKind::Event,
                raw: "abc".to_string(),
            }
            .to_string(),
            "Invalid event ID format: \"abc\". ID must be a number."
        );
        assert_eq!(
            PortalError::NotFound {
                kind: RecordKind::Club,
                id: 999,
            }
            .to_string(),
            "Club with ID 999 not found."
        );
        assert_eq!(
            PortalError::DataUnavailable(RecordKind::Club).to_string(),
            "Could not retrieve club information. Data unavailable."
        );
    }
}
