use crate::errors::{PortalError, PortalResult};
use crate::models::{Club, Event, RecordKind};

pub trait StoredRecord {
    const KIND: RecordKind;

    fn record_id(&self) -> i64;
}

impl StoredRecord for Event {
    const KIND: RecordKind = RecordKind::Event;

    fn record_id(&self) -> i64 {
        self.id
    }
}

impl StoredRecord for Club {
    const KIND: RecordKind = RecordKind::Club;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn resolve_detail<'a, T: StoredRecord>(
    raw_id: Option<&str>,
    records: Option<&'a [T]>,
) -> PortalResult<&'a T> {
    let raw = raw_id.unwrap_or("");
    if raw.is_empty() {
        return Err(PortalError::MissingId(T::KIND));
    }

    let id: i64 = raw.trim().parse().map_err(|_| PortalError::InvalidId {
        kind: T::KIND,
        raw: raw.to_string(),
    })?;

    let records = records.ok_or(PortalError::DataUnavailable(T::KIND))?;

    records
        .iter()
        .find(|record| record.record_id() == id)
        .ok_or(PortalError::NotFound { kind: T::KIND, id })
}
