use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::dates::parse_event_date;
use crate::models::{EventId, EventRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("event {id} has an invalid date: {value:?}")]
    InvalidDateFormat { id: EventId, value: String },
}

fn parsed_date(event: &EventRecord) -> Result<DateTime<Utc>, SelectError> {
    parse_event_date(&event.date).ok_or_else(|| SelectError::InvalidDateFormat {
        id: event.id.clone(),
        value: event.date.clone(),
    })
}

/// Returns the most recent event, or `None` when the collection is absent or empty.
///
/// A later record only replaces the current pick when its date is strictly
/// greater, so the first of several tied records wins.
pub fn select_latest(
    events: Option<&[EventRecord]>,
) -> Result<Option<&EventRecord>, SelectError> {
    let mut iter = events.unwrap_or_default().iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };

    let mut latest = first;
    let mut latest_date = parsed_date(first)?;
    for candidate in iter {
        let candidate_date = parsed_date(candidate)?;
        if candidate_date > latest_date {
            latest = candidate;
            latest_date = candidate_date;
        }
    }

    Ok(Some(latest))
}
