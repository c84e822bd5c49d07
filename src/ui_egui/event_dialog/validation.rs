use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use thiserror::Error;

use crate::utils::date::{combine, parse_time_of_day};

/// Which time field failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => write!(f, "Start"),
            TimeField::End => write!(f, "End"),
        }
    }
}

/// Blocking validation failures of the event form.
///
/// All of them are recoverable: the form stays open with its fields intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a title for the event.")]
    EmptyTitle,
    #[error("End time must be after start time.")]
    InvalidTimeRange,
    #[error("{field} time must be in HH:MM format.")]
    MalformedTime { field: TimeField },
    #[error("Only saved events can be deleted.")]
    NothingToDelete,
}

pub fn validate_title(title: &str) -> Result<(), FormError> {
    if title.trim().is_empty() {
        return Err(FormError::EmptyTitle);
    }
    Ok(())
}

/// Parse both times and check that the end lies strictly after the start on `day`.
pub fn validate_time_range(
    day: NaiveDate,
    start_time: &str,
    end_time: &str,
) -> Result<(NaiveTime, NaiveTime), FormError> {
    let start = parse_time_of_day(start_time).ok_or(FormError::MalformedTime {
        field: TimeField::Start,
    })?;
    let end = parse_time_of_day(end_time).ok_or(FormError::MalformedTime {
        field: TimeField::End,
    })?;

    if combine(day, end) <= combine(day, start) {
        return Err(FormError::InvalidTimeRange);
    }

    Ok((start, end))
}
