// Test fixtures - reusable test data
// Provides consistent test data and a recording context across test files

#![allow(dead_code)]

use calendar_panels::models::event::{CalendarEvent, EventId, EventIntent};
use calendar_panels::models::label::Label;
use calendar_panels::services::context::{EventDispatcher, LabelFilterSink};
use chrono::{NaiveDate, NaiveTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 10, 2024 (a Sunday)
    pub fn march_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Lunch on Mar 10, 2024, id 42, green label
    pub fn lunch() -> CalendarEvent {
        CalendarEvent {
            id: EventId(42),
            title: "Lunch".to_string(),
            description: "Noodle place".to_string(),
            start_time: "12:00".to_string(),
            end_time: "13:00".to_string(),
            label: Label::Green,
            day: dates::march_10_2024(),
        }
    }

    /// Morning run, id 7, blue label
    pub fn morning_run() -> CalendarEvent {
        CalendarEvent {
            id: EventId(7),
            title: "Morning run".to_string(),
            description: String::new(),
            start_time: "06:30".to_string(),
            end_time: "07:15".to_string(),
            label: Label::Blue,
            day: dates::march_10_2024(),
        }
    }
}

/// Calls received by `RecordingContext`, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Intent(EventIntent),
    Close,
    SetLabel(Label, bool),
}

/// Collaborator double that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub calls: Vec<Call>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> Vec<&EventIntent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Intent(intent) => Some(intent),
                _ => None,
            })
            .collect()
    }

    pub fn close_requests(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::Close).count()
    }
}

impl EventDispatcher for RecordingContext {
    fn apply_event_intent(&mut self, intent: EventIntent) {
        self.calls.push(Call::Intent(intent));
    }

    fn request_close(&mut self) {
        self.calls.push(Call::Close);
    }
}

impl LabelFilterSink for RecordingContext {
    fn set_label_enabled(&mut self, name: Label, enabled: bool) {
        self.calls.push(Call::SetLabel(name, enabled));
    }
}
