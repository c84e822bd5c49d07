// Event module
// Calendar event model and the intents used to mutate the event collection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::label::Label;
use crate::utils::date::{combine, parse_time_of_day};

/// Opaque, process-unique event identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single calendar event on one day.
///
/// Times are wall-clock `HH:MM` strings as entered in the form. The event
/// belongs to `day`; there is no timezone attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub label: Label,
    pub day: NaiveDate,
}

impl CalendarEvent {
    /// Create a builder for constructing events
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Check that the title is non-empty and the end lies after the start.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        let start = parse_time_of_day(&self.start_time)
            .ok_or_else(|| format!("Invalid start time '{}'", self.start_time))?;
        let end = parse_time_of_day(&self.end_time)
            .ok_or_else(|| format!("Invalid end time '{}'", self.end_time))?;

        if combine(self.day, end) <= combine(self.day, start) {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Length of the event, if both times parse.
    pub fn duration(&self) -> Option<chrono::Duration> {
        let start = parse_time_of_day(&self.start_time)?;
        let end = parse_time_of_day(&self.end_time)?;
        Some(end - start)
    }
}

/// Builder for creating events, mostly used by tests and fixtures
pub struct CalendarEventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    description: String,
    start_time: Option<String>,
    end_time: Option<String>,
    label: Label,
    day: Option<NaiveDate>,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: String::new(),
            start_time: None,
            end_time: None,
            label: Label::first(),
            day: None,
        }
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    pub fn day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start_time = self.start_time.ok_or("Event start time is required")?;
        let end_time = self.end_time.ok_or("Event end time is required")?;
        let day = self.day.ok_or("Event day is required")?;

        let event = CalendarEvent {
            id,
            title,
            description: self.description,
            start_time,
            end_time,
            label: self.label,
            day,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// What an intent asks the event owner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    #[serde(rename = "push")]
    Create,
    Update,
    Delete,
}

/// Requested mutation of the event collection.
///
/// Serializes as `{"type": "push", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventIntent {
    #[serde(rename = "type")]
    pub kind: IntentKind,
    #[serde(rename = "payload")]
    pub event: CalendarEvent,
}

impl EventIntent {
    pub fn create(event: CalendarEvent) -> Self {
        Self { kind: IntentKind::Create, event }
    }

    pub fn update(event: CalendarEvent) -> Self {
        Self { kind: IntentKind::Update, event }
    }

    pub fn delete(event: CalendarEvent) -> Self {
        Self { kind: IntentKind::Delete, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn lunch() -> CalendarEvent {
        CalendarEvent::builder()
            .id(EventId(42))
            .title("Lunch")
            .start_time("12:00")
            .end_time("13:00")
            .label(Label::Green)
            .day(day())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_basic() {
        let event = lunch();
        assert_eq!(event.id, EventId(42));
        assert_eq!(event.title, "Lunch");
        assert_eq!(event.description, "");
        assert_eq!(event.label, Label::Green);
        assert_eq!(event.duration(), Some(chrono::Duration::hours(1)));
    }

    #[test]
    fn test_builder_missing_title() {
        let result = CalendarEvent::builder()
            .id(EventId(1))
            .start_time("09:00")
            .end_time("10:00")
            .day(day())
            .build();
        assert_eq!(result.unwrap_err(), "Event title is required");
    }

    #[test]
    fn test_validate_whitespace_title() {
        let mut event = lunch();
        event.title = "   ".to_string();
        assert_eq!(event.validate().unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_validate_equal_times() {
        let mut event = lunch();
        event.end_time = event.start_time.clone();
        assert_eq!(
            event.validate().unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_validate_bad_time_string() {
        let mut event = lunch();
        event.start_time = "noon".to_string();
        assert!(event.validate().unwrap_err().contains("Invalid start time"));
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(lunch()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "title": "Lunch",
                "description": "",
                "startTime": "12:00",
                "endTime": "13:00",
                "label": "green",
                "day": "2024-03-10",
            })
        );
    }

    #[test]
    fn test_intent_json_shape() {
        let intent = EventIntent::create(lunch());
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "push");
        assert_eq!(json["payload"]["id"], 42);

        let back: EventIntent = serde_json::from_value(json).unwrap();
        assert_eq!(back, intent);
    }

    #[test]
    fn test_intent_rejects_unknown_label() {
        let json = r#"{"type":"update","payload":{"id":1,"title":"x","startTime":"09:00","endTime":"10:00","label":"teal","day":"2024-03-10"}}"#;
        assert!(serde_json::from_str::<EventIntent>(json).is_err());
    }
}
