//! In-memory owner of the calendar state.
//!
//! `CalendarStore` plays the part of the shared application context: it holds
//! the selected day, the event being edited, the events and the label filters,
//! and applies the intents that the event form and label panel emit.

use chrono::NaiveDate;

use crate::models::event::{CalendarEvent, EventId, EventIntent, IntentKind};
use crate::models::label::{default_filters, Label, LabelFilterEntry};
use crate::services::context::{EventDispatcher, LabelFilterSink};

#[derive(Debug, Clone)]
pub struct CalendarStore {
    selected_day: NaiveDate,
    selected_event: Option<CalendarEvent>,
    events: Vec<CalendarEvent>,
    labels: Vec<LabelFilterEntry>,
    show_event_modal: bool,
}

impl CalendarStore {
    pub fn new(selected_day: NaiveDate) -> Self {
        Self {
            selected_day,
            selected_event: None,
            events: Vec::new(),
            labels: default_filters(),
            show_event_modal: false,
        }
    }

    pub fn with_events(selected_day: NaiveDate, events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            ..Self::new(selected_day)
        }
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.selected_event.as_ref()
    }

    pub fn labels(&self) -> &[LabelFilterEntry] {
        &self.labels
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn show_event_modal(&self) -> bool {
        self.show_event_modal
    }

    pub fn event(&self, id: EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Highest id currently stored, used to seed id generation.
    pub fn max_id(&self) -> Option<EventId> {
        self.events.iter().map(|event| event.id).max()
    }

    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected_day = day;
    }

    /// Open the modal for a new event on the selected day.
    pub fn open_new_event(&mut self) {
        self.selected_event = None;
        self.show_event_modal = true;
    }

    /// Open the modal to edit an existing event. Unknown ids are ignored.
    pub fn open_event(&mut self, id: EventId) -> bool {
        let Some(event) = self.event(id).cloned() else {
            log::warn!("Cannot open unknown event {}", id);
            return false;
        };
        self.selected_day = event.day;
        self.selected_event = Some(event);
        self.show_event_modal = true;
        true
    }

    pub fn is_label_enabled(&self, label: Label) -> bool {
        self.labels
            .iter()
            .find(|entry| entry.name == label)
            .map(|entry| entry.enabled)
            .unwrap_or(false)
    }

    /// Events whose label is enabled, in any order of days.
    pub fn filtered_events(&self) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|event| self.is_label_enabled(event.label))
            .collect()
    }

    /// Visible events on `day`, ordered by start time.
    pub fn events_for_day(&self, day: NaiveDate) -> Vec<&CalendarEvent> {
        let mut events: Vec<_> = self
            .filtered_events()
            .into_iter()
            .filter(|event| event.day == day)
            .collect();
        events.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
        events
    }

    fn reduce(&mut self, intent: EventIntent) {
        let EventIntent { kind, event } = intent;
        match kind {
            IntentKind::Create => {
                if self.event(event.id).is_some() {
                    log::warn!("Event {} already exists, ignoring create", event.id);
                    return;
                }
                self.events.push(event);
            }
            IntentKind::Update => {
                match self.events.iter_mut().find(|existing| existing.id == event.id) {
                    Some(existing) => *existing = event,
                    None => log::warn!("Cannot update unknown event {}", event.id),
                }
            }
            IntentKind::Delete => {
                let before = self.events.len();
                self.events.retain(|existing| existing.id != event.id);
                if self.events.len() == before {
                    log::warn!("Cannot delete unknown event {}", event.id);
                }
            }
        }
    }
}

impl EventDispatcher for CalendarStore {
    fn apply_event_intent(&mut self, intent: EventIntent) {
        match serde_json::to_string(&intent) {
            Ok(json) => log::debug!("Applying event intent {}", json),
            Err(e) => log::warn!("Failed to serialize intent for logging: {}", e),
        }
        self.reduce(intent);
    }

    fn request_close(&mut self) {
        self.show_event_modal = false;
        self.selected_event = None;
    }
}

impl LabelFilterSink for CalendarStore {
    fn set_label_enabled(&mut self, name: Label, enabled: bool) {
        match self.labels.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.enabled = enabled;
                log::debug!("Label {} enabled={}", name, enabled);
            }
            None => log::warn!("Label {} is not part of the filter list", name),
        }
    }
}
