use chrono::{NaiveDate, NaiveTime};
use std::time::Instant;

use crate::models::event::{CalendarEvent, EventIntent, IntentKind};
use crate::models::label::Label;
use crate::models::settings::Settings;
use crate::services::context::EventDispatcher;
use crate::services::id::IdGenerator;
use crate::utils::date::{add_minutes, format_time_of_day, truncate_to_minute};

use super::dismiss::{DismissPhase, DismissTransition};
use super::validation::{validate_time_range, validate_title, FormError};

/// State for the event editing dialog
pub struct EventDialogState {
    /// Event being edited (None for a new event)
    pub original: Option<CalendarEvent>,
    /// Day the event is saved on, supplied by the calendar
    pub selected_day: NaiveDate,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub selected_label: Label,
    /// Last blocking validation message, shown as a banner
    pub error_message: Option<String>,
    dismiss: DismissTransition,
}

impl EventDialogState {
    /// Seed the form from the selected event if there is one, otherwise from defaults.
    pub fn open(
        selected_day: NaiveDate,
        selected_event: Option<&CalendarEvent>,
        now: NaiveTime,
        settings: &Settings,
    ) -> Self {
        match selected_event {
            Some(event) => Self::from_event(event, selected_day, settings),
            None => Self::new_event(selected_day, now, settings),
        }
    }

    /// Blank form starting at `now` and lasting the default duration.
    pub fn new_event(selected_day: NaiveDate, now: NaiveTime, settings: &Settings) -> Self {
        let start = truncate_to_minute(now);
        let end = add_minutes(start, settings.default_event_duration_minutes as i64);

        Self {
            original: None,
            selected_day,
            title: String::new(),
            description: String::new(),
            start_time: format_time_of_day(start),
            end_time: format_time_of_day(end),
            selected_label: Label::first(),
            error_message: None,
            dismiss: DismissTransition::new(settings.close_delay()),
        }
    }

    pub fn from_event(event: &CalendarEvent, selected_day: NaiveDate, settings: &Settings) -> Self {
        Self {
            original: Some(event.clone()),
            selected_day,
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            selected_label: event.label,
            error_message: None,
            dismiss: DismissTransition::new(settings.close_delay()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn phase(&self) -> DismissPhase {
        self.dismiss.phase()
    }

    pub fn is_open(&self) -> bool {
        self.dismiss.is_open()
    }

    pub fn is_closed(&self) -> bool {
        self.dismiss.is_closed()
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.dismiss.opacity(now)
    }

    pub fn select_label(&mut self, label: Label) {
        self.selected_label = label;
    }

    /// Validate and build the event the form would save.
    pub fn build_event(&self, ids: &IdGenerator) -> Result<CalendarEvent, FormError> {
        validate_title(&self.title)?;
        validate_time_range(self.selected_day, &self.start_time, &self.end_time)?;

        let id = match &self.original {
            Some(event) => event.id,
            None => ids.next_id(),
        };

        Ok(CalendarEvent {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            label: self.selected_label,
            day: self.selected_day,
        })
    }

    /// Validate the form and dispatch a create or update intent.
    ///
    /// Returns `Ok(None)` when the dialog is already closing. On error the
    /// fields are left untouched and the message is kept in `error_message`.
    pub fn submit(
        &mut self,
        dispatcher: &mut dyn EventDispatcher,
        ids: &IdGenerator,
        now: Instant,
    ) -> Result<Option<IntentKind>, FormError> {
        if !self.is_open() {
            return Ok(None);
        }

        let event = match self.build_event(ids) {
            Ok(event) => event,
            Err(e) => {
                log::debug!("Event form rejected: {}", e);
                self.error_message = Some(e.to_string());
                return Err(e);
            }
        };

        let intent = if self.is_editing() {
            EventIntent::update(event)
        } else {
            EventIntent::create(event)
        };
        let kind = intent.kind;
        log::info!("Saving event {} ({:?})", intent.event.id, kind);

        dispatcher.apply_event_intent(intent);
        self.error_message = None;
        self.dismiss.begin(now);
        Ok(Some(kind))
    }

    /// Dispatch a delete intent for the edited event.
    pub fn delete(
        &mut self,
        dispatcher: &mut dyn EventDispatcher,
        now: Instant,
    ) -> Result<Option<IntentKind>, FormError> {
        if !self.is_open() {
            return Ok(None);
        }

        let Some(event) = self.original.clone() else {
            self.error_message = Some(FormError::NothingToDelete.to_string());
            return Err(FormError::NothingToDelete);
        };

        log::info!("Deleting event {}", event.id);
        dispatcher.apply_event_intent(EventIntent::delete(event));
        self.error_message = None;
        self.dismiss.begin(now);
        Ok(Some(IntentKind::Delete))
    }

    /// Dismiss without saving. Pending edits are discarded.
    pub fn close(&mut self, now: Instant) {
        if self.dismiss.begin(now) {
            log::debug!("Event dialog closing without changes");
        }
    }

    /// Finish the dismissal once the close delay has passed.
    ///
    /// Calls `request_close` exactly once, on the tick that removes the modal.
    pub fn advance(&mut self, dispatcher: &mut dyn EventDispatcher, now: Instant) -> DismissPhase {
        if self.dismiss.advance(now) {
            dispatcher.request_close();
        }
        self.dismiss.phase()
    }
}
