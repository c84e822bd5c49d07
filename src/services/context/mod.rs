//! Collaborator interfaces between the view components and the state owner.
//!
//! The event collection and the label filter state are owned elsewhere. The
//! components only hand intents to these traits and never mutate shared
//! state directly.

use crate::models::event::EventIntent;
use crate::models::label::Label;

/// Receives event mutations and modal visibility requests from the event form.
#[cfg_attr(test, mockall::automock)]
pub trait EventDispatcher {
    /// Apply a create, update or delete request.
    fn apply_event_intent(&mut self, intent: EventIntent);

    /// Hide the event modal.
    fn request_close(&mut self);
}

/// Receives label filter changes from the label panel.
#[cfg_attr(test, mockall::automock)]
pub trait LabelFilterSink {
    fn set_label_enabled(&mut self, name: Label, enabled: bool);
}
