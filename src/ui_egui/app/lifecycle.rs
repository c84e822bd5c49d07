use super::CalendarApp;
use crate::models::event::{CalendarEvent, EventId};
use crate::models::label::Label;
use crate::models::settings::Settings;
use crate::services::id::IdGenerator;
use crate::services::store::CalendarStore;
use chrono::{Local, NaiveDate};

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let today = Local::now().date_naive();
        let store = CalendarStore::with_events(today, sample_events(today));
        log::info!(
            "Starting with {} sample events on {}",
            store.events().len(),
            today
        );
        Self::with_store(store, settings)
    }

    pub fn with_store(store: CalendarStore, settings: Settings) -> Self {
        let ids = IdGenerator::starting_after(store.max_id().unwrap_or(EventId(0)));
        Self {
            store,
            settings,
            ids,
            event_dialog_state: None,
        }
    }
}

fn sample_events(day: NaiveDate) -> Vec<CalendarEvent> {
    let sample = |id: u64, title: &str, start: &str, end: &str, label: Label| CalendarEvent {
        id: EventId(id),
        title: title.to_string(),
        description: String::new(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        label,
        day,
    };

    vec![
        sample(1, "Standup", "09:00", "09:30", Label::Indigo),
        sample(2, "Lunch", "12:00", "13:00", Label::Green),
        sample(3, "Dentist", "16:00", "16:45", Label::Red),
    ]
}
