// Property-based tests for event form submission
// Random titles and time ranges checked against the dispatch contract

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::collections::HashSet;
use std::time::Instant;

use calendar_panels::models::event::IntentKind;
use calendar_panels::models::label::Label;
use calendar_panels::models::settings::Settings;
use calendar_panels::services::id::IdGenerator;
use calendar_panels::ui_egui::event_dialog::{EventDialogState, FormError};
use fixtures::{dates, events, RecordingContext};
use proptest::prelude::*;

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn label_strategy() -> impl Strategy<Value = Label> {
    prop::sample::select(Label::ALL.to_vec())
}

fn blank_form() -> EventDialogState {
    EventDialogState::open(
        dates::march_10_2024(),
        None,
        dates::nine_am(),
        &Settings::default(),
    )
}

/// Snapshot of the editable fields
fn fields(form: &EventDialogState) -> (String, String, String, String, Label) {
    (
        form.title.clone(),
        form.description.clone(),
        form.start_time.clone(),
        form.end_time.clone(),
        form.selected_label,
    )
}

proptest! {
    /// Property: valid input yields exactly one intent matching the normalized fields
    #[test]
    fn prop_valid_submit_emits_one_matching_intent(
        title in "[ \t]{0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,20}[ \t]{0,3}",
        description in "[ ]{0,2}[a-z ]{0,30}",
        start in 0u32..(24 * 60 - 1),
        length in 1u32..(24 * 60),
        label in label_strategy(),
    ) {
        let end = (start + length).min(24 * 60 - 1);
        prop_assume!(end > start);

        let mut form = blank_form();
        form.title = title.clone();
        form.description = description.clone();
        form.start_time = hhmm(start);
        form.end_time = hhmm(end);
        form.select_label(label);

        let mut context = RecordingContext::new();
        let result = form.submit(&mut context, &IdGenerator::new(), Instant::now());
        prop_assert_eq!(result, Ok(Some(IntentKind::Create)));

        let intents = context.intents();
        prop_assert_eq!(intents.len(), 1);
        let event = &intents[0].event;
        prop_assert_eq!(&event.title, title.trim());
        prop_assert_eq!(&event.description, description.trim());
        prop_assert_eq!(&event.start_time, &hhmm(start));
        prop_assert_eq!(&event.end_time, &hhmm(end));
        prop_assert_eq!(event.label, label);
        prop_assert_eq!(event.day, dates::march_10_2024());
    }

    /// Property: blank titles never dispatch and leave the fields as they were
    #[test]
    fn prop_blank_title_emits_nothing(title in "[ \t\n]{0,10}") {
        let mut form = blank_form();
        form.title = title;
        let before = fields(&form);

        let mut context = RecordingContext::new();
        let result = form.submit(&mut context, &IdGenerator::new(), Instant::now());

        prop_assert_eq!(result, Err(FormError::EmptyTitle));
        prop_assert!(context.calls.is_empty());
        prop_assert_eq!(fields(&form), before);
        prop_assert!(form.is_open());
    }

    /// Property: an end at or before the start never dispatches
    #[test]
    fn prop_inverted_range_emits_nothing(
        start in 0u32..(24 * 60),
        back in 0u32..(24 * 60),
    ) {
        let end = start.saturating_sub(back);

        let mut form = blank_form();
        form.title = "Meeting".to_string();
        form.start_time = hhmm(start);
        form.end_time = hhmm(end);
        let before = fields(&form);

        let mut context = RecordingContext::new();
        let result = form.submit(&mut context, &IdGenerator::new(), Instant::now());

        prop_assert_eq!(result, Err(FormError::InvalidTimeRange));
        prop_assert!(context.calls.is_empty());
        prop_assert_eq!(fields(&form), before);
    }

    /// Property: editing always updates under the original id
    #[test]
    fn prop_edit_keeps_original_id(title in "[A-Za-z]{1,12}", label in label_strategy()) {
        let lunch = events::lunch();
        let mut form = EventDialogState::open(
            dates::march_10_2024(),
            Some(&lunch),
            dates::nine_am(),
            &Settings::default(),
        );
        form.title = title;
        form.select_label(label);

        let mut context = RecordingContext::new();
        form.submit(&mut context, &IdGenerator::new(), Instant::now()).unwrap();

        let intents = context.intents();
        prop_assert_eq!(intents.len(), 1);
        prop_assert_eq!(intents[0].kind, IntentKind::Update);
        prop_assert_eq!(intents[0].event.id, lunch.id);
    }

    /// Property: ids of created events are never reused within a session
    #[test]
    fn prop_created_ids_are_unique(count in 1usize..40) {
        let ids = IdGenerator::new();
        let mut seen = HashSet::new();

        for n in 0..count {
            let mut form = blank_form();
            form.title = format!("Event {}", n);
            let mut context = RecordingContext::new();
            form.submit(&mut context, &ids, Instant::now()).unwrap();
            prop_assert!(seen.insert(context.intents()[0].event.id));
        }
    }
}
