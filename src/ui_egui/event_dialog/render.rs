use std::time::Instant;

use egui::{Color32, RichText};

use crate::models::event::IntentKind;
use crate::services::context::EventDispatcher;
use crate::services::id::IdGenerator;
use crate::utils::date::format_day_header;

use super::dismiss::DismissPhase;
use super::state::EventDialogState;
use super::widgets::{render_label_swatches, render_time_field};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventDialogResult {
    /// Intent handed to the dispatcher this frame
    pub dispatched: Option<IntentKind>,
    /// The modal finished closing this frame
    pub closed: bool,
}

/// User actions collected while drawing the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogAction {
    Save,
    Delete,
    Close,
}

const DIALOG_WIDTH: f32 = 420.0;

pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    dispatcher: &mut dyn EventDispatcher,
    ids: &IdGenerator,
) -> EventDialogResult {
    let now = Instant::now();
    let mut result = EventDialogResult::default();

    if state.is_closed() {
        return result;
    }

    let mut action = None;
    if state.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = Some(DialogAction::Close);
    }

    let opacity = state.opacity(now);
    let title = if state.is_editing() { "Edit Event" } else { "New Event" };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            ui.add_enabled_ui(state.is_open(), |ui| {
                if let Some(header_action) = render_header(ui, state) {
                    action = Some(header_action);
                }
                ui.separator();
                render_error_banner(ui, state);
                render_fields(ui, state);
                ui.add_space(8.0);
                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save Event").clicked() {
                        action = Some(DialogAction::Save);
                    }
                });
            });
        });

    if let Some(action) = action {
        result.dispatched = apply_action(state, action, dispatcher, ids, now);
    }

    match state.advance(dispatcher, now) {
        DismissPhase::Closing { deadline } => {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        DismissPhase::Closed => result.closed = true,
        DismissPhase::Open => {}
    }

    result
}

/// Route a button or key action to the form. Returns the intent kind dispatched, if any.
fn apply_action(
    state: &mut EventDialogState,
    action: DialogAction,
    dispatcher: &mut dyn EventDispatcher,
    ids: &IdGenerator,
    now: Instant,
) -> Option<IntentKind> {
    match action {
        DialogAction::Save => state.submit(dispatcher, ids, now).ok().flatten(),
        DialogAction::Delete => state.delete(dispatcher, now).ok().flatten(),
        DialogAction::Close => {
            state.close(now);
            None
        }
    }
}

fn render_header(ui: &mut egui::Ui, state: &EventDialogState) -> Option<DialogAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.label(RichText::new(format_day_header(state.selected_day)).color(Color32::GRAY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").on_hover_text("Close").clicked() {
                action = Some(DialogAction::Close);
            }
            if state.is_editing()
                && ui
                    .button(RichText::new("🗑").color(Color32::from_rgb(220, 38, 38)))
                    .on_hover_text("Delete Event")
                    .clicked()
            {
                action = Some(DialogAction::Delete);
            }
        });
    });
    action
}

fn render_error_banner(ui: &mut egui::Ui, state: &EventDialogState) {
    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

fn render_fields(ui: &mut egui::Ui, state: &mut EventDialogState) {
    let mut edited = false;

    let title = ui.add(
        egui::TextEdit::singleline(&mut state.title)
            .hint_text("Event Title")
            .font(egui::TextStyle::Heading)
            .desired_width(f32::INFINITY),
    );
    edited |= title.changed();
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("🕒");
        edited |= render_time_field(ui, "Start", &mut state.start_time);
        ui.add_space(12.0);
        edited |= render_time_field(ui, "End", &mut state.end_time);
    });
    ui.add_space(8.0);

    let description = ui.add(
        egui::TextEdit::multiline(&mut state.description)
            .hint_text("Add a description (optional)")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    edited |= description.changed();
    ui.add_space(8.0);

    ui.label(RichText::new("Select Label").color(Color32::GRAY));
    if let Some(label) = render_label_swatches(ui, state.selected_label) {
        state.select_label(label);
    }

    if edited {
        state.error_message = None;
    }
}
