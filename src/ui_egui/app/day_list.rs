//! Central panel: day navigation and the visible events of the selected day.

use super::CalendarApp;
use crate::models::event::EventId;
use crate::ui_egui::palette::{label_background, label_color};
use crate::utils::date::format_day_header;
use chrono::{Duration, Local};
use egui::{RichText, Stroke};

impl CalendarApp {
    pub(super) fn render_day_list(&mut self, ui: &mut egui::Ui) {
        let day = self.store.selected_day();
        let modal_open = self.event_dialog_state.is_some();

        ui.add_enabled_ui(!modal_open, |ui| {
            ui.horizontal(|ui| {
                if ui.button("➕ Create").clicked() {
                    self.store.open_new_event();
                }
                ui.separator();
                if ui.small_button("◀").on_hover_text("Previous day").clicked() {
                    self.store.select_day(day - Duration::days(1));
                }
                if ui.button("Today").clicked() {
                    self.store.select_day(Local::now().date_naive());
                }
                if ui.small_button("▶").on_hover_text("Next day").clicked() {
                    self.store.select_day(day + Duration::days(1));
                }
                ui.heading(format_day_header(day));
            });
            ui.separator();

            let mut clicked: Option<EventId> = None;
            let events = self.store.events_for_day(day);
            if events.is_empty() {
                ui.label(RichText::new("No events").weak());
            }

            for event in events {
                let frame = egui::Frame::none()
                    .fill(label_background(event.label))
                    .stroke(Stroke::new(1.0, label_color(event.label)))
                    .rounding(4.0)
                    .inner_margin(6.0);
                let response = frame
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(format!(
                                "{}–{}  {}",
                                event.start_time, event.end_time, event.title
                            ))
                            .strong(),
                        );
                        if !event.description.is_empty() {
                            ui.label(RichText::new(&event.description).small());
                        }
                    })
                    .response
                    .interact(egui::Sense::click());

                if response.clicked() {
                    clicked = Some(event.id);
                }
                ui.add_space(4.0);
            }

            if let Some(id) = clicked {
                self.store.open_event(id);
            }
        });
    }
}
