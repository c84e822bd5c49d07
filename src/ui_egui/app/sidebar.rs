//! Sidebar with the label filter checklist.

use super::CalendarApp;
use crate::ui_egui::label_filter::{render_label_filter_panel, LabelFilterPanel};

impl CalendarApp {
    pub(super) fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let labels = self.store.labels().to_vec();
        let rows = LabelFilterPanel::rows(&labels);

        ui.add_enabled_ui(self.label_filters_enabled(), |ui| {
            if let Some(label) = render_label_filter_panel(ui, &rows) {
                LabelFilterPanel::toggle(&labels, label, &mut self.store);
            }
        });
    }

    /// The checklist is locked while the event modal is shown.
    fn label_filters_enabled(&self) -> bool {
        self.event_dialog_state.is_none()
    }
}
