//! Label filter checklist shown in the side panel.

use egui::{Color32, RichText};

use crate::models::label::{Label, LabelFilterEntry};
use crate::services::context::LabelFilterSink;
use crate::ui_egui::palette::filter_fill;

/// One rendered row of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRow {
    pub label: Label,
    pub display_name: &'static str,
    pub enabled: bool,
}

pub struct LabelFilterPanel;

impl LabelFilterPanel {
    /// Rows for every entry, in the order the context keeps them.
    pub fn rows(labels: &[LabelFilterEntry]) -> Vec<LabelRow> {
        labels
            .iter()
            .map(|entry| LabelRow {
                label: entry.name,
                display_name: entry.name.display_name(),
                enabled: entry.enabled,
            })
            .collect()
    }

    /// Ask the owner to flip `name`. Returns the requested state, or None if
    /// the label is not in the list.
    pub fn toggle(
        labels: &[LabelFilterEntry],
        name: Label,
        sink: &mut dyn LabelFilterSink,
    ) -> Option<bool> {
        let Some(entry) = labels.iter().find(|entry| entry.name == name) else {
            log::warn!("Ignoring toggle for label {} not in the filter list", name);
            return None;
        };

        let enabled = !entry.enabled;
        sink.set_label_enabled(name, enabled);
        Some(enabled)
    }
}

/// Draw the checklist. Returns the label the user clicked this frame.
pub fn render_label_filter_panel(ui: &mut egui::Ui, rows: &[LabelRow]) -> Option<Label> {
    let mut clicked = None;

    ui.label(RichText::new("Labels").strong().color(Color32::GRAY));
    ui.separator();

    for row in rows {
        let response = ui
            .horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                let fill = filter_fill(row.label, row.enabled);
                ui.painter().rect_filled(rect, 3.0, fill);
                if row.enabled {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "✓",
                        egui::FontId::proportional(12.0),
                        Color32::WHITE,
                    );
                }
                ui.label(row.display_name);
            })
            .response
            .interact(egui::Sense::click());

        if response.clicked() {
            clicked = Some(row.label);
        }
    }

    clicked
}
