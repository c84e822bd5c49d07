use egui::{Color32, RichText};

use crate::models::label::Label;
use crate::ui_egui::palette::label_color;

const SWATCH_SIZE: f32 = 26.0;

/// Render an `HH:MM` text field. Returns true if the text changed.
pub fn render_time_field(ui: &mut egui::Ui, caption: &str, value: &mut String) -> bool {
    ui.label(RichText::new(caption).color(Color32::GRAY));
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(56.0)
            .hint_text("HH:MM"),
    )
    .changed()
}

/// Render one round swatch per label. Returns the label the user clicked, if any.
pub fn render_label_swatches(ui: &mut egui::Ui, selected: Label) -> Option<Label> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        for label in Label::ALL {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                egui::Sense::click(),
            );
            let mut color = label_color(label);
            if response.hovered() {
                color = color.gamma_multiply(0.8);
            }

            let painter = ui.painter();
            painter.circle_filled(rect.center(), SWATCH_SIZE / 2.0, color);
            if label == selected {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "✓",
                    egui::FontId::proportional(14.0),
                    Color32::WHITE,
                );
            }

            let response = response.on_hover_text(format!("Select {} label", label.display_name()));
            if response.clicked() {
                clicked = Some(label);
            }
        }
    });

    clicked
}
