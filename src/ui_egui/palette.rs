use crate::models::label::Label;
use egui::Color32;

const DISABLED_FILL: Color32 = Color32::from_rgb(229, 231, 235);

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Solid tint used for swatches and event chips.
pub fn label_color(label: Label) -> Color32 {
    match label {
        Label::Indigo => Color32::from_rgb(99, 102, 241),
        Label::Gray => Color32::from_rgb(107, 114, 128),
        Label::Green => Color32::from_rgb(34, 197, 94),
        Label::Blue => Color32::from_rgb(59, 130, 246),
        Label::Red => Color32::from_rgb(239, 68, 68),
        Label::Purple => Color32::from_rgb(168, 85, 247),
    }
}

/// Lighter background for event chips in the day list.
pub fn label_background(label: Label) -> Color32 {
    with_alpha(label_color(label), 60)
}

/// Fill of a filter checkbox: the label tint when enabled, neutral otherwise.
pub fn filter_fill(label: Label, enabled: bool) -> Color32 {
    if enabled {
        label_color(label)
    } else {
        DISABLED_FILL
    }
}
