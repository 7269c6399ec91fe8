use chrono::{DateTime, Utc};
use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

const ERROR_BG: Color32 = Color32::from_rgb(253, 236, 236);
const ERROR_BORDER: Color32 = Color32::from_rgb(230, 160, 160);
const BADGE_BG: Color32 = Color32::from_rgb(235, 240, 250);

/// Shows the current error, if any. Nothing is drawn otherwise.
pub fn error_banner(ui: &mut Ui, error: Option<&str>) {
    let Some(error) = error else {
        return;
    };

    Frame::NONE
        .fill(ERROR_BG)
        .stroke(Stroke::new(1.0, ERROR_BORDER))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        });
}

/// Small "N records" pill next to the heading.
pub fn record_badge(ui: &mut Ui, count: usize) {
    Frame::NONE
        .fill(BADGE_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("{count} records")).small());
        });
}

/// "Updated HH:MM:SS UTC" once the collection has been fetched at least once.
pub fn fetched_label(ui: &mut Ui, fetched_at: Option<DateTime<Utc>>) {
    if let Some(at) = fetched_at {
        ui.label(
            RichText::new(format!("Updated {}", at.format("%H:%M:%S UTC")))
                .small()
                .weak(),
        );
    }
}
