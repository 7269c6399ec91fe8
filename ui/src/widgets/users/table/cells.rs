//! Cell contents for the users table.

use egui::{RichText, Ui};
use userdir_business::UserId;

use crate::widgets::users::DirectoryAction;

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: UserId) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(id.to_string()).monospace());
    });
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Edit and Delete buttons for one row.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, id: UserId) -> Option<DirectoryAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Edit").on_hover_text("Load into the form").clicked() {
            action = Some(DirectoryAction::Edit(id));
        }
        if ui.button("Delete").on_hover_text("Delete this user").clicked() {
            action = Some(DirectoryAction::RequestDelete(id));
        }
    });
    action
}
