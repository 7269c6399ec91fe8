//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use userdir_business::User;

use super::cells::{render_action_buttons, render_id_cell, render_text_cell};
use crate::widgets::users::DirectoryAction;

/// Renders one user. Returns the row button that was clicked, if any.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) -> Option<DirectoryAction> {
    let mut action = None;

    row.col(|ui| {
        render_id_cell(ui, user.id);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.name);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.email);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_text_cell(ui, &user.phone_number);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        action = render_action_buttons(ui, user.id);
        draw_cell_bottom_border(ui);
    });

    action
}

fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter()
        .hline(rect.x_range(), rect.bottom(), Stroke::new(1.0, color));
}
