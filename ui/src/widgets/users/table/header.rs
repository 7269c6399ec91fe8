//! Table header rendering for the users table.

use egui::Ui;
use egui_extras::TableRow;

const HEADERS: [&str; 5] = ["ID", "Name", "Email", "Phone", "Actions"];

#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}
