//! The whole directory screen: heading, error banner, form and table.

use egui::{Color32, Frame, Margin, Response, ScrollArea, Stroke, Ui};
use tokio::runtime::Handle;
use userdir_business::UserDirectoryClient;

use super::action::{DirectoryAction, apply_action};
use super::banner::{error_banner, fetched_label, record_badge};
use super::form::user_form;
use super::modals::delete_confirm_modal;
use super::table::users_table;

const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Draws the directory and applies whatever the user clicked.
pub fn user_directory_panel(
    client: &mut UserDirectoryClient,
    runtime: &Handle,
    ui: &mut Ui,
) -> Response {
    let mut action: Option<DirectoryAction> = None;

    let response = ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("User Directory");
            record_badge(ui, client.state().users().len());
            fetched_label(ui, client.state().last_fetch());
        });
        error_banner(ui, client.state().error());
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            let mode = client.state().mode();
            if let Some(clicked) = user_form(&mut columns[0], client.form_mut(), mode) {
                action = Some(clicked);
            }

            let ui = &mut columns[1];
            let state = client.state();
            if state.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading data...");
                });
            } else if state.users().is_empty() {
                ui.label("No users registered yet.");
            } else {
                Frame::NONE
                    .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                    .inner_margin(Margin::ZERO)
                    .show(ui, |ui| {
                        ScrollArea::horizontal().show(ui, |ui| {
                            let editing = state.mode().edit_target();
                            if let Some(clicked) = users_table(ui, state.users(), editing) {
                                action = Some(clicked);
                            }
                        });
                    });
            }
        });
    });

    if let Some(id) = client.state().pending_delete()
        && let Some(clicked) = delete_confirm_modal(ui, id, client.state().user(id))
    {
        action = Some(clicked);
    }

    if let Some(action) = action {
        apply_action(client, runtime, action);
    }

    response.response
}
