//! Delete confirmation dialog.

use egui::{Color32, RichText, Ui, Window};
use userdir_business::{User, UserId};

use super::action::DirectoryAction;

/// Asks before deleting `id`. Closing the window counts as a no.
pub fn delete_confirm_modal(ui: &mut Ui, id: UserId, user: Option<&User>) -> Option<DirectoryAction> {
    let mut open = true;
    let mut action = None;

    Window::new("Delete user")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.colored_label(Color32::from_rgb(255, 165, 0), "⚠️ Warning");
            ui.add_space(4.0);
            match user {
                Some(user) => ui.label(format!(
                    "Are you sure you want to delete {} (#{id})?",
                    user.name
                )),
                None => ui.label(format!("Are you sure you want to delete user #{id}?")),
            };
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Yes, delete").color(Color32::RED))
                    .clicked()
                {
                    action = Some(DirectoryAction::ConfirmDelete);
                }

                if ui.button("Keep user").clicked() {
                    action = Some(DirectoryAction::CancelDelete);
                }
            });
        });

    if !open {
        action = Some(DirectoryAction::CancelDelete);
    }

    action
}
