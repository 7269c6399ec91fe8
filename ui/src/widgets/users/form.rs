//! The create/edit form.

use egui::{Button, RichText, TextEdit, Ui};
use userdir_business::{Mode, UserForm};

use super::action::DirectoryAction;

const FIELD_WIDTH: f32 = 240.0;

/// Draws the form and returns the button that was pressed, if any.
///
/// The title and submit label follow `mode`; Cancel only shows while editing.
pub fn user_form(ui: &mut Ui, form: &mut UserForm, mode: Mode) -> Option<DirectoryAction> {
    let mut action = None;

    ui.vertical(|ui| {
        let title = if mode.is_editing() { "Edit user" } else { "New user" };
        ui.label(RichText::new(title).strong().size(16.0));
        ui.add_space(8.0);

        text_field(ui, "Full name", "Jane Doe", &mut form.name);
        text_field(ui, "Email", "jane@example.com", &mut form.email);
        text_field(ui, "Phone number", "555-0100", &mut form.phone_number);

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let submit = if mode.is_editing() { "Update" } else { "Save" };
            if ui.add(Button::new(submit)).clicked() {
                action = Some(DirectoryAction::Submit);
            }
            if mode.is_editing() && ui.button("Cancel").clicked() {
                action = Some(DirectoryAction::CancelEdit);
            }
        });
    });

    action
}

fn text_field(ui: &mut Ui, label: &str, hint: &str, value: &mut String) {
    let label = ui.label(label);
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(FIELD_WIDTH),
    )
    .labelled_by(label.id);
    ui.add_space(4.0);
}
