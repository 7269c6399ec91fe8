//! Users table.
//!
//! - `columns`: column widths
//! - `header`: header row
//! - `row`: one user per row
//! - `cells`: cell contents

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use userdir_business::{User, UserId};

use super::action::DirectoryAction;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Draws one row per user. The row being edited is highlighted.
pub fn users_table(ui: &mut Ui, users: &[User], editing: Option<UserId>) -> Option<DirectoryAction> {
    let mut action = None;

    let mut table = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        table = table.column(column);
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    row.set_selected(editing == Some(user.id));
                    if let Some(clicked) = render_user_row(&mut row, user) {
                        action = Some(clicked);
                    }
                });
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    fn create_test_users() -> Vec<User> {
        vec![
            User {
                id: UserId(1),
                name: "alice".to_owned(),
                email: "alice@x.com".to_owned(),
                phone_number: "111".to_owned(),
            },
            User {
                id: UserId(2),
                name: "bob".to_owned(),
                email: "bob@x.com".to_owned(),
                phone_number: "222".to_owned(),
            },
        ]
    }

    fn harness(users: Vec<User>) -> Harness<'static, Vec<User>> {
        Harness::new_ui_state(
            |ui, users: &mut Vec<User>| {
                users_table(ui, users, None);
            },
            users,
        )
    }

    #[test]
    fn header_columns_exist() {
        let mut harness = harness(Vec::new());
        harness.step();

        for header in ["ID", "Name", "Phone", "Actions"] {
            assert!(
                harness.query_by_label(header).is_some(),
                "{header} header should exist"
            );
        }
    }

    #[test]
    fn one_row_per_user() {
        let mut harness = harness(create_test_users());
        harness.step();

        assert!(harness.query_by_label("alice").is_some(), "alice should be listed");
        assert!(harness.query_by_label("bob@x.com").is_some(), "bob's email should be listed");
        assert!(harness.query_by_label("222").is_some(), "bob's phone should be listed");
        assert_eq!(harness.query_all_by_label("Edit").count(), 2, "one Edit per row");
        assert_eq!(harness.query_all_by_label("Delete").count(), 2, "one Delete per row");
    }
}
