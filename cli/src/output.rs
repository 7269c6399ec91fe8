//! Styled terminal output.

use std::fmt::Display;

use console::{Term, style};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use userdir_business::User;

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    pub fn newline(&self) {
        drop(self.term.write_line(""));
    }

    pub fn header(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&style(message).bold().cyan().to_string()),
        );
    }

    /// Print a labeled value with indentation.
    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        drop(
            self.term
                .write_line(&format!("{spaces}{}: {}", style(label).dim(), value)),
        );
    }

    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print a total count line.
    pub fn total(&self, label: impl Display, count: usize) {
        drop(
            self.term
                .write_line(&format!("{}: {}", style(label).dim(), style(count).bold())),
        );
    }

    /// The whole collection as a table, or an empty-state line.
    pub fn users(&self, users: &[User]) {
        if users.is_empty() {
            self.dim("No users registered yet.");
            return;
        }
        self.print(users_table(users));
        self.total("Total", users.len());
    }

    pub fn user(&self, user: &User) {
        self.header(format!("User #{}", user.id));
        self.labeled_indent("Name", &user.name, 2);
        self.labeled_indent("Email", &user.email, 2);
        self.labeled_indent("Phone", &user.phone_number, 2);
    }
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

pub fn users_table(users: &[User]) -> String {
    let rows: Vec<UserRow> = users
        .iter()
        .map(|user| UserRow {
            id: user.id.0,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone_number.clone(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use userdir_business::UserId;

    use super::*;

    #[test]
    fn table_has_a_row_per_user() {
        let users = vec![
            User {
                id: UserId(1),
                name: "Alice".to_owned(),
                email: "alice@x.com".to_owned(),
                phone_number: "111".to_owned(),
            },
            User {
                id: UserId(2),
                name: "Bob".to_owned(),
                email: "bob@x.com".to_owned(),
                phone_number: "222".to_owned(),
            },
        ];

        let table = users_table(&users);

        assert!(table.contains("Phone"));
        assert!(table.contains("alice@x.com"));
        assert!(table.contains("Bob"));
        // Top border, header, separator, two rows, bottom border.
        assert_eq!(table.lines().count(), 6);
    }
}
