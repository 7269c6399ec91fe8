//! The single reusable create/edit form.

use thiserror::Error;

use crate::user::{User, UserId, UserPayload};

/// Whether the form creates a new user or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Editing(UserId),
}

impl Mode {
    pub fn edit_target(self) -> Option<UserId> {
        match self {
            Self::Create => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// Text inputs bound to the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Full name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Phone number is required")]
    MissingPhoneNumber,
}

/// The request a submit turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(UserPayload),
    Update(UserId, UserPayload),
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone_number.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone_number.is_empty()
    }

    /// Checks required fields. Values are sent as typed; only emptiness is checked.
    pub fn validate(&self) -> Result<UserPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if self.phone_number.trim().is_empty() {
            return Err(FormError::MissingPhoneNumber);
        }

        Ok(UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        })
    }

    pub fn submission(&self, mode: Mode) -> Result<Submission, FormError> {
        let payload = self.validate()?;
        Ok(match mode {
            Mode::Create => Submission::Create(payload),
            Mode::Editing(id) => Submission::Update(id, payload),
        })
    }
}
