//! Wire types for the users collection endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
///
/// The client treats it as opaque: it is only ever echoed back in
/// `PUT`/`DELETE` paths and compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A user record as returned by `GET {base}/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Request body for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_uses_camel_case_phone_number() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "A",
            "email": "a@x.com",
            "phoneNumber": "1"
        }))
        .expect("user should deserialize");

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.phone_number, "1");
    }

    #[test]
    fn payload_serializes_without_id() {
        let payload = UserPayload {
            name: "B".to_owned(),
            email: "b@x.com".to_owned(),
            phone_number: "2".to_owned(),
        };

        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(
            value,
            serde_json::json!({"name": "B", "email": "b@x.com", "phoneNumber": "2"})
        );
    }

    #[test]
    fn user_id_is_transparent_on_the_wire() {
        let value = serde_json::to_value(UserId(42)).expect("id should serialize");
        assert_eq!(value, serde_json::json!(42));
        assert_eq!(UserId(42).to_string(), "42");
    }
}
