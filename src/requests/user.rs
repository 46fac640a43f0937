use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::security::Validator;

/// Body of create and update requests
///
/// Both fields are optional at the wire level so that an absent field and an
/// empty one are rejected with the same message.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
}

/// Trimmed, validated user fields ready to be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserRequestError {
    #[error("Name and email are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    pub fn validate(self) -> Result<UserFields, UserRequestError> {
        let name = required(self.name);
        let email = required(self.email);

        let (Some(name), Some(email)) = (name, email) else {
            return Err(UserRequestError::MissingFields);
        };

        if !Validator::validate_email(&email) {
            return Err(UserRequestError::InvalidEmail);
        }

        Ok(UserFields { name, email })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid user ID")]
pub struct InvalidUserId;

/// Parse the `{id}` path segment
///
/// Leading whitespace is skipped and the optional sign plus the leading run
/// of digits is taken, so `"12abc"` is 12 and `"1.5"` is 1. The segment is
/// rejected when no digit follows the sign or the value overflows `i64`.
pub fn parse_id(raw: &str) -> Result<i64, InvalidUserId> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let sign = raw.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    if digits == 0 {
        return Err(InvalidUserId);
    }

    raw[..sign + digits].parse::<i64>().map_err(|_| InvalidUserId)
}
