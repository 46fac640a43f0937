pub mod user;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain confirmation or error body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Message {
    #[schema(example = "User updated successfully")]
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
