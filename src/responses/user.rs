use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::WriteSummary;

/// Body of a successful create
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserStored {
    #[schema(example = "User added successfully")]
    pub message: String,
    pub result: WriteSummary,
}
