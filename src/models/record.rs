//! Record entity and its request payload

use crate::error::{validation_error, AppError};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A stored record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body accepted by create and update.
///
/// Missing or `null` fields decode as empty strings so that they are
/// reported by [`RecordPayload::check`] rather than as malformed JSON.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RecordPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "name required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "email required"))]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RecordPayload {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Reject empty fields, `name` first.
    pub fn check(&self) -> Result<(), AppError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let fields = errors.field_errors();
        let field = if fields.contains_key("name") { "name" } else { "email" };
        Err(validation_error(format!("{field} required")))
    }

    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parse a path id. Anything that is not an `i64` is a client error.
pub fn parse_record_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid id".to_string()))
}
