//! Request/query types (Deserialize)

use serde::Deserialize;

use crate::api_error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNameQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl FullNameQuery {
    /// Both names are required; the first missing one is reported.
    pub fn into_parts(self) -> Result<(String, String), ApiError> {
        let first_name = self.first_name.ok_or_else(|| missing("firstName"))?;
        let last_name = self.last_name.ok_or_else(|| missing("lastName"))?;
        Ok((first_name, last_name))
    }
}

fn missing(name: &str) -> ApiError {
    ApiError::BadRequest(format!("Required query parameter '{name}' is missing"))
}
