use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint: `{ "error": "<message>" }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
