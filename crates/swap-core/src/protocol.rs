use serde::{Deserialize, Serialize};

/// Query accepted by `GET /puzzle`. Values are raw so the server can clamp them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PuzzleQuery {
    pub lang: Option<String>,
    pub size: Option<String>,
    pub profile: Option<String>,
}

/// JSON error body returned by the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(code: &str) -> Self {
        ErrorBody {
            error: code.to_string(),
        }
    }
}
