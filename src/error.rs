use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum VetrinaError {
    #[error("Backend request failed: {0}")]
    Request(String),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    #[error("Session store error: {0}")]
    SessionStore(String),
}

pub type Result<T> = std::result::Result<T, VetrinaError>;

impl From<reqwest::Error> for VetrinaError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            VetrinaError::Decode(e.to_string())
        } else {
            VetrinaError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for VetrinaError {
    fn from(e: serde_json::Error) -> Self {
        VetrinaError::Decode(e.to_string())
    }
}

impl VetrinaError {
    /// True when the backend answered but rejected the request, as opposed
    /// to the request never completing.
    pub fn is_status(&self) -> bool {
        matches!(self, VetrinaError::Status { .. })
    }
}
