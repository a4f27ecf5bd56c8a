use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum GenbaApiError {
    /// The upstream answered with a non-success status; the body is kept verbatim.
    Upstream(StatusCode, String),
    Internal(ApiError),
}

impl GenbaApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GenbaApiError::Upstream(status, _) => Some(*status),
            GenbaApiError::Internal(_) => None,
        }
    }
}

impl From<ApiError> for GenbaApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                GenbaApiError::Upstream(status, detail)
            }
            e => GenbaApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for GenbaApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenbaApiError::Internal(e) => write!(f, "Internal error: {}", e),
            GenbaApiError::Upstream(status, detail) if detail.is_empty() => {
                write!(f, "({}) upstream request failed", status)
            }
            GenbaApiError::Upstream(status, detail) => write!(f, "({}) {}", status, detail),
        }
    }
}

impl std::error::Error for GenbaApiError {}
