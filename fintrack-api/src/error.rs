use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum FintrackApiError {
    Api(StatusCode, ErrorDetail),
    Internal(ApiError),
}

impl From<ApiError> for FintrackApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, body) | ApiError::ServerError(status, body) => {
                let detail = serde_json::from_str::<ErrorResponse>(&body)
                    .map(|response| response.error)
                    .unwrap_or_else(|_| ErrorDetail::unparsed(status, body));
                FintrackApiError::Api(status, detail)
            }
            e => FintrackApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for FintrackApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FintrackApiError::Internal(e) => write!(f, "Internal error: {}", e),
            FintrackApiError::Api(status, detail) => {
                write!(f, "({}) {}: {}", status, detail.name, detail.detail)
            }
        }
    }
}

impl std::error::Error for FintrackApiError {}

impl FintrackApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FintrackApiError::Api(status, _) => Some(*status),
            FintrackApiError::Internal(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub id: String,
    pub name: String,
    pub detail: String,
}

impl ErrorDetail {
    /// Stand-in for error bodies that are not the backend's JSON envelope
    /// (proxies, HTML error pages).
    fn unparsed(status: StatusCode, body: String) -> Self {
        Self {
            id: status.as_u16().to_string(),
            name: status
                .canonical_reason()
                .unwrap_or("unknown_error")
                .to_string(),
            detail: body,
        }
    }
}
