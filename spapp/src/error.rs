use http::status::StatusCode;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("404 Not Found")]
    NotFound,
    #[error("500 Internal Server Error")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusCode> for AppError {
    // Only convert into status known to AppError
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::NOT_FOUND => AppError::NotFound,
            _ => AppError::InternalServerError,
        }
    }
}

#[cfg(feature = "ssr")]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Request(#[from] http::Error),
    #[error(transparent)]
    Body(#[from] axum::Error),
    #[error("rendered page is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("rendering {path} returned {status}")]
    Status {
        path: String,
        status: StatusCode,
    },
}
