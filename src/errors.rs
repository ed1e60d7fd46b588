use axum::http::StatusCode;
use std::fmt;

pub const MAX_NAME_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    EmptyName,
    NameTooLong(usize),
    DuplicateName(String),
    UnknownSubject(String),
    NoSubjectSelected,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter a subject name"),
            Self::NameTooLong(len) => write!(
                f,
                "Subject name is {len} characters; the limit is {MAX_NAME_LEN}"
            ),
            Self::DuplicateName(name) => write!(f, "Subject already exists: {name}"),
            Self::UnknownSubject(name) => write!(f, "No such subject: {name}"),
            Self::NoSubjectSelected => write!(f, "Select a subject first"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::EmptyName | StoreError::NameTooLong(_) => StatusCode::BAD_REQUEST,
            StoreError::DuplicateName(_) | StoreError::NoSubjectSelected => StatusCode::CONFLICT,
            StoreError::UnknownSubject(_) => StatusCode::NOT_FOUND,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
