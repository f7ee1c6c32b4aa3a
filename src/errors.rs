use core::fmt;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Lock(String),
    NotFound(String),
    ParseCommand(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Lock(err.to_string())
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while reading input or writing output: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Could not render snapshot as JSON: {}", e)
            }
            AppError::Lock(msg) => {
                write!(f, "Contact store lock poisoned: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
        }
    }
}

impl std::error::Error for AppError {}
