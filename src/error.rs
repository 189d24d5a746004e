//! Error types for the Kanisa content core
//!
//! All errors use thiserror for structured error handling. Every error is
//! recovered at the editor or view boundary and surfaced as a notification;
//! nothing here is allowed to crash a view.

use thiserror::Error;

use crate::notify::Notification;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored collection is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("The image must be less than 10MB (got {size} bytes)")]
    FileTooLarge { size: u64 },

    #[error("Please upload an image file (got \"{0}\")")]
    InvalidFileType(String),

    #[error("Failed to load the uploaded image: {0}")]
    LoadFailed(String),

    #[error("Failed to process the uploaded image: {0}")]
    ProcessingFailed(String),

    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("You don't have permission to {0}")]
    PermissionDenied(String),

    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Map this error to the toast shown to the user
    pub fn notification(&self) -> Notification {
        let title = match self {
            AppError::FileTooLarge { .. } => "File too large",
            AppError::InvalidFileType(_) => "Invalid file type",
            AppError::LoadFailed(_) => "Error loading image",
            AppError::ProcessingFailed(_) => "Error processing image",
            AppError::Validation { .. } => "Validation Error",
            _ => "Error",
        };
        Notification::error(title, self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;

    #[test]
    fn notifications_carry_variant_titles() {
        let err = AppError::FileTooLarge {
            size: 11 * 1024 * 1024,
        };
        let note = err.notification();
        assert_eq!(note.title, "File too large");
        assert_eq!(note.kind, NotificationKind::Error);

        let err = AppError::validation("title", "Please fill in all required fields");
        assert_eq!(err.notification().title, "Validation Error");
    }
}
