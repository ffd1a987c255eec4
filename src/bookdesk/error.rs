use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookdeskError {
    #[error("The id cannot be empty")]
    EmptyId,

    #[error("A client with id {0} already exists")]
    DuplicateClientId(String),

    #[error("A booking with id {0} already exists")]
    DuplicateBookingId(String),

    #[error("No client with id {0}")]
    ClientNotFound(String),

    #[error("No booking with id {0}")]
    BookingNotFound(String),

    #[error("Client {0} does not exist")]
    UnknownClient(String),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time {0:?}, expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl BookdeskError {
    /// True for rejected user input. These never leave a partial mutation behind.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookdeskError::EmptyId
                | BookdeskError::DuplicateClientId(_)
                | BookdeskError::DuplicateBookingId(_)
                | BookdeskError::ClientNotFound(_)
                | BookdeskError::BookingNotFound(_)
                | BookdeskError::UnknownClient(_)
                | BookdeskError::InvalidDate(_)
                | BookdeskError::InvalidTime(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookdeskError>;
