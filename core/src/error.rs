use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate issue id '{id}' in seed data")]
    DuplicateIssueId { id: String },

    #[error("Keyword route #{position} has a blank keyword")]
    BlankKeyword { position: usize },

    #[error("Viewer '{name}' not found in user directory")]
    UnknownViewer { name: String },

    #[error("No viewer is signed in")]
    NotSignedIn,

    #[error("Invalid {field} filter value '{value}'")]
    InvalidFilter { field: &'static str, value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
