use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeonotesError {
    #[error("Not in a geonotes project. Run 'geonotes init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .geonotes/ to reinitialize.")]
    AlreadyInitialized,

    #[error("{0}")]
    Validation(String),

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Location(String),

    #[error("View error: {0}")]
    View(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl GeonotesError {
    pub fn validation(message: impl Into<String>) -> Self {
        GeonotesError::Validation(message.into())
    }

    /// True for errors the user should see as a blocking notice.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GeonotesError::Validation(_) | GeonotesError::Location(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GeonotesError>;
