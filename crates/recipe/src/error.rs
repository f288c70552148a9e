use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("catalog unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog answered with status {0}")]
    Status(u16),

    #[error("malformed catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Message shown to the user; details go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validate(_) => "Please enter something to search for.",
            _ => "Failed to fetch recipes. Please try again.",
        }
    }
}
