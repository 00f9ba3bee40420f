use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("duplicate project id `{0}`")]
    DuplicateProjectId(String),
    #[error("invalid project data: {0}")]
    ProjectData(#[from] serde_json::Error),
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("a submission is already in progress")]
    NotIdle,
}

pub type Result<T> = std::result::Result<T, FolioError>;
