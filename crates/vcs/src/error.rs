use thiserror::Error;

pub type Result<T> = std::result::Result<T, VcsError>;

#[derive(Error, Debug)]
pub enum VcsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("git error: {0}")]
    Git(String),
}
