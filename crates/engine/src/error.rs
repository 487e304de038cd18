use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Mapping parse error: {0}")]
    MappingParse(#[from] serde_yaml::Error),

    #[error("Invalid mapping shape: {0}")]
    MappingShape(String),
}
