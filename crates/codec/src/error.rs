use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("frontmatter block opened but never closed")]
    Unterminated,

    #[error("frontmatter is not a mapping")]
    NotAMapping,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
