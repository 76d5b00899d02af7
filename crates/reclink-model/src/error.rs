use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
    #[error("unknown query type: {0}")]
    UnknownQueryType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
