use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid value for label '{key}': {value:?}")]
    InvalidLabel { key: &'static str, value: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
