use bk_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate sample configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Format(#[from] CoreError),
}

pub type RateResult<T> = Result<T, RateError>;
