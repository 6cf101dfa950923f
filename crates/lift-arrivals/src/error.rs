use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArrivalError {
    #[error("degenerate sampling distribution: {0}")]
    SamplingDegenerate(String),

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
