use lift_arrivals::ArrivalError;
use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] LiftError),

    #[error("arrival process failed: {0}")]
    Arrival(#[from] ArrivalError),

    #[error("no passenger reached their floor, so there are no wait times to summarize")]
    EmptySampleSet,
}

pub type SimResult<T> = Result<T, SimError>;
