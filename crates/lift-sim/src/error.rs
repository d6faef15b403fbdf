use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("{what} length {got} does not match car count {expected}")]
    CarCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("arrival parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
