use thiserror::Error;

/// A precondition violation in the host data.  Fatal to one decision call
/// only: it is always raised before the queue or the car is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("cannot select a floor from an empty sequence")]
    EmptyInput,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
