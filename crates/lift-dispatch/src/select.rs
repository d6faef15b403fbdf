use lift_core::Floor;

use crate::{DispatchError, DispatchResult};

/// The numerically lowest floor in `floors`.
///
/// # Errors
///
/// [`DispatchError::EmptyInput`] if `floors` is empty.
pub fn lowest(floors: &[Floor]) -> DispatchResult<Floor> {
    floors.iter().copied().min().ok_or(DispatchError::EmptyInput)
}
