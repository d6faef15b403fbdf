//! The dispatch decision.

use log::{debug, trace};

use lift_core::Floor;

use crate::{CallQueue, CarView, DispatchResult, Passenger, comparator, lowest};

/// Choose and commit the next target floor for `car`.
///
/// Returns `Ok(Some(floor))` after `car.commit(floor)` has been called, or
/// `Ok(None)` when no decision is possible (car moving, or idle with nothing
/// queued).  In the idle branch exactly one call is removed from `queue`;
/// the loaded branch never touches the queue.
///
/// # Errors
///
/// [`DispatchError::EmptyInput`][crate::DispatchError::EmptyInput] if the
/// passenger destinations cannot be reduced to a floor.  Neither `car` nor `queue` has been modified when
/// this is returned.
pub fn decide<C, Q>(car: &mut C, queue: &mut Q) -> DispatchResult<Option<Floor>>
where
    C: CarView + ?Sized,
    Q: CallQueue + ?Sized,
{
    let Some(resting) = car.resting_floor() else {
        trace!("car is moving; no decision this tick");
        return Ok(None);
    };

    let target = if car.passengers().is_empty() {
        let Some(call) = queue.take_oldest() else {
            trace!("idle at {resting} with no pending calls");
            return Ok(None);
        };
        debug!("idle at {resting}: fetching oldest call at {call}");
        call
    } else {
        let target = passenger_target(car.passengers(), resting)?;
        debug!(
            "loaded at {resting} with {} passenger(s): heading for {target}",
            car.passengers().len()
        );
        target
    };

    car.commit(target);
    Ok(Some(target))
}

/// The floor a loaded car at `resting` should head for next.
///
/// If even the lowest passenger destination is above `resting`, the highest
/// destination wins; otherwise the lowest does.  The result is always one of
/// the passengers' destinations.
///
/// # Errors
///
/// [`DispatchError::EmptyInput`][crate::DispatchError::EmptyInput] if
/// `passengers` is empty.
pub fn passenger_target<P: Passenger>(passengers: &[P], resting: Floor) -> DispatchResult<Floor> {
    let mut destinations: Vec<Floor> =
        passengers.iter().map(P::destination_floor).collect();

    let closest = lowest(&destinations)?;
    let moving_up = closest.is_above(resting);

    destinations.sort_by(comparator(false));
    if moving_up {
        destinations.sort_by(comparator(true));
    }

    // `lowest` succeeded, so there is a first element.
    Ok(destinations[0])
}
