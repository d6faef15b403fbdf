//! Plain data row types written by output backends.

/// One committed dispatch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchRow {
    pub tick:         u64,
    pub car_id:       u32,
    /// Floor the car was resting on when it decided.
    pub from_floor:   u32,
    pub target_floor: u32,
    /// Riders aboard at decision time; 0 means the target came from the
    /// request queue.
    pub passengers:   u32,
}

/// Summary counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub waiting:       u64,
    pub riding:        u64,
    pub delivered:     u64,
    pub pending_calls: u64,
}
