use std::fmt;

/// When the buy-count signal is updated relative to the order write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceMode {
    /// Durable buy count, then cache counter, then the order write. A reader who
    /// sees the order can rely on both counters already including it.
    ///
    /// The counters must never be touched after the order write in this mode;
    /// that ordering is the one that deadlocked against concurrent placements.
    Consistent,
    /// Order write first. The cache counter is bumped in the background once the
    /// write has completed, so the order can be visible before the counter is.
    Deferred,
}

impl fmt::Display for PlaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceMode::Consistent => f.write_str("consistent"),
            PlaceMode::Deferred => f.write_str("deferred"),
        }
    }
}
