//! Hardware fault accounting.
//!
//! An unattended sounder tolerates an occasional missed click better
//! than a crash, so single faults are logged and the cycle continues.
//! Three consecutive faults within one prayer mean the output is
//! genuinely wedged: the current prayer is abandoned and the run
//! resumes from the next one.

/// Consecutive faults within one prayer that trigger escalation.
pub const CONSECUTIVE_FAULT_LIMIT: u32 = 3;

/// Tracks sink faults across a run.
///
/// The consecutive counter resets on every successful sink operation
/// and at each prayer boundary; the lifetime total is never cleared
/// and exists for diagnostics.
#[derive(Debug, Default)]
pub struct FaultTracker {
    consecutive: u32,
    total: u64,
}

impl FaultTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fault. Returns true when the consecutive limit is
    /// reached and the current prayer should be abandoned.
    #[inline]
    pub fn record(&mut self) -> bool {
        self.consecutive += 1;
        self.total += 1;
        self.consecutive >= CONSECUTIVE_FAULT_LIMIT
    }

    /// Record a successful sink operation, breaking any fault streak.
    #[inline]
    pub fn succeed(&mut self) {
        self.consecutive = 0;
    }

    /// Start a fresh prayer: the streak resets, the total survives.
    #[inline]
    pub fn rearm(&mut self) {
        self.consecutive = 0;
    }

    /// Faults seen since the run started.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }
}
