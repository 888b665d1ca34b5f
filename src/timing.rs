//! Pulse timing for Morse transmission.
//!
//! Two halves, deliberately separate:
//! - [`expand`] is a pure transform from symbols to timed
//!   [`PulseEvent`]s. No clock, no sleeping, fully testable.
//! - [`Pacer`] owns real time. The real-time pacer sleeps toward an
//!   absolute deadline (`target = previous target + duration`) so
//!   scheduling overhead never accumulates into drift over a full
//!   ~90 minute cycle.
//!
//! Standard ratios, all derived from one base unit:
//! dit 1, dah 3, element gap 1, character gap 3, word gap 7.

use std::time::{Duration, Instant};

use crate::config::ConfigError;
use crate::morse::MorseSymbol;

/// Base Morse unit in milliseconds. All pulse durations are fixed
/// multiples of it. 80 ms ≈ 15 WPM, a contemplative pace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingUnit {
    ms: u64,
}

impl TimingUnit {
    /// Wrap a millisecond value. Validity (`ms > 0`) is enforced by
    /// [`expand`] and by config validation, so an invalid unit can
    /// never reach the sounder.
    pub const fn from_millis(ms: u64) -> Self {
        Self { ms }
    }

    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.ms
    }

    /// Dit duration: 1 unit.
    #[inline]
    pub const fn dit_ms(self) -> u64 {
        self.ms
    }

    /// Dah duration: 3 units.
    #[inline]
    pub const fn dah_ms(self) -> u64 {
        self.ms * 3
    }

    /// Gap between elements: 1 unit.
    #[inline]
    pub const fn element_gap_ms(self) -> u64 {
        self.ms
    }

    /// Gap between characters: 3 units.
    #[inline]
    pub const fn char_gap_ms(self) -> u64 {
        self.ms * 3
    }

    /// Gap between words: 7 units.
    #[inline]
    pub const fn word_gap_ms(self) -> u64 {
        self.ms * 7
    }
}

/// One timed on/off interval of the transmission schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseEvent {
    /// True while the line is keyed (sounder armature down).
    pub signal_on: bool,
    /// Interval length, always > 0.
    pub duration_ms: u64,
}

impl PulseEvent {
    #[inline]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Expand a symbol sequence into its pulse schedule.
///
/// Pure and stateless. Consecutive gap symbols are kept as separate
/// events; merging is a sink player's business, not the scheduler's.
/// The returned sequence always ends signal-off: if the symbols end
/// on a dit or dah, one element-gap-length off event is appended.
///
/// Rejects `unit = 0` before producing any event, for every input
/// including the empty one.
pub fn expand(symbols: &[MorseSymbol], unit: TimingUnit) -> Result<Vec<PulseEvent>, ConfigError> {
    if unit.as_millis() == 0 {
        return Err(ConfigError::InvalidUnit(unit.as_millis()));
    }

    let mut events = Vec::with_capacity(symbols.len() + 1);
    for &symbol in symbols {
        let duration_ms = match symbol {
            MorseSymbol::Dit => unit.dit_ms(),
            MorseSymbol::Dah => unit.dah_ms(),
            MorseSymbol::ElementGap => unit.element_gap_ms(),
            MorseSymbol::CharGap => unit.char_gap_ms(),
            MorseSymbol::WordGap => unit.word_gap_ms(),
        };
        events.push(PulseEvent {
            signal_on: symbol.is_on(),
            duration_ms,
        });
    }

    // End key-up so the schedule itself never leaves the line closed.
    if events.last().is_some_and(|e| e.signal_on) {
        events.push(PulseEvent {
            signal_on: false,
            duration_ms: unit.element_gap_ms(),
        });
    }

    Ok(events)
}

/// Owns the passage of real time during playback.
///
/// Injected into the sequencer so timing-free tests can run a full
/// cycle instantly with [`NoWaitPacer`].
pub trait Pacer {
    /// Anchor the schedule at "now". Called once before the first
    /// event of each prayer.
    fn rearm(&mut self);

    /// Advance the schedule by `duration` and suspend until the
    /// accumulated deadline is reached.
    fn pace(&mut self, duration: Duration);
}

/// Real-time pacer with an absolute deadline.
///
/// `pace` pushes the deadline forward by the event duration and
/// sleeps only for whatever remains of it, so a slow `activate()` or
/// scheduler wakeup jitter is absorbed instead of compounded.
#[derive(Debug, Default)]
pub struct RealTimePacer {
    deadline: Option<Instant>,
}

impl RealTimePacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for RealTimePacer {
    fn rearm(&mut self) {
        self.deadline = Some(Instant::now());
    }

    fn pace(&mut self, duration: Duration) {
        let target = self.deadline.unwrap_or_else(Instant::now) + duration;
        self.deadline = Some(target);
        let now = Instant::now();
        if target > now {
            std::thread::sleep(target - now);
        }
        // If we are already past the target, fall through immediately;
        // the next pace() still measures from the absolute target.
    }
}

/// Pacer that never sleeps. Accumulates virtual elapsed time so tests
/// can assert total schedule length without waiting for it.
#[derive(Debug, Default)]
pub struct NoWaitPacer {
    elapsed: Duration,
}

impl NoWaitPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time paced since construction.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Pacer for NoWaitPacer {
    fn rearm(&mut self) {}

    fn pace(&mut self, duration: Duration) {
        self.elapsed += duration;
    }
}
