//! Chaplet transmission state machine.
//!
//! Drives the fixed prayer catalog through codec, scheduler and sink:
//! `Idle → PlayingEvent → InterPrayerDelay → … → CycleComplete`,
//! looping the catalog indefinitely. The only terminal phase is
//! `Stopped`, reached from cooperative cancellation.
//!
//! Cancellation is polled between pulse events, not just between
//! prayers, so shutdown latency is bounded by one event duration
//! (or one delay poll slice). Whatever was in flight, the sink sees
//! one final unconditional `deactivate()` before the run ends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::chaplet::Chaplet;
use crate::config::{Config, ConfigError};
use crate::fault::FaultTracker;
use crate::morse;
use crate::sink::PulseSink;
use crate::timing::{self, Pacer, RealTimePacer};

/// How often the inter-prayer wait re-checks the cancellation flag.
const DELAY_POLL_MS: u64 = 100;

/// Shared cancellation flag. Set exactly once, never reset, observed
/// cooperatively at suspension points.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Observable phase of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PlayingEvent,
    InterPrayerDelay,
    CycleComplete,
    Stopped,
}

/// How one prayer ended.
enum PrayerOutcome {
    Completed,
    /// Abandoned after repeated sink faults; the run continues with
    /// the next prayer.
    Aborted,
    Cancelled,
}

/// Orchestrates catalog, codec, scheduler and sink for one run.
///
/// Exclusively owns its sink and cancellation token; nothing else
/// writes to the output while a run is live, so no locking is needed.
pub struct ChapletSequencer<S: PulseSink, P: Pacer> {
    config: Config,
    chaplet: Arc<Chaplet>,
    sink: S,
    pacer: P,
    cancel: CancelToken,
    faults: FaultTracker,
    phase: Phase,
    cycles_completed: u64,
}

impl<S: PulseSink, P: Pacer> ChapletSequencer<S, P> {
    /// Build a sequencer. Fails fast on invalid timing, before the
    /// sink is ever driven.
    pub fn new(
        config: Config,
        chaplet: Arc<Chaplet>,
        sink: S,
        pacer: P,
        cancel: CancelToken,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            chaplet,
            sink,
            pacer,
            cancel,
            faults: FaultTracker::new(),
            phase: Phase::Idle,
            cycles_completed: 0,
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Run until cancelled, looping the catalog continuously.
    pub fn run(&mut self) {
        info!(
            unit_ms = self.config.unit_ms,
            delay_secs = self.config.inter_prayer_delay_secs,
            language = ?self.config.language,
            "starting chaplet transmission"
        );

        while self.run_cycle() {}

        // Unconditional final release, whatever was in flight.
        if let Err(e) = self.sink.deactivate() {
            warn!(error = %e, "final deactivate failed");
        }
        self.phase = Phase::Stopped;
        info!(
            cycles = self.cycles_completed,
            faults = self.faults.total(),
            "chaplet transmission stopped"
        );
    }

    /// Play one full pass of the catalog. Returns false if
    /// cancellation was observed; the caller then finishes the run.
    pub fn run_cycle(&mut self) -> bool {
        for index in 0..self.chaplet.len() {
            if self.cancel.is_cancelled() {
                return false;
            }
            let entry = self.chaplet.entries()[index];
            match self.play_prayer(index) {
                PrayerOutcome::Completed => {}
                PrayerOutcome::Aborted => {
                    warn!(id = entry.id, "prayer abandoned, continuing with next");
                }
                PrayerOutcome::Cancelled => return false,
            }
            if !self.wait_between_prayers() {
                return false;
            }
        }

        self.cycles_completed += 1;
        self.phase = Phase::CycleComplete;
        info!(cycle = self.cycles_completed, "chaplet cycle complete");
        true
    }

    fn play_prayer(&mut self, index: usize) -> PrayerOutcome {
        let entry = self.chaplet.entries()[index];
        let language = self.config.language.resolve(index);
        let text = entry.text(language);

        info!(
            index,
            id = entry.id,
            title = entry.title,
            language = ?language,
            "sending prayer"
        );
        if self.config.verbose {
            let preview: String = text.chars().take(70).collect();
            debug!(%preview, "prayer text");
        }

        let encoding = morse::encode(text);
        if !encoding.skipped.is_empty() {
            warn!(
                id = entry.id,
                skipped = ?encoding.skipped,
                "characters without a morse pattern were skipped"
            );
        }

        let events = match timing::expand(&encoding.symbols, self.config.unit()) {
            Ok(events) => events,
            Err(e) => {
                // Construction validated the unit, so this is out of
                // normal operation; skip the prayer rather than key
                // garbage timing.
                error!(error = %e, id = entry.id, "schedule expansion failed");
                return PrayerOutcome::Aborted;
            }
        };

        self.faults.rearm();
        self.pacer.rearm();

        for event in &events {
            if self.cancel.is_cancelled() {
                return PrayerOutcome::Cancelled;
            }
            self.phase = Phase::PlayingEvent;

            let driven = if event.signal_on {
                self.sink.activate()
            } else {
                self.sink.deactivate()
            };
            match driven {
                Ok(()) => self.faults.succeed(),
                Err(e) => {
                    warn!(error = %e, id = entry.id, "sink fault, continuing");
                    if self.faults.record() {
                        warn!(id = entry.id, "consecutive fault limit reached");
                        if let Err(e) = self.sink.deactivate() {
                            warn!(error = %e, "deactivate after fault failed");
                        }
                        return PrayerOutcome::Aborted;
                    }
                }
            }

            self.pacer.pace(event.duration());
        }

        PrayerOutcome::Completed
    }

    /// Sleep the configured inter-prayer delay, polling cancellation
    /// in slices so `stop()` never waits out the whole delay.
    fn wait_between_prayers(&mut self) -> bool {
        let mut remaining_ms = self.config.inter_prayer_delay_secs * 1000;
        if remaining_ms > 0 {
            self.phase = Phase::InterPrayerDelay;
        }
        while remaining_ms > 0 {
            if self.cancel.is_cancelled() {
                return false;
            }
            let slice = remaining_ms.min(DELAY_POLL_MS);
            self.pacer.pace(Duration::from_millis(slice));
            remaining_ms -= slice;
        }
        !self.cancel.is_cancelled()
    }
}

/// A running transmission, stoppable from another thread.
pub struct RunHandle {
    cancel: CancelToken,
    thread: JoinHandle<()>,
}

impl RunHandle {
    /// Token for wiring external stop sources (e.g. a signal handler).
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request cancellation and block until the sequencer reaches
    /// `Stopped` and the sink is released.
    pub fn stop(self) {
        self.cancel.cancel();
        if self.thread.join().is_err() {
            error!("sequencer thread panicked");
        }
    }
}

/// Start a run on a background thread with real-time pacing.
///
/// Validates the configuration first; nothing touches the sink when
/// validation fails.
pub fn start(config: Config, sink: Box<dyn PulseSink>) -> Result<RunHandle, ConfigError> {
    config.validate()?;
    let cancel = CancelToken::new();
    let mut sequencer = ChapletSequencer::new(
        config,
        Arc::new(Chaplet::build()),
        sink,
        RealTimePacer::new(),
        cancel.clone(),
    )?;
    let thread = thread::spawn(move || sequencer.run());
    Ok(RunHandle { cancel, thread })
}
