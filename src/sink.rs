//! Output sinks for keyed pulses.
//!
//! The sequencer only ever talks to [`PulseSink`]; what is on the
//! other side (a GPIO-driven sounder, a transmitter key, the console,
//! nothing at all) is injected at construction. Both operations are
//! idempotent: deactivating an already-open line is a no-op, so the
//! final deactivate on shutdown is always safe.
//!
//! A real hardware sink lives outside this crate: it implements the
//! trait against whatever GPIO library the deployment uses and is
//! handed to [`crate::sequencer::start`] like any other variant.

use thiserror::Error;
use tracing::trace;

/// A sink operation failed to assert or release the output.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying driver reported an electrical/driver problem.
    #[error("output drive failed: {0}")]
    Drive(String),
}

/// Something that can close and open the keying line.
///
/// Implementations must be idempotent in both directions and must
/// return promptly; the sequencer's cancellation latency bound
/// depends on neither call blocking.
pub trait PulseSink: Send {
    /// Close the circuit. The sounder armature clicks down.
    fn activate(&mut self) -> Result<(), SinkError>;

    /// Open the circuit. The sounder releases.
    fn deactivate(&mut self) -> Result<(), SinkError>;
}

impl PulseSink for Box<dyn PulseSink> {
    fn activate(&mut self) -> Result<(), SinkError> {
        self.as_mut().activate()
    }

    fn deactivate(&mut self) -> Result<(), SinkError> {
        self.as_mut().deactivate()
    }
}

/// Console simulation: logs line transitions instead of driving
/// hardware. State is tracked only to keep the log quiet on
/// redundant calls.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    active: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PulseSink for ConsoleSink {
    fn activate(&mut self) -> Result<(), SinkError> {
        if !self.active {
            self.active = true;
            trace!("key down");
        }
        Ok(())
    }

    fn deactivate(&mut self) -> Result<(), SinkError> {
        if self.active {
            self.active = false;
            trace!("key up");
        }
        Ok(())
    }
}

/// Sink that does nothing. Keeps the timing loop honest in tests and
/// dry runs without touching any output.
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl PulseSink for NullSink {
    fn activate(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn deactivate(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Drives several sinks from one event stream so they stay
/// phase-locked (e.g. sounder plus transmitter key).
///
/// Every child is driven on every call even if an earlier one fails;
/// the first error is reported after the fan-out completes, so one
/// faulty output cannot desynchronize the others.
pub struct FanoutSink {
    children: Vec<Box<dyn PulseSink>>,
}

impl FanoutSink {
    pub fn new(children: Vec<Box<dyn PulseSink>>) -> Self {
        Self { children }
    }

    fn drive<F>(&mut self, mut op: F) -> Result<(), SinkError>
    where
        F: FnMut(&mut dyn PulseSink) -> Result<(), SinkError>,
    {
        let mut first_err = None;
        for child in &mut self.children {
            if let Err(e) = op(child.as_mut()) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl PulseSink for FanoutSink {
    fn activate(&mut self) -> Result<(), SinkError> {
        self.drive(|s| s.activate())
    }

    fn deactivate(&mut self) -> Result<(), SinkError> {
        self.drive(|s| s.deactivate())
    }
}
