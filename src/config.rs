//! Run configuration.
//!
//! One immutable value, built once at startup and passed by reference
//! into the sequencer. No component reads ambient global state.
//! Validation happens before any sink is constructed: the system must
//! never start cycling with invalid timing.

use thiserror::Error;

use crate::chaplet::LanguageMode;
use crate::timing::TimingUnit;

/// Startup-fatal configuration problems.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The Morse base unit must be a positive number of milliseconds.
    #[error("morse unit must be positive, got {0} ms")]
    InvalidUnit(u64),

    /// Sink selector that names no known output variant.
    #[error("unknown sink '{0}' (expected console, null or hardware)")]
    UnknownSink(String),
}

/// Complete configuration surface for one run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base Morse unit in milliseconds. 80 ≈ 15 WPM.
    pub unit_ms: u64,

    /// Seconds of silence between prayers.
    pub inter_prayer_delay_secs: u64,

    /// Which language each prayer is keyed in.
    pub language: LanguageMode,

    /// BCM pin number for the sounder transistor, when hardware
    /// driving is available.
    pub pin: u32,

    /// Drive a physical sounder instead of console simulation.
    pub hardware_enabled: bool,

    /// Echo prayer text to the console as it is sent.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_ms: 80,
            inter_prayer_delay_secs: 30,
            language: LanguageMode::Latin,
            pin: 17,
            hardware_enabled: false,
            verbose: true,
        }
    }
}

impl Config {
    /// Check invariants that must hold before any hardware is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit_ms == 0 {
            return Err(ConfigError::InvalidUnit(self.unit_ms));
        }
        Ok(())
    }

    /// The configured base unit.
    pub fn unit(&self) -> TimingUnit {
        TimingUnit::from_millis(self.unit_ms)
    }
}
