//! # TelegraphChaplet
//!
//! Keys the Chaplet of St. Michael through a telegraph sounder as
//! Morse code, continuously, at a contemplative 15 WPM.
//!
//! ## Architecture
//!
//! Pure transforms feed a single real-time loop:
//! - [`morse::encode`] turns prayer text into symbols (no clock)
//! - [`timing::expand`] turns symbols into a pulse schedule (no clock)
//! - [`ChapletSequencer`] plays the schedule against a [`PulseSink`]
//!   behind an absolute-deadline pacer, polling one shared
//!   cancellation flag at every suspension point
//!
//! Hardware never appears above the [`PulseSink`] trait: a GPIO
//! sounder driver, a transmitter key, the console simulation and the
//! test sinks are all interchangeable at construction time.

pub mod chaplet;
pub mod config;
pub mod fault;
pub mod logging;
pub mod morse;
pub mod sequencer;
pub mod sink;
pub mod timing;

pub use chaplet::{Chaplet, Language, LanguageMode, PrayerEntry, Role, CHAPLET_LEN};
pub use config::{Config, ConfigError};
pub use morse::{encode, Encoding, MorseSymbol};
pub use sequencer::{start, CancelToken, ChapletSequencer, Phase, RunHandle};
pub use sink::{ConsoleSink, FanoutSink, NullSink, PulseSink, SinkError};
pub use timing::{expand, NoWaitPacer, Pacer, PulseEvent, RealTimePacer, TimingUnit};
