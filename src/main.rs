//! The Automated Prayer Project: Chaplet of St. Michael.
//!
//! A telegraph sounder connected to a Raspberry Pi, clicking out the
//! Chaplet of St. Michael in Morse code, continuously, in the spirit
//! of the cDc's Automated Prayer Project (Javaman, c. 2000).
//!
//! This binary wires the collaborator layer around the core: CLI
//! parsing, logging, sink selection, and signal trapping. The core
//! sequencer never sees any of it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use telegraph_chaplet::chaplet::LanguageMode;
use telegraph_chaplet::config::Config;
use telegraph_chaplet::sink::{ConsoleSink, NullSink, PulseSink};
use telegraph_chaplet::{logging, sequencer};

/// Set by the signal handler, polled by the main thread.
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LanguageArg {
    Latin,
    English,
    /// Alternate per prayer: even entries Latin, odd entries English.
    Alternating,
}

impl From<LanguageArg> for LanguageMode {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Latin => LanguageMode::Latin,
            LanguageArg::English => LanguageMode::English,
            LanguageArg::Alternating => LanguageMode::Alternating,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SinkArg {
    /// Simulate the sounder on the console.
    Console,
    /// Discard all output (dry run).
    Null,
    /// Drive a physical sounder over GPIO.
    Hardware,
}

#[derive(Debug, Parser)]
#[command(name = "telegraph")]
#[command(about = "Keys the Chaplet of St. Michael through a telegraph sounder")]
struct Cli {
    /// Morse base unit in milliseconds (80 ≈ 15 WPM)
    #[arg(long, default_value_t = 80)]
    unit_ms: u64,

    /// Seconds of silence between prayers
    #[arg(long, default_value_t = 30)]
    delay: u64,

    /// Prayer language
    #[arg(long, value_enum, default_value = "latin")]
    language: LanguageArg,

    /// Output to drive
    #[arg(long, value_enum, default_value = "console")]
    sink: SinkArg,

    /// BCM pin number for the sounder transistor
    #[arg(long, default_value_t = 17)]
    pin: u32,

    /// Echo prayer text and key transitions as they are sent
    #[arg(long)]
    verbose: bool,
}

/// Construct the selected sink. A hardware driver is not compiled
/// into this binary; asking for one falls back to the console
/// simulation rather than refusing to pray.
fn build_sink(cli: &Cli) -> Box<dyn PulseSink> {
    match cli.sink {
        SinkArg::Console => Box::new(ConsoleSink::new()),
        SinkArg::Null => Box::new(NullSink::new()),
        SinkArg::Hardware => {
            warn!(
                pin = cli.pin,
                "no GPIO backend available, falling back to console simulation"
            );
            Box::new(ConsoleSink::new())
        }
    }
}

#[cfg(unix)]
fn install_signal_handlers() -> anyhow::Result<()> {
    use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

    extern "C" fn on_signal(_: i32) {
        SHUTDOWN.store(true, Ordering::SeqCst);
    }

    let action = SigAction::new(
        SigHandler::Handler(on_signal),
        SaFlags::empty(),
        SigSet::empty(),
    );
    unsafe {
        signal::sigaction(Signal::SIGINT, &action).context("installing SIGINT handler")?;
        signal::sigaction(Signal::SIGTERM, &action).context("installing SIGTERM handler")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    info!("The Automated Prayer Project: Chaplet of St. Michael");
    info!("Quis ut Deus?");

    let config = Config {
        unit_ms: cli.unit_ms,
        inter_prayer_delay_secs: cli.delay,
        language: cli.language.into(),
        pin: cli.pin,
        hardware_enabled: cli.sink == SinkArg::Hardware,
        verbose: cli.verbose,
    };
    config.validate().context("invalid configuration")?;

    let sink = build_sink(&cli);

    #[cfg(unix)]
    install_signal_handlers()?;

    let handle = sequencer::start(config, sink).context("starting sequencer")?;

    while !SHUTDOWN.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_millis(200));
    }

    info!("interrupt received, stopping after the event in flight");
    handle.stop();
    info!("sounder released, pax vobiscum");
    Ok(())
}
