//! Console logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber for the binary.
///
/// `RUST_LOG` wins when set; otherwise `verbose` switches the crate
/// between debug and info. Verbose also enables the per-transition
/// key up/down trace output of the console sink.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "telegraph_chaplet=trace,info"
    } else {
        "telegraph_chaplet=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
