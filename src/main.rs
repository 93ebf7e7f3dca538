//! household entrypoint.

use household::run;
use household::ui::messages;
use tracing_subscriber::EnvFilter;

fn main() {
    // diagnostics go to stderr so they never mix with command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
