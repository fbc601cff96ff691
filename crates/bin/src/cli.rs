//! Shared command-line plumbing for the finkpi binaries.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Boxed error returned by the binaries' `run` functions.
pub(crate) type BoxError = Box<dyn std::error::Error>;

/// Install a stderr log subscriber; `RUST_LOG` overrides the `warn` default.
pub(crate) fn init_tracing() -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
