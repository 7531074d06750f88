use color_eyre::Result;
use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Diagnostics go to stderr so stdout carries only the rendered table.
/// `RUST_LOG` directives refine the default level, which is WARN unless given.
pub fn init(level: Option<Level>) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.unwrap_or(Level::WARN).into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
