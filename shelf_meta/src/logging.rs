use std::io;

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt::time::LocalTime, layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

/// Install a pretty stderr subscriber filtered by `SHELF_LOG`.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(
            stderr_layer.with_timer(LocalTime::rfc_3339()).with_filter(
                EnvFilter::builder()
                    .with_default_directive("shelf_meta=debug".parse()?)
                    .with_env_var("SHELF_LOG")
                    .from_env_lossy(),
            ),
        )
        .try_init()?;
    Ok(())
}
