use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const ENV_VAR: &str = "SWEETHEART_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends logs to `path`, appending. The screen belongs to the UI, so when the
/// file cannot be opened there are no logs at all.
pub(crate) fn init(path: &Path) {
    let filter = env_filter();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok();
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(filter).init(),
    }
}
