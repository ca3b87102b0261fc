use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::fmt::format::FmtSpan;

/// Send JSON-lines logs to `output_path`. The terminal belongs to the UI, so
/// without a log file nothing is installed and events are discarded.
pub fn init_file_logging(output_path: &Path, level: tracing::Level) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

pub fn parse_level(s: &str) -> Result<tracing::Level> {
    s.parse()
        .map_err(|_| eyre!("unknown log level {s:?} (expected trace, debug, info, warn or error)"))
}
