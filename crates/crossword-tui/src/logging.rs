use crate::config::Config;
use crate::error::TuiError;
use log::LevelFilter;
use std::env;
use std::fs::OpenOptions;

/// Initialize logging.
///
/// The terminal is taken over by the UI, so records only go to the
/// configured log file; without one logging stays off. `RUST_LOG`
/// overrides the level picked from `debug`.
pub fn init(config: &Config) -> Result<(), TuiError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TuiError::LogFile {
            path: path.clone(),
            source,
        })?;

    let level = if config.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp_secs()
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(file)));

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::info!("logger initialized at {level:?} level");
    }
    Ok(())
}
