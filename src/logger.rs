use env_logger::Target;
use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// Logs always go to stderr; stdout may be carrying the image.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(Target::Stderr)
        .init();
}
