use log::LevelFilter;

/// Install the stderr logger.
///
/// `verbose` forces debug output; otherwise `filter` (from `MACIM_LOG`) is
/// used, and without either nothing is logged. Safe to call more than once:
/// Emacs may load the module repeatedly into the same process.
pub fn init(filter: Option<&str>, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Off);
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
