use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Terminal logger for the rate calculations. Calling it again after a logger is set does nothing
/// and returns false.
pub fn init_logger(level: LevelFilter) -> bool {
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init() {
        let _first = init_logger(LevelFilter::Debug);
        // the global logger is already set now
        assert!(!init_logger(LevelFilter::Info));
    }
}
