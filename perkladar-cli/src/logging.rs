//! Logger initialization from verbosity flags

/// Filter level for a `-v` count; `-q` wins over any verbosity
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize `env_logger`; `RUST_LOG` overrides the flag-derived level
pub fn init(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
