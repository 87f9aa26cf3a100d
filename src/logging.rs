//! stderr logging via env_logger; stdout is reserved for the rendered output.

use env_logger::{Env, Target};

/// `warn` by default, `info` with -v, `debug` with -vv. RUST_LOG wins.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
