#![forbid(unsafe_code)]

//! Colorfloor binary entry point.
//!
//! A single foreground interactive session: no flags, no config files.
//! Type `p`, `e`, `d`, or `s` and press Enter; click cells to paint.

use std::fs::File;
use std::sync::Mutex;

mod app;
mod term;

fn main() {
    init_tracing();
    if let Err(e) = app::run() {
        eprintln!("colorfloor error: {e}");
        std::process::exit(1);
    }
}

/// Install a file-backed subscriber when `COLORFLOOR_LOG` names a path.
///
/// stdout/stderr belong to the terminal UI while raw mode is active, so logs
/// never go there. `COLORFLOOR_LOG_FILTER` takes an env-filter directive
/// string; the default is `debug`.
fn init_tracing() {
    let Ok(path) = std::env::var("COLORFLOOR_LOG") else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        eprintln!("colorfloor: cannot open log file {path:?}; logging disabled");
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("COLORFLOOR_LOG_FILTER")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
