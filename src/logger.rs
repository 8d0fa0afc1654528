//! Logging setup: env_logger on stderr, `RUST_LOG` overrides the defaults.

use std::io::Write;
use log::LevelFilter;

pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Toolkit crates are chatty at info
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("egui_glow", LevelFilter::Warn);
        builder.filter_module("egui_winit", LevelFilter::Warn);
        builder.filter_module("winit", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    // try_init: a second call (tests, embedding) keeps the first logger.
    if builder.target(env_logger::Target::Stderr).try_init().is_ok() {
        log::debug!("Logging initialised");
    }
}
