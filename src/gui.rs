//! Toolkit session: opens the main window, runs the event loop, reports start-up failure.
use crate::config::Config;
use crate::core::Variant;
use crate::logger;
use crate::ui::PresionemeApp;
use anyhow::{anyhow, Context, Result};
use eframe::NativeOptions;
use std::process::ExitCode;

/// Printed to stderr when no window can be opened.
pub const DISPLAY_ERROR: &str = "No se pudo abrir la pantalla X.";

/// Runs the demo until the main window is closed.
pub fn run(variant: Variant, config: Config) -> Result<()> {
    let title = config.window_title.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    log::info!("🚀 Opening \"{}\" ({:?} variant)", title, variant);

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(PresionemeApp::new(variant, config)))
        }),
    )
    .map_err(|e| anyhow!("{e}"))
    .context(DISPLAY_ERROR)?;

    log::info!("Session closed");
    Ok(())
}

/// Entry point shared by both binaries: logging, session, exit status.
pub fn launch(variant: Variant) -> ExitCode {
    logger::init();

    match run(variant, Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
