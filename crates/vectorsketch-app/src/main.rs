//! Main application entry point.

use clap::Parser;
use std::process::ExitCode;
use vectorsketch_app::{App, AppOptions};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting VectorSketch");

    let options = AppOptions::parse();
    let result = App::from_options(&options).and_then(|mut app| {
        app.run_demo_session();
        app.export(options.output.as_deref())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("vectorsketch: {}", e);
            ExitCode::FAILURE
        }
    }
}
