use presentation_mockups::logging::setup_logging;
use presentation_mockups::{render, RenderConfig};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    setup_logging();
    info!("Starting presentation mockup renderer");

    let config = RenderConfig::load();

    match render(&config) {
        Ok(report) => {
            info!("Done, {} files written", report.outputs.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Render failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
