//! Logging for the mockup renderer
//!
//! - Bracketed event format (`formatter`)
//! - `RUST_LOG`-driven filtering, written to stderr (`setup`)

mod formatter;
mod setup;

pub use formatter::BracketedFormatter;
pub use setup::setup_logging;
