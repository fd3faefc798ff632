//! Renders the "Find the Calm" palette-update presentation: one composite
//! PNG plus a cropped PNG per panel.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use render::{render, RenderReport};
