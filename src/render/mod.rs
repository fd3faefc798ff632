//! Drawing the presentation mockup and writing it out
//!
//! - `layout`: logical configuration to physical rectangles
//! - `canvas`: the RGB buffer plus box, text and crop primitives
//! - `font` / `builtin_font`: outline fonts with a bitmap fallback
//! - `renderer`: the render run itself

mod builtin_font;
mod canvas;
mod font;
mod layout;
mod renderer;

pub use canvas::{Canvas, Rect};
pub use font::{FontFace, FontLoadError};
pub use layout::{ContentLayout, ItemLayout, Layout, PanelLayout, Point, TextLayout};
pub use renderer::{draw_presentation, ensure_output_dir, render, OutputImage, RenderReport};
