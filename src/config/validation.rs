use super::{Offset, PanelContent, RenderConfig};
use std::fmt;

/// Largest physical canvas side, in pixels, a configuration may ask for
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Largest physical pixel size an outline font is rasterized at
const MAX_FONT_PX: f32 = 1024.0;

/// A configuration whose geometry cannot be laid out or allocated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid render configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl RenderConfig {
    /// Check that the canvas fits in `MAX_CANVAS_SIDE` pixels per side and that
    /// every logical length is a finite number no larger than that.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = self.canvas;
        if canvas.scale == 0 {
            return Err(ConfigError("canvas scale must be at least 1".to_string()));
        }
        for (side, logical) in [("width", canvas.width), ("height", canvas.height)] {
            match logical.checked_mul(canvas.scale) {
                Some(physical) if (1..=MAX_CANVAS_SIDE).contains(&physical) => {}
                _ => {
                    return Err(ConfigError(format!(
                        "canvas {} {} at scale {} is not within 1..={} pixels",
                        side, logical, canvas.scale, MAX_CANVAS_SIDE
                    )))
                }
            }
        }

        for (name, value) in self.logical_lengths() {
            if !value.is_finite() || value.abs() > MAX_CANVAS_SIDE as f64 {
                return Err(ConfigError(format!("{} = {} is out of range", name, value)));
            }
        }

        if self.panels.border_width > MAX_CANVAS_SIDE {
            return Err(ConfigError(format!(
                "panels.border_width = {} is out of range",
                self.panels.border_width
            )));
        }

        let font_px = self.font.size * canvas.scale as f32;
        if !(font_px > 0.0 && font_px <= MAX_FONT_PX) {
            return Err(ConfigError(format!(
                "font.size {} at scale {} is not within 0..={} pixels",
                self.font.size, canvas.scale, MAX_FONT_PX
            )));
        }

        Ok(())
    }

    fn logical_lengths(&self) -> Vec<(&'static str, f64)> {
        let panels = &self.panels;
        let cards = &self.cards;
        let swatches = &self.swatches;

        let mut lengths = vec![
            ("panels.margin_x", panels.margin_x),
            ("panels.top", panels.top),
            ("panels.gutter", panels.gutter),
            ("panels.height", panels.height),
            ("cards.top", cards.top),
            ("cards.height", cards.height),
            ("cards.gap", cards.gap),
            ("cards.row_padding", cards.row_padding),
            ("swatches.size", swatches.size),
            ("swatches.stride", swatches.stride),
        ];
        let offsets = [
            ("header.title_at", self.header.title_at),
            ("header.subtitle_at", self.header.subtitle_at),
            ("panels.caption_at", panels.caption_at),
            ("cards.label_at", cards.label_at),
            ("cards.footnote_at", cards.footnote_at),
            ("swatches.heading_at", swatches.heading_at),
            ("swatches.first_at", swatches.first_at),
            ("swatches.label_at", swatches.label_at),
        ];
        for (name, Offset { x, y }) in offsets {
            lengths.push((name, x));
            lengths.push((name, y));
        }
        for spec in &self.panel_specs {
            if let PanelContent::Cards { inset_x, .. } = spec.content {
                lengths.push(("panel_specs.inset_x", inset_x));
            }
        }
        lengths
    }
}
