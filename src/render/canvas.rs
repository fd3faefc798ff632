use super::font::FontFace;
use image::{imageops, Rgb, RgbImage};

/// Rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Raster buffer the mockup is drawn into
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Fill a box whose corners `(x, y)` and `(x + width, y + height)` are both
    /// painted, so the box covers `width + 1` by `height + 1` pixels.
    /// Anything outside the canvas is clipped.
    pub fn fill_box(&mut self, rect: Rect, color: Rgb<u8>) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Stroke the edges of a box, using the same corner convention as
    /// [`Canvas::fill_box`]. The stroke grows inwards from the edges.
    pub fn stroke_box(&mut self, rect: Rect, color: Rgb<u8>, stroke_width: u32) {
        if stroke_width == 0 {
            return;
        }
        let last = stroke_width - 1;
        let edges = [
            // top, bottom, left, right
            Rect::new(rect.x, rect.y, rect.width, last.min(rect.height)),
            Rect::new(
                rect.x,
                rect.y.saturating_add(rect.height.saturating_sub(last)),
                rect.width,
                last.min(rect.height),
            ),
            Rect::new(rect.x, rect.y, last.min(rect.width), rect.height),
            Rect::new(
                rect.x.saturating_add(rect.width.saturating_sub(last)),
                rect.y,
                last.min(rect.width),
                rect.height,
            ),
        ];
        for edge in edges {
            self.fill_box(edge, color);
        }
    }

    /// Draw possibly multi-line text with its top-left corner at `(x, y)`
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Rgb<u8>, font: &FontFace) {
        font.draw(&mut self.image, x, y, text, color);
    }

    /// Copy `rect` out into a standalone image of exactly `width` by `height` pixels.
    /// The region is clamped to the canvas bounds.
    pub fn crop(&self, rect: Rect) -> RgbImage {
        imageops::crop_imm(&self.image, rect.x, rect.y, rect.width, rect.height).to_image()
    }

    /// Inclusive pixel bounds of `rect` that lie on the canvas
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.image.dimensions();
        if rect.x >= width || rect.y >= height {
            return None;
        }
        let x1 = rect.x.saturating_add(rect.width).min(width - 1);
        let y1 = rect.y.saturating_add(rect.height).min(height - 1);
        Some((rect.x, rect.y, x1, y1))
    }
}
