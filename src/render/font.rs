use super::builtin_font::{self, CELL_HEIGHT, CELL_WIDTH, LINE_SPACING};
use crate::config::FontConfig;
use image::{Rgb, RgbImage};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Error returned by [`FontFace::from_file`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// The typeface every label of a run is drawn with
pub enum FontFace {
    /// TrueType/OpenType font rasterized at `px` physical pixels
    Outline { font: fontdue::Font, px: f32 },
    /// Embedded bitmap font, each dot drawn as a `magnify` x `magnify` square
    Builtin { magnify: u32 },
}

impl FontFace {
    /// Resolve the configured font, falling back to the built-in font when
    /// none is configured or it cannot be loaded
    pub fn load(config: &FontConfig, scale: u32) -> Self {
        let Some(path) = &config.path else {
            debug!("No font configured, using built-in bitmap font");
            return Self::builtin(scale);
        };

        match Self::from_file(path, config.size * scale as f32) {
            Ok(face) => {
                info!("Loaded font from {:?}", path);
                face
            }
            Err(e) => {
                warn!("{} ({:?}). Falling back to built-in font.", e, path);
                Self::builtin(scale)
            }
        }
    }

    pub fn builtin(scale: u32) -> Self {
        Self::Builtin {
            magnify: scale.max(1),
        }
    }

    /// Parses a TrueType or OpenType font file for rendering at `px` pixels.
    pub fn from_file(path: &Path, px: f32) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(path).map_err(|e| FontLoadError(e.to_string()))?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self::Outline { font, px })
    }

    /// Draw `text` with its top-left corner at `(x, y)`; `\n` starts a new line
    pub fn draw(&self, image: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>) {
        match self {
            FontFace::Outline { font, px } => draw_outline(image, font, *px, x, y, text, color),
            FontFace::Builtin { magnify } => draw_builtin(image, *magnify, x, y, text, color),
        }
    }
}

fn draw_builtin(image: &mut RgbImage, magnify: u32, x: u32, y: u32, text: &str, color: Rgb<u8>) {
    let line_height = (CELL_HEIGHT + LINE_SPACING) * magnify;

    for (line_index, line) in text.lines().enumerate() {
        let top = y.saturating_add(line_index as u32 * line_height);
        for (char_index, c) in line.chars().enumerate() {
            let left = x.saturating_add(char_index as u32 * CELL_WIDTH * magnify);
            let glyph = builtin_font::glyph(c);
            for row in 0..7 {
                for column in 0..builtin_font::GLYPH_COLUMNS {
                    if builtin_font::is_set(glyph, column, row) {
                        let dot_x = left.saturating_add(column * magnify);
                        let dot_y = top.saturating_add(row * magnify);
                        fill_square(image, dot_x, dot_y, magnify, color);
                    }
                }
            }
        }
    }
}

fn fill_square(image: &mut RgbImage, x: u32, y: u32, size: u32, color: Rgb<u8>) {
    for py in y..y.saturating_add(size).min(image.height()) {
        for px in x..x.saturating_add(size).min(image.width()) {
            image.put_pixel(px, py, color);
        }
    }
}

fn draw_outline(
    image: &mut RgbImage,
    font: &fontdue::Font,
    px: f32,
    x: u32,
    y: u32,
    text: &str,
    color: Rgb<u8>,
) {
    let (ascent, line_height) = match font.horizontal_line_metrics(px) {
        Some(metrics) => (metrics.ascent, metrics.new_line_size),
        None => (px, px * 1.2),
    };

    for (line_index, line) in text.lines().enumerate() {
        let baseline = y as f32 + line_index as f32 * line_height + ascent;
        let mut pen_x = x as f32;
        for c in line.chars() {
            let (metrics, coverage) = font.rasterize(c, px);
            let left = pen_x.round() as i64 + metrics.xmin as i64;
            let top = baseline.round() as i64 - (metrics.height as i64 + metrics.ymin as i64);
            for (row, alphas) in coverage.chunks(metrics.width.max(1)).enumerate() {
                for (column, &alpha) in alphas.iter().enumerate() {
                    blend(image, left + column as i64, top + row as i64, color, alpha);
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}

/// Alpha-blend `color` over the pixel at `(x, y)`; off-canvas coordinates are ignored
fn blend(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, alpha: u8) {
    if alpha == 0 || x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    let a = alpha as u32;
    for channel in 0..3 {
        let src = color.0[channel] as u32;
        let dst = pixel.0[channel] as u32;
        pixel.0[channel] = ((src * a + dst * (255 - a) + 127) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const INK: Rgb<u8> = Rgb([0x1F, 0x2B, 0x3A]);
    const DEJAVU_SANS_MONO: &[u8] = include_bytes!("../../tests/fonts/DejaVuSansMono.ttf");

    fn inked(image: &RgbImage) -> usize {
        image.pixels().filter(|p| **p == INK).count()
    }

    fn dejavu() -> fontdue::Font {
        fontdue::Font::from_bytes(DEJAVU_SANS_MONO, fontdue::FontSettings::default()).unwrap()
    }

    /// Coordinates of every pixel that is no longer white
    fn touched(image: &RgbImage) -> Vec<(u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != WHITE)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let config = FontConfig {
            path: Some(PathBuf::from("/definitely/not/here.ttf")),
            size: 11.0,
        };
        assert!(matches!(FontFace::load(&config, 2), FontFace::Builtin { magnify: 2 }));
    }

    #[test]
    fn test_unparsable_font_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "presentation_mockups_bad_font_{}.ttf",
            std::process::id()
        ));
        std::fs::write(&path, b"not a font").unwrap();
        assert!(FontFace::from_file(&path, 22.0).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_configured_font_file_is_used() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/DejaVuSansMono.ttf");
        let config = FontConfig {
            path: Some(path),
            size: 11.0,
        };
        match FontFace::load(&config, 2) {
            FontFace::Outline { px, .. } => assert_eq!(px, 22.0),
            FontFace::Builtin { .. } => panic!("font fixture should load"),
        }
    }

    #[test]
    fn test_outline_text_stays_in_its_line_box() {
        let font = dejavu();
        let px = 20.0;
        let line = font.horizontal_line_metrics(px).unwrap();
        let advance = font.metrics('H', px).advance_width;
        let (x, y) = (30, 10);

        let mut image = RgbImage::from_pixel(200, 100, WHITE);
        FontFace::Outline { font, px }.draw(&mut image, x, y, "Hg", INK);

        let pixels = touched(&image);
        assert!(!pixels.is_empty());
        // Fully covered stem pixels take the exact ink color
        assert!(inked(&image) > 0);

        let bottom = y + (line.ascent - line.descent).ceil() as u32 + 1;
        let right = x + (2.0 * advance).ceil() as u32 + 1;
        for (px_x, px_y) in pixels {
            assert!((y..bottom).contains(&px_y), "row {} outside {}..{}", px_y, y, bottom);
            assert!((x..right).contains(&px_x), "column {} outside {}..{}", px_x, x, right);
        }
    }

    #[test]
    fn test_outline_second_line_starts_one_line_lower() {
        let font = dejavu();
        let px = 20.0;
        let line_height = font.horizontal_line_metrics(px).unwrap().new_line_size;

        let mut image = RgbImage::from_pixel(100, 100, WHITE);
        FontFace::Outline { font, px }.draw(&mut image, 5, 5, "H\nH", INK);

        let pixels = touched(&image);
        let mut rows: Vec<u32> = pixels.iter().map(|&(_, y)| y).collect();
        rows.sort_unstable();
        rows.dedup();

        let first_top = rows[0];
        let second_top = rows
            .windows(2)
            .find(|pair| pair[1] > pair[0] + 1)
            .map(|pair| pair[1])
            .unwrap();
        let shift = (second_top - first_top) as f32;
        assert!(
            (shift - line_height).abs() <= 1.0,
            "second line moved {} rows, line height is {}",
            shift,
            line_height
        );

        // Both lines start at the same x
        let left_of = |top: u32, bottom: u32| {
            pixels
                .iter()
                .filter(|&&(_, y)| (top..bottom).contains(&y))
                .map(|&(x, _)| x)
                .min()
                .unwrap()
        };
        assert_eq!(left_of(first_top, second_top), left_of(second_top, u32::MAX));
    }

    #[test]
    fn test_builtin_glyphs_scale_with_magnify() {
        let mut small = RgbImage::from_pixel(40, 20, WHITE);
        FontFace::builtin(1).draw(&mut small, 0, 0, "L", INK);
        // L: seven dots down the left, four more along the bottom
        assert_eq!(inked(&small), 11);

        let mut large = RgbImage::from_pixel(40, 20, WHITE);
        FontFace::builtin(2).draw(&mut large, 0, 0, "L", INK);
        assert_eq!(inked(&large), 11 * 4);
    }

    #[test]
    fn test_builtin_multiline_text_starts_each_line_at_x() {
        let mut image = RgbImage::from_pixel(40, 40, WHITE);
        FontFace::builtin(1).draw(&mut image, 3, 2, "L\nL", INK);
        let second_line_top = 2 + CELL_HEIGHT + LINE_SPACING;
        assert_eq!(*image.get_pixel(3, 2), INK);
        assert_eq!(*image.get_pixel(3, second_line_top), INK);
        assert_eq!(inked(&image), 22);
    }

    #[test]
    fn test_text_past_the_edge_is_clipped() {
        let mut image = RgbImage::from_pixel(8, 8, WHITE);
        FontFace::builtin(2).draw(&mut image, 4, 4, "Piano", INK);
        assert!(inked(&image) > 0);
    }

    #[test]
    fn test_blend_extremes() {
        let mut image = RgbImage::from_pixel(1, 1, WHITE);
        blend(&mut image, 0, 0, INK, 0);
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        blend(&mut image, 0, 0, INK, 255);
        assert_eq!(*image.get_pixel(0, 0), INK);
        blend(&mut image, -1, 5, INK, 255);
    }
}
