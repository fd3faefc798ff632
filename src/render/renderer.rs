use super::canvas::Canvas;
use super::font::FontFace;
use super::layout::{ContentLayout, Layout, PanelLayout, TextLayout};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A PNG file written by a render run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Files written by [`render`], full composite first, then frames in panel order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub outputs: Vec<OutputImage>,
}

/// Draw the presentation and write the composite plus one crop per panel
/// into `config.output_dir`, creating the directory if needed. A configuration
/// that fails [`RenderConfig::validate`] is rejected before anything is written.
pub fn render(config: &RenderConfig) -> RenderResult<RenderReport> {
    config.validate().map_err(RenderError::InvalidConfig)?;
    ensure_output_dir(&config.output_dir)?;

    let layout = Layout::compute(config);
    info!(
        "Rendering {}x{} presentation with {} panels",
        layout.width,
        layout.height,
        layout.panels.len()
    );

    let font = FontFace::load(&config.font, config.canvas.scale);
    let canvas = draw_presentation(config, &layout, &font);

    let mut report = RenderReport::default();
    let full_path = config.output_dir.join(config.full_image_name());
    report.outputs.push(save_png(canvas.image(), &full_path)?);

    for (i, panel) in layout.panels.iter().enumerate() {
        let frame = canvas.crop(panel.bounds);
        let frame_path = config.output_dir.join(config.frame_name(i));
        report.outputs.push(save_png(&frame, &frame_path)?);
    }

    info!("Wrote {} images to {:?}", report.outputs.len(), config.output_dir);
    Ok(report)
}

/// Create the output directory and any missing parents; succeeds if it already exists
pub fn ensure_output_dir(path: &Path) -> RenderResult<()> {
    fs::create_dir_all(path).map_err(|source| RenderError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Paint the header and every panel onto a fresh canvas
pub fn draw_presentation(config: &RenderConfig, layout: &Layout, font: &FontFace) -> Canvas {
    let theme = &config.theme;
    let mut canvas = Canvas::new(layout.width, layout.height, theme.background.to_pixel());

    let header = &config.header;
    canvas.draw_text(
        layout.title_at.x,
        layout.title_at.y,
        &header.title,
        theme.ink.to_pixel(),
        font,
    );
    canvas.draw_text(
        layout.subtitle_at.x,
        layout.subtitle_at.y,
        &header.subtitle,
        theme.subtle.to_pixel(),
        font,
    );

    for panel in &layout.panels {
        draw_panel(&mut canvas, config, panel, font);
    }

    canvas
}

fn draw_panel(canvas: &mut Canvas, config: &RenderConfig, panel: &PanelLayout, font: &FontFace) {
    let theme = &config.theme;
    let border_width = config.panels.border_width;
    debug!("Drawing panel {:?} at {:?}", panel.caption.text, panel.bounds);

    canvas.fill_box(panel.bounds, theme.panel_fill.to_pixel());
    canvas.stroke_box(panel.bounds, theme.panel_border.to_pixel(), border_width);
    draw_label(canvas, &panel.caption, theme.ink.to_pixel(), font);

    match &panel.content {
        ContentLayout::Cards { cards, footnote } => {
            for card in cards {
                canvas.fill_box(card.bounds, card.item.fill.to_pixel());
                canvas.stroke_box(card.bounds, theme.card_border.to_pixel(), border_width);
                canvas.draw_text(
                    card.label_at.x,
                    card.label_at.y,
                    &card.item.label,
                    card.item.text.to_pixel(),
                    font,
                );
            }
            if let Some(footnote) = footnote {
                draw_label(canvas, footnote, theme.muted.to_pixel(), font);
            }
        }
        ContentLayout::Swatches { heading, swatches } => {
            draw_label(canvas, heading, theme.ink.to_pixel(), font);
            for swatch in swatches {
                canvas.fill_box(swatch.bounds, swatch.item.color.to_pixel());
                canvas.draw_text(
                    swatch.label_at.x,
                    swatch.label_at.y,
                    &swatch.item.label(),
                    theme.muted.to_pixel(),
                    font,
                );
            }
        }
    }
}

fn draw_label(canvas: &mut Canvas, label: &TextLayout, color: Rgb<u8>, font: &FontFace) {
    canvas.draw_text(label.at.x, label.at.y, &label.text, color, font);
}

fn save_png(image: &RgbImage, path: &Path) -> RenderResult<OutputImage> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::SaveImage {
            path: path.to_path_buf(),
            source,
        })?;

    println!("Saved {}", path.display());
    info!("Saved {:?} ({}x{})", path, image.width(), image.height());

    Ok(OutputImage {
        path: path.to_path_buf(),
        width: image.width(),
        height: image.height(),
    })
}
