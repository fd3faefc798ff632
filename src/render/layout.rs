use super::canvas::Rect;
use crate::config::{Card, Offset, PanelContent, RenderConfig, Swatch};

/// Position in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `self` moved by a logical offset, saturating at the edge of the `u32` range
    fn offset(self, by: Offset, scale: u32) -> Self {
        Self::new(
            self.x.saturating_add(to_pixels(by.x, scale)),
            self.y.saturating_add(to_pixels(by.y, scale)),
        )
    }
}

/// Every physical rectangle and text origin of one presentation.
///
/// Drawing and cropping both read from this, so a frame crop always
/// matches the panel that was painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub title_at: Point,
    pub subtitle_at: Point,
    pub panels: Vec<PanelLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub bounds: Rect,
    pub caption: TextLayout,
    pub content: ContentLayout,
}

/// Panel content already placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum ContentLayout {
    Cards {
        cards: Vec<ItemLayout<Card>>,
        footnote: Option<TextLayout>,
    },
    Swatches {
        heading: TextLayout,
        swatches: Vec<ItemLayout<Swatch>>,
    },
}

/// A card or swatch together with its box and where its label goes
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout<T> {
    pub item: T,
    pub bounds: Rect,
    pub label_at: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub text: String,
    pub at: Point,
}

impl TextLayout {
    fn new(text: &str, at: Point) -> Self {
        Self {
            text: text.to_string(),
            at,
        }
    }
}

/// Logical to physical pixels, truncating toward zero. Negative values clamp to 0
/// and values past `u32::MAX` saturate.
pub fn to_pixels(logical: f64, scale: u32) -> u32 {
    (logical * scale as f64).max(0.0) as u32
}

impl Layout {
    pub fn compute(config: &RenderConfig) -> Self {
        let scale = config.canvas.scale;
        let geometry = &config.panels;
        let origin = Point::new(0, 0);

        let panel_width = panel_width(config);
        let panels = config
            .panel_specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let x = geometry.margin_x + (panel_width + geometry.gutter) * i as f64;
                let bounds = Rect::new(
                    to_pixels(x, scale),
                    to_pixels(geometry.top, scale),
                    to_pixels(panel_width, scale),
                    to_pixels(geometry.height, scale),
                );
                let corner = Point::new(bounds.x, bounds.y);
                PanelLayout {
                    bounds,
                    caption: TextLayout::new(
                        &spec.caption,
                        corner.offset(geometry.caption_at, scale),
                    ),
                    content: content_layout(config, &spec.content, corner, panel_width),
                }
            })
            .collect();

        Self {
            width: config.canvas.width.saturating_mul(scale),
            height: config.canvas.height.saturating_mul(scale),
            title_at: origin.offset(config.header.title_at, scale),
            subtitle_at: origin.offset(config.header.subtitle_at, scale),
            panels,
        }
    }
}

/// Logical width shared by every panel: the canvas minus both margins and
/// the gutters, split evenly
pub fn panel_width(config: &RenderConfig) -> f64 {
    let count = config.panel_specs.len();
    if count == 0 {
        return 0.0;
    }
    let geometry = &config.panels;
    let available = config.canvas.width as f64
        - 2.0 * geometry.margin_x
        - (count - 1) as f64 * geometry.gutter;
    (available / count as f64).max(0.0)
}

/// Left edge of the `index`-th box in a row starting at `first_x`
fn row_x(first_x: u32, index: usize, step: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    first_x.saturating_add(index.saturating_mul(step))
}

fn content_layout(
    config: &RenderConfig,
    content: &PanelContent,
    corner: Point,
    panel_width: f64,
) -> ContentLayout {
    let scale = config.canvas.scale;
    match content {
        PanelContent::Cards {
            inset_x,
            cards,
            footnote,
        } => {
            let style = &config.cards;
            let count = cards.len().max(1) as f64;
            let card_width = to_pixels((panel_width - style.row_padding) / count, scale);
            let card_height = to_pixels(style.height, scale);
            let step = card_width.saturating_add(to_pixels(style.gap, scale));
            let first = corner.offset(Offset::new(*inset_x, style.top), scale);

            let cards = cards
                .iter()
                .enumerate()
                .map(|(j, card)| {
                    let x = row_x(first.x, j, step);
                    let bounds = Rect::new(x, first.y, card_width, card_height);
                    ItemLayout {
                        item: card.clone(),
                        bounds,
                        label_at: Point::new(bounds.x, bounds.y).offset(style.label_at, scale),
                    }
                })
                .collect();

            ContentLayout::Cards {
                cards,
                footnote: footnote
                    .as_deref()
                    .map(|text| TextLayout::new(text, corner.offset(style.footnote_at, scale))),
            }
        }
        PanelContent::Swatches { heading, swatches } => {
            let style = &config.swatches;
            let size = to_pixels(style.size, scale);
            let stride = to_pixels(style.stride, scale);
            let first = corner.offset(style.first_at, scale);

            let swatches = swatches
                .iter()
                .enumerate()
                .map(|(j, swatch)| {
                    let bounds = Rect::new(row_x(first.x, j, stride), first.y, size, size);
                    ItemLayout {
                        item: swatch.clone(),
                        bounds,
                        label_at: Point::new(bounds.x, bounds.y).offset(style.label_at, scale),
                    }
                })
                .collect();

            ContentLayout::Swatches {
                heading: TextLayout::new(heading, corner.offset(style.heading_at, scale)),
                swatches,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_2400_by_1600() {
        let layout = Layout::compute(&RenderConfig::default());
        assert_eq!((layout.width, layout.height), (2400, 1600));
        assert_eq!(layout.title_at, Point::new(80, 60));
        assert_eq!(layout.subtitle_at, Point::new(80, 120));
    }

    #[test]
    fn test_default_panels_tile_horizontally() {
        let config = RenderConfig::default();
        assert_eq!(panel_width(&config), 380.0);

        let layout = Layout::compute(&config);
        let bounds: Vec<Rect> = layout.panels.iter().map(|p| p.bounds).collect();
        assert_eq!(
            bounds,
            vec![
                Rect::new(40, 240, 760, 840),
                Rect::new(820, 240, 760, 840),
                Rect::new(1600, 240, 760, 840),
            ]
        );
        assert_eq!(layout.panels[0].caption.at, Point::new(76, 264));
        assert_eq!(layout.panels[0].caption.text, "Mockup \u{2014} Warmer");
    }

    #[test]
    fn test_panels_stay_inside_canvas() {
        let layout = Layout::compute(&RenderConfig::default());
        for panel in &layout.panels {
            assert!(panel.bounds.x + panel.bounds.width < layout.width);
            assert!(panel.bounds.y + panel.bounds.height < layout.height);
        }
    }

    #[test]
    fn test_card_rows_use_panel_inset() {
        let layout = Layout::compute(&RenderConfig::default());

        let ContentLayout::Cards { cards, .. } = &layout.panels[0].content else {
            panic!("first panel should hold cards");
        };
        let xs: Vec<u32> = cards.iter().map(|c| c.bounds.x).collect();
        assert_eq!(xs, vec![72, 312, 552]);
        assert_eq!(cards[0].bounds, Rect::new(72, 352, 216, 160));
        assert_eq!(cards[0].label_at, Point::new(92, 372));

        let ContentLayout::Cards { cards, footnote } = &layout.panels[1].content else {
            panic!("second panel should hold cards");
        };
        assert_eq!(cards[0].bounds.x, 820 + 24);
        let footnote = footnote.as_ref().unwrap();
        assert_eq!(footnote.at, Point::new(820 + 36, 240 + 320));
    }

    #[test]
    fn test_swatch_group_positions() {
        let layout = Layout::compute(&RenderConfig::default());
        let ContentLayout::Swatches { heading, swatches } = &layout.panels[2].content else {
            panic!("third panel should hold swatches");
        };
        assert_eq!(heading.at, Point::new(1636, 352));
        assert_eq!(heading.text, "Colors");
        assert_eq!(swatches[0].bounds, Rect::new(1636, 420, 84, 84));
        assert_eq!(swatches[1].bounds, Rect::new(1956, 420, 84, 84));
        assert_eq!(swatches[1].label_at, Point::new(2060, 436));
    }

    #[test]
    fn test_alternate_geometry() {
        let mut config = RenderConfig::default();
        config.canvas.scale = 1;
        config.canvas.width = 640;
        config.panel_specs.truncate(2);

        // (640 - 40 - 10) / 2
        assert_eq!(panel_width(&config), 295.0);
        let layout = Layout::compute(&config);
        assert_eq!(layout.width, 640);
        assert_eq!(layout.panels.len(), 2);
        assert_eq!(layout.panels[1].bounds, Rect::new(325, 120, 295, 420));
    }

    #[test]
    fn test_fractional_width_truncates() {
        let mut config = RenderConfig::default();
        config.canvas.width = 1201;
        config.canvas.scale = 1;
        // 1141 / 3 = 380.33..
        let layout = Layout::compute(&config);
        assert_eq!(layout.panels[0].bounds.width, 380);
        assert_eq!(layout.panels[1].bounds.x, 410);
        assert_eq!(layout.panels[2].bounds.x, 800);
    }

    #[test]
    fn test_layout_carries_the_panel_content() {
        let config = RenderConfig::default();
        let layout = Layout::compute(&config);

        let ContentLayout::Cards { cards, footnote } = &layout.panels[0].content else {
            panic!("first panel should hold cards");
        };
        let labels: Vec<&str> = cards.iter().map(|c| c.item.label.as_str()).collect();
        assert_eq!(labels, vec!["Rain", "Wind", "Piano"]);
        assert!(footnote.is_none());

        let ContentLayout::Cards { cards, footnote } = &layout.panels[1].content else {
            panic!("second panel should hold cards");
        };
        assert_eq!(cards[0].item.fill.to_string(), "#FFF6F3");
        assert_eq!(
            footnote.as_ref().unwrap().text,
            "Tap a card to isolate \u{2022} Haptics enabled"
        );

        let ContentLayout::Swatches { swatches, .. } = &layout.panels[2].content else {
            panic!("third panel should hold swatches");
        };
        let names: Vec<&str> = swatches.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["Before", "After"]);
    }

    #[test]
    fn test_oversized_geometry_saturates() {
        let mut config = RenderConfig::default();
        config.canvas.scale = 4_000_000;
        config.cards.gap = 1.0e12;
        config.swatches.stride = 1.0e12;

        let layout = Layout::compute(&config);
        // 1200 * 4_000_000 overflows, 800 * 4_000_000 still fits
        assert_eq!(layout.width, u32::MAX);
        assert_eq!(layout.height, 3_200_000_000);
        let ContentLayout::Cards { cards, .. } = &layout.panels[0].content else {
            panic!("first panel should hold cards");
        };
        assert!(cards[0].bounds.x < u32::MAX);
        assert_eq!(cards[2].bounds.x, u32::MAX);
    }

    #[test]
    fn test_no_panels() {
        let mut config = RenderConfig::default();
        config.panel_specs.clear();
        assert_eq!(panel_width(&config), 0.0);
        assert!(Layout::compute(&config).panels.is_empty());
    }
}
