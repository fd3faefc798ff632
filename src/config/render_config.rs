use super::color::{hex, HexColor};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Render configuration containing every layout constant, color and label
///
/// `Default` reproduces the stock "Find the Calm" presentation. Every field is
/// optional in a settings file, so a file only needs to carry what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory the four PNG files are written to
    pub output_dir: PathBuf,
    pub canvas: CanvasSize,
    pub theme: Theme,
    pub header: Header,
    pub panels: PanelGeometry,
    pub cards: CardStyle,
    pub swatches: SwatchStyle,
    pub font: FontConfig,
    /// Panels in left-to-right order; frame files are numbered after this order
    pub panel_specs: Vec<PanelSpec>,
}

/// Logical canvas size and the multiplier applied to every logical coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

/// A logical offset, relative to whatever element owns it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: HexColor,
    /// Headings and captions
    pub ink: HexColor,
    /// Subtitle and secondary card labels
    pub subtle: HexColor,
    pub accent: HexColor,
    /// Footnotes and swatch annotations
    pub muted: HexColor,
    pub panel_fill: HexColor,
    pub panel_border: HexColor,
    pub card_border: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub title: String,
    pub title_at: Offset,
    pub subtitle: String,
    pub subtitle_at: Offset,
}

/// Horizontal tiling of the panel row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelGeometry {
    /// Space left of the first panel and right of the last one
    pub margin_x: f64,
    pub top: f64,
    pub gutter: f64,
    pub height: f64,
    pub caption_at: Offset,
    /// Border width in physical pixels
    pub border_width: u32,
}

/// Shared geometry for every card row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    pub top: f64,
    pub height: f64,
    pub gap: f64,
    /// Horizontal space of the panel not covered by cards
    pub row_padding: f64,
    pub label_at: Offset,
    pub footnote_at: Offset,
}

/// Shared geometry for the swatch group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchStyle {
    pub heading_at: Offset,
    pub first_at: Offset,
    pub size: f64,
    /// Horizontal distance between the left edges of two swatches
    pub stride: f64,
    pub label_at: Offset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType/OpenType file; the built-in bitmap font is used when unset or unreadable
    pub path: Option<PathBuf>,
    /// Logical pixel size for outline fonts
    pub size: f32,
}

/// One panel of the presentation: a caption plus its content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub caption: String,
    pub content: PanelContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelContent {
    /// A row of equal-width cards, optionally followed by a footnote line
    Cards {
        inset_x: f64,
        cards: Vec<Card>,
        #[serde(default)]
        footnote: Option<String>,
    },
    /// A heading followed by labelled color squares
    Swatches {
        heading: String,
        swatches: Vec<Swatch>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub label: String,
    pub fill: HexColor,
    pub text: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub color: HexColor,
}

impl Swatch {
    /// Two-line annotation: the name, then the hex code
    pub fn label(&self) -> String {
        format!("{}\n{}", self.name, self.color)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            output_dir: PathBuf::from("mockups/screens"),
            canvas: CanvasSize::default(),
            header: Header::default(),
            panels: PanelGeometry::default(),
            cards: CardStyle::default(),
            swatches: SwatchStyle::default(),
            font: FontConfig::default(),
            panel_specs: default_panel_specs(&theme),
            theme,
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            scale: 2,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: hex("#FFF8F3"),
            ink: hex("#1F2B3A"),
            subtle: hex("#6B5A56"),
            accent: hex("#E07A5F"),
            muted: hex("#8A6F6B"),
            panel_fill: hex("#FFFAF6"),
            panel_border: hex("#F0E6E1"),
            card_border: hex("#EFE0DB"),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: "Find the Calm — Visual Update".to_string(),
            title_at: Offset::new(40.0, 30.0),
            subtitle: "Warmer palette applied to mockup and prototype.".to_string(),
            subtitle_at: Offset::new(40.0, 60.0),
        }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            margin_x: 20.0,
            top: 120.0,
            gutter: 10.0,
            height: 420.0,
            caption_at: Offset::new(18.0, 12.0),
            border_width: 1,
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            top: 56.0,
            height: 80.0,
            gap: 12.0,
            row_padding: 56.0,
            label_at: Offset::new(10.0, 10.0),
            footnote_at: Offset::new(18.0, 160.0),
        }
    }
}

impl Default for SwatchStyle {
    fn default() -> Self {
        Self {
            heading_at: Offset::new(18.0, 56.0),
            first_at: Offset::new(18.0, 90.0),
            size: 42.0,
            stride: 160.0,
            label_at: Offset::new(52.0, 8.0),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: 11.0,
        }
    }
}

const CARD_LABELS: [&str; 3] = ["Rain", "Wind", "Piano"];

/// The stock mockup, prototype and design-token panels
fn default_panel_specs(theme: &Theme) -> Vec<PanelSpec> {
    let mockup_cards = CARD_LABELS
        .iter()
        .map(|label| Card {
            label: label.to_string(),
            fill: hex("#FFF6F1"),
            text: theme.accent,
        })
        .collect();

    // First card is the selected one
    let prototype_cards = CARD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| Card {
            label: label.to_string(),
            fill: if i == 0 { hex("#FFF6F3") } else { hex("#FFFAF6") },
            text: if i == 0 { theme.accent } else { theme.subtle },
        })
        .collect();

    vec![
        PanelSpec {
            caption: "Mockup — Warmer".to_string(),
            content: PanelContent::Cards {
                inset_x: 16.0,
                cards: mockup_cards,
                footnote: None,
            },
        },
        PanelSpec {
            caption: "Prototype — Warmer".to_string(),
            content: PanelContent::Cards {
                inset_x: 12.0,
                cards: prototype_cards,
                footnote: Some("Tap a card to isolate • Haptics enabled".to_string()),
            },
        },
        PanelSpec {
            caption: "Design tokens".to_string(),
            content: PanelContent::Swatches {
                heading: "Colors".to_string(),
                swatches: vec![
                    Swatch {
                        name: "Before".to_string(),
                        color: hex("#6A9FE6"),
                    },
                    Swatch {
                        name: "After".to_string(),
                        color: theme.accent,
                    },
                ],
            },
        },
    ]
}

impl RenderConfig {
    /// Suffix shared by every output file name, e.g. `@2x`
    pub fn scale_suffix(&self) -> String {
        format!("@{}x", self.canvas.scale)
    }

    pub fn full_image_name(&self) -> String {
        format!("presentation-full{}.png", self.scale_suffix())
    }

    /// File name for the crop of panel `index` (0-based); frames are numbered from 1
    pub fn frame_name(&self, index: usize) -> String {
        format!("frame-{}{}.png", index + 1, self.scale_suffix())
    }
}
