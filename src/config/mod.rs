mod color;
mod render_config;
mod settings;
mod validation;

pub use color::{ColorParseError, HexColor};
pub use render_config::{
    CanvasSize, Card, CardStyle, FontConfig, Header, Offset, PanelContent, PanelGeometry,
    PanelSpec, RenderConfig, Swatch, SwatchStyle, Theme,
};
pub use settings::SETTINGS_FILE_NAME;
pub use validation::{ConfigError, MAX_CANVAS_SIDE};
