//! Flow Layout - a wrapping row container for widget toolkits
//!
//! Children are laid out left to right and wrap onto a new row when the
//! next one would not fit, like CSS `flex-wrap`. The container runs a
//! measure pass and a layout pass against a host that knows how to
//! measure a single child and where to commit its bounds.
//!
//! # Example
//!
//! ```rust
//! use flow_layout::layout::{
//!     ChildSpec, FlowLayout, LayoutConfig, MeasureSpec, Rect, Size, SizeIntent,
//! };
//! use flow_layout::scene::SceneHost;
//!
//! let mut flow = FlowLayout::new(LayoutConfig::new().with_horizontal_gap(10));
//! flow.add_child(ChildSpec::new(SizeIntent::exact(60, 40)));
//! flow.add_child(ChildSpec::new(SizeIntent::exact(60, 40)));
//!
//! let mut host = SceneHost::new(vec![Size::zero(); 2]);
//! let size = flow.on_measure(&mut host, MeasureSpec::exact(100), MeasureSpec::at_most(500));
//! assert_eq!(size, Size::new(100, 80));
//!
//! let placed = flow.on_layout(&mut host, size.width, size.height).unwrap();
//! assert_eq!(placed[1].rect, Rect::new(0, 40, 60, 80));
//! ```

pub mod error;
pub mod layout;
pub mod renderer;
pub mod scene;

pub use error::SceneError;
pub use layout::{FlowHost, FlowLayout, LayoutConfig, LayoutError};
pub use renderer::{render_svg, render_text, SvgConfig};
pub use scene::{Scene, SceneLayout, Viewport};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the scene
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Output produced by the render pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Text,
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Size offered to the container; the scene's own viewport when unset
    pub viewport: Option<Viewport>,
    /// SVG output configuration
    pub svg: SvgConfig,
    pub format: OutputFormat,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the scene's viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Render a TOML scene to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use flow_layout::render;
///
/// let svg = render(r#"
///     [[children]]
///     id = "a"
///     width = 40
///     height = 20
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"id="a""#));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML scene with custom configuration
///
/// # Example
///
/// ```rust
/// use flow_layout::{render_with_config, OutputFormat, RenderConfig, Viewport};
/// use flow_layout::layout::MeasureMode;
///
/// let config = RenderConfig::new()
///     .with_format(OutputFormat::Text)
///     .with_viewport(Viewport::new(100, 0).with_height_mode(MeasureMode::Unspecified));
///
/// let text = render_with_config("[[children]]\nwidth = 40\nheight = 20\n", config).unwrap();
/// assert_eq!(text, "container 100x20\n#0: 0,0,40,20\n");
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let scene = Scene::from_str(source)?;
    render_scene(&scene, &config)
}

/// Lay out and render an already loaded scene
pub fn render_scene(scene: &Scene, config: &RenderConfig) -> Result<String, RenderError> {
    let layout = scene.layout_in(config.viewport.unwrap_or(scene.viewport))?;

    Ok(match config.format {
        OutputFormat::Svg => render_svg(&layout, &config.svg),
        OutputFormat::Text => render_text(&layout),
    })
}
