//! Renderers for laid-out scenes
//!
//! SVG for looking at a layout, plain text for diffing one.

pub mod config;
pub mod svg;
pub mod text;

pub use config::SvgConfig;
pub use svg::render_svg;
pub use text::render_text;
