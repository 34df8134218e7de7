//! Configuration for SVG rendering

use crate::layout::Px;

/// How a laid-out scene is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgConfig {
    /// Space around the container inside the viewBox
    pub margin: Px,

    /// Emit the XML declaration
    pub standalone: bool,

    /// One element per line, indented by group depth
    pub pretty_print: bool,

    /// Prepended to every class name (e.g. "fl-" for "fl-child")
    pub class_prefix: Option<String>,

    /// Write each child's label in its top-left corner
    pub labels: bool,

    /// Overlay the padding box and row bands
    pub debug: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            margin: 10,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("fl-".to_string()),
            labels: true,
            debug: false,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-line fragment for embedding in another document
    pub fn compact() -> Self {
        Self {
            standalone: false,
            pretty_print: false,
            ..Self::default()
        }
    }

    /// Set the space around the container; negative values count as zero
    pub fn with_margin(mut self, margin: Px) -> Self {
        self.margin = margin.max(0);
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Full class name for one of the renderer's element kinds
    pub fn class(&self, kind: &str) -> String {
        match &self.class_prefix {
            Some(prefix) => format!("{}{}", prefix, kind),
            None => kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_keeps_drawing_options() {
        let config = SvgConfig::compact();
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert!(config.labels);
        assert_eq!(config.margin, SvgConfig::default().margin);
    }

    #[test]
    fn test_negative_margin_clamps() {
        assert_eq!(SvgConfig::new().with_margin(-4).margin, 0);
    }

    #[test]
    fn test_class_names() {
        let config = SvgConfig::default();
        assert_eq!(config.class("row"), "fl-row");
        assert_eq!(config.with_class_prefix("x-").class("row"), "x-row");
        assert_eq!(SvgConfig::default().without_class_prefix().class("row"), "row");
    }
}
