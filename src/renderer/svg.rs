//! SVG generation from a laid-out scene

use crate::layout::{Rect, Visibility};
use crate::scene::SceneLayout;

use super::SvgConfig;

/// Fixed presentation rules for the generated classes
const STYLE_RULES: &[(&str, &str)] = &[
    ("container", "fill: #fafafa; stroke: #333333; stroke-width: 1"),
    ("padding", "fill: none; stroke: #bbbbbb; stroke-dasharray: 4,2"),
    ("row", "fill: #e3f2fd; stroke: none; opacity: 0.6"),
    ("child", "fill: #bbdefb; stroke: #1565c0; stroke-width: 1"),
    ("invisible", "fill: none; stroke: #999999; stroke-dasharray: 2,2"),
    ("label", "font-family: sans-serif; font-size: 10px; fill: #1a1a1a"),
    ("item", "shape-rendering: crispEdges"),
];

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add the class rules
    pub fn add_default_styles(&mut self) {
        for (kind, rule) in STYLE_RULES {
            let class = self.config.class(kind);
            self.styles.push(format!(".{} {{ {} }}", class, rule));
        }
    }

    fn class_list(&self, kinds: &[&str]) -> String {
        kinds
            .iter()
            .map(|kind| self.config.class(kind))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle with the given classes
    pub fn add_rect(&mut self, id: Option<&str>, rect: Rect, classes: &[&str]) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_list = self.class_list(classes);

        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            id_attr,
            class_list,
            rect.left,
            rect.top,
            rect.width(),
            rect.height()
        ));
    }

    /// Add a text label anchored at its top-left corner
    pub fn add_label(&mut self, text: &str, x: i32, y: i32) {
        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" dominant-baseline="hanging">{}</text>"#,
            self.indent_str(),
            self.config.class("label"),
            x,
            y,
            escape_xml(text)
        ));
    }

    /// Start a group element
    pub fn start_group(&mut self, classes: &[&str]) {
        let class_list = self.class_list(classes);
        self.elements
            .push(format!(r#"{}<g class="{}">"#, self.indent_str(), class_list));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string around a container of the given bounds
    pub fn build(self, container: Rect) -> String {
        let padding = self.config.margin.max(0);
        let vb_x = container.left - padding;
        let vb_y = container.top - padding;
        let vb_w = container.width().max(0) + 2 * padding;
        let vb_h = container.height().max(0) + 2 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb_x, vb_y, vb_w, vb_h, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a laid-out scene to an SVG string
pub fn render_svg(layout: &SceneLayout, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    let container = Rect::new(0, 0, layout.size.width, layout.size.height);
    builder.add_rect(None, container, &["container"]);

    if config.debug {
        let content = Rect::new(
            layout.padding.left,
            layout.padding.top,
            layout.size.width - layout.padding.right,
            layout.size.height - layout.padding.bottom,
        );
        builder.add_rect(None, content, &["padding"]);
        for band in &layout.rows {
            builder.add_rect(
                None,
                Rect::new(content.left, band.top, content.right, band.top + band.height),
                &["row"],
            );
        }
    }

    for child in &layout.children {
        let class = match child.visibility {
            Visibility::Invisible => "invisible",
            Visibility::Visible | Visibility::Gone => "child",
        };
        builder.start_group(&["item"]);
        builder.add_rect(Some(&child.label), child.rect, &[class]);
        if config.labels {
            builder.add_label(&child.label, child.rect.left + 2, child.rect.top + 2);
        }
        builder.end_group();
    }

    builder.build(container)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Insets, Size};
    use crate::scene::{LaidOutChild, RowBand};

    fn sample() -> SceneLayout {
        SceneLayout {
            size: Size::new(100, 50),
            padding: Insets::zero(),
            children: vec![
                LaidOutChild {
                    index: 0,
                    label: "a".to_string(),
                    rect: Rect::new(0, 0, 40, 20),
                    visibility: Visibility::Visible,
                },
                LaidOutChild {
                    index: 1,
                    label: "b<1>".to_string(),
                    rect: Rect::new(0, 30, 40, 50),
                    visibility: Visibility::Invisible,
                },
            ],
            rows: vec![
                RowBand { top: 0, height: 20 },
                RowBand { top: 30, height: 20 },
            ],
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_children() {
        let svg = render_svg(&sample(), &SvgConfig::default());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="-10 -10 120 70""#));
        assert!(svg.contains(r#"<rect id="a" class="fl-child" x="0" y="0" width="40" height="20"/>"#));
        assert!(svg.contains(r#"id="b&lt;1&gt;" class="fl-invisible""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_debug_draws_rows() {
        let plain = render_svg(&sample(), &SvgConfig::default());
        assert!(!plain.contains(r#"class="fl-row""#));

        let debug = render_svg(&sample(), &SvgConfig::default().with_debug(true));
        assert_eq!(debug.matches(r#"class="fl-row""#).count(), 2);
        assert!(debug.contains(r#"class="fl-row" x="0" y="30" width="100" height="20""#));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::compact().without_class_prefix();
        let svg = render_svg(&sample(), &config);

        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
        assert!(svg.contains(r#"class="child""#));
    }

    #[test]
    fn test_item_groups_have_a_rule() {
        let svg = render_svg(&sample(), &SvgConfig::default());
        assert!(svg.contains(".fl-item {"));
        assert_eq!(svg.matches(r#"<g class="fl-item">"#).count(), 2);
    }

    #[test]
    fn test_labels_can_be_turned_off() {
        let svg = render_svg(&sample(), &SvgConfig::default().with_labels(false));
        assert!(!svg.contains("<text"));
        assert!(svg.contains(r#"id="a""#));
    }
}
