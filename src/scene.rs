//! Scene files: flow container configuration and children in TOML
//!
//! A scene resolves to a [`LayoutConfig`] plus one [`ChildSpec`] per
//! child. Each child also declares an intrinsic content size, which
//! [`SceneHost`] uses to answer measure requests the way a real widget
//! would.

use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error::SceneError;
use crate::layout::{
    ChildMeasurer, ChildSpec, ColumnMode, Dimension, FlowHost, FlowLayout, Insets, LayoutConfig,
    LayoutError, MeasureMode, MeasurePass, MeasureSpec, PlacedChild, Px, Rect, Size, SizeIntent,
    Visibility,
};

/// Default size offered to the container when a scene does not say
const DEFAULT_VIEWPORT: (Px, Px) = (360, 640);

/// Size offered to the container by its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: Px,
    pub height: Px,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
}

impl Viewport {
    /// Viewport with the default modes: exact width, at-most height
    pub fn new(width: Px, height: Px) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_width_mode(mut self, mode: MeasureMode) -> Self {
        self.width_mode = mode;
        self
    }

    pub fn with_height_mode(mut self, mode: MeasureMode) -> Self {
        self.height_mode = mode;
        self
    }

    pub fn width_spec(&self) -> MeasureSpec {
        MeasureSpec::new(self.width_mode, self.width)
    }

    pub fn height_spec(&self) -> MeasureSpec {
        MeasureSpec::new(self.height_mode, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT.0,
            height: DEFAULT_VIEWPORT.1,
            width_mode: MeasureMode::Exact,
            height_mode: MeasureMode::AtMost,
        }
    }
}

/// One child of a scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneChild {
    /// Optional label used in rendered output
    pub id: Option<String>,
    pub spec: ChildSpec,
    /// Intrinsic content size, margins excluded
    pub content: Size,
}

impl SceneChild {
    /// Label for output: the id, or `#index`
    pub fn label(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| format!("#{}", index))
    }
}

/// A resolved scene
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    pub config: LayoutConfig,
    pub viewport: Viewport,
    pub children: Vec<SceneChild>,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlScene {
    #[serde(default)]
    layout: TomlLayout,
    viewport: Option<TomlViewport>,
    #[serde(default)]
    children: Vec<TomlChild>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlLayout {
    #[serde(default)]
    horizontal_gap: Px,
    #[serde(default)]
    vertical_gap: Px,
    column_count: Option<TomlColumnCount>,
    padding: Option<TomlInsets>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlColumnCount {
    Count(i64),
    Keyword(String),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlViewport {
    width: Option<Px>,
    height: Option<Px>,
    width_mode: Option<TomlMeasureMode>,
    height_mode: Option<TomlMeasureMode>,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum TomlMeasureMode {
    Exact,
    AtMost,
    Unspecified,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlChild {
    id: Option<String>,
    width: Option<TomlDimension>,
    height: Option<TomlDimension>,
    margin: Option<TomlInsets>,
    content: Option<[Px; 2]>,
    visibility: Option<TomlVisibility>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlDimension {
    Length(i64),
    Keyword(String),
}

/// Either one value for every side or a table of sides
#[derive(Deserialize)]
#[serde(untagged)]
enum TomlInsets {
    Uniform(Px),
    Sides(TomlSides),
}

/// Sides left out of the table are zero; misspelled ones are rejected
#[derive(Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct TomlSides {
    #[serde(default)]
    left: Px,
    #[serde(default)]
    top: Px,
    #[serde(default)]
    right: Px,
    #[serde(default)]
    bottom: Px,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum TomlVisibility {
    Visible,
    Invisible,
    Gone,
}

impl From<TomlMeasureMode> for MeasureMode {
    fn from(mode: TomlMeasureMode) -> Self {
        match mode {
            TomlMeasureMode::Exact => MeasureMode::Exact,
            TomlMeasureMode::AtMost => MeasureMode::AtMost,
            TomlMeasureMode::Unspecified => MeasureMode::Unspecified,
        }
    }
}

impl From<TomlVisibility> for Visibility {
    fn from(visibility: TomlVisibility) -> Self {
        match visibility {
            TomlVisibility::Visible => Visibility::Visible,
            TomlVisibility::Invisible => Visibility::Invisible,
            TomlVisibility::Gone => Visibility::Gone,
        }
    }
}

impl From<&TomlInsets> for Insets {
    fn from(insets: &TomlInsets) -> Self {
        match *insets {
            TomlInsets::Uniform(value) => Insets::uniform(value),
            TomlInsets::Sides(sides) => Insets::new(sides.left, sides.top, sides.right, sides.bottom),
        }
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let config = resolve_layout(&parsed.layout)?;
        let viewport = parsed
            .viewport
            .as_ref()
            .map(resolve_viewport)
            .unwrap_or_default();
        let children = parsed
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| resolve_child(index, child))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            config,
            viewport,
            children,
        })
    }

    /// Child specs in order, as the container owns them
    pub fn child_specs(&self) -> Vec<ChildSpec> {
        self.children.iter().map(|child| child.spec).collect()
    }

    /// A container holding this scene's configuration and children
    pub fn flow_layout(&self) -> FlowLayout {
        FlowLayout::with_children(self.config.clone(), self.child_specs())
    }

    /// A host that measures children from their declared content sizes
    pub fn host(&self) -> SceneHost {
        SceneHost::new(self.children.iter().map(|child| child.content).collect())
    }

    /// Run one measure + layout pass against the scene's own viewport
    pub fn layout(&self) -> Result<SceneLayout, LayoutError> {
        self.layout_in(self.viewport)
    }

    /// Run one measure + layout pass against the given viewport
    pub fn layout_in(&self, viewport: Viewport) -> Result<SceneLayout, LayoutError> {
        let mut flow = self.flow_layout();
        let mut host = self.host();
        let size = flow.on_measure(&mut host, viewport.width_spec(), viewport.height_spec());
        let placed = flow.on_layout(&mut host, size.width, size.height)?;
        let bands = flow
            .last_pass()
            .map(|pass| row_bands(pass, &placed))
            .unwrap_or_default();

        let children = placed
            .iter()
            .map(|child| LaidOutChild {
                index: child.index,
                label: self.children[child.index].label(child.index),
                rect: child.rect,
                visibility: self.children[child.index].spec.visibility,
            })
            .collect();

        Ok(SceneLayout {
            size,
            padding: flow.config().normalized().padding,
            children,
            rows: bands,
        })
    }
}

fn resolve_layout(layout: &TomlLayout) -> Result<LayoutConfig, SceneError> {
    if layout.horizontal_gap < 0 {
        warn!("horizontal_gap {} is negative, using 0", layout.horizontal_gap);
    }
    if layout.vertical_gap < 0 {
        warn!("vertical_gap {} is negative, using 0", layout.vertical_gap);
    }

    let columns = match &layout.column_count {
        None => ColumnMode::Natural,
        Some(TomlColumnCount::Keyword(keyword)) if keyword == "auto" => ColumnMode::AutoGrid,
        Some(TomlColumnCount::Keyword(other)) => return Err(SceneError::column_count(other)),
        Some(TomlColumnCount::Count(count)) if *count <= 0 => {
            warn!("column_count {} is not positive, ignoring it", count);
            ColumnMode::Natural
        }
        Some(TomlColumnCount::Count(count)) => {
            let count = u32::try_from(*count).map_err(|_| SceneError::column_count(count.to_string()))?;
            ColumnMode::Fixed(count)
        }
    };

    let padding = layout.padding.as_ref().map(Insets::from).unwrap_or_default();
    if padding != padding.clamped() {
        warn!("padding {:?} has negative sides, using 0 for them", padding);
    }

    Ok(LayoutConfig::new()
        .with_horizontal_gap(layout.horizontal_gap)
        .with_vertical_gap(layout.vertical_gap)
        .with_columns(columns)
        .with_padding(padding))
}

fn resolve_viewport(viewport: &TomlViewport) -> Viewport {
    let defaults = Viewport::default();
    Viewport {
        width: viewport.width.unwrap_or(defaults.width),
        height: viewport.height.unwrap_or(defaults.height),
        width_mode: viewport
            .width_mode
            .map(MeasureMode::from)
            .unwrap_or(defaults.width_mode),
        height_mode: viewport
            .height_mode
            .map(MeasureMode::from)
            .unwrap_or(defaults.height_mode),
    }
}

fn resolve_dimension(
    child: usize,
    axis: &'static str,
    value: Option<&TomlDimension>,
) -> Result<Dimension, SceneError> {
    match value {
        None => Ok(Dimension::FitContent),
        Some(TomlDimension::Keyword(keyword)) => match keyword.as_str() {
            "fit" => Ok(Dimension::FitContent),
            "fill" => Ok(Dimension::Fill),
            other => Err(SceneError::dimension(child, axis, other)),
        },
        Some(TomlDimension::Length(length)) => Px::try_from(*length)
            .ok()
            .filter(|length| *length >= 0)
            .map(Dimension::Exact)
            .ok_or_else(|| SceneError::dimension(child, axis, length.to_string())),
    }
}

fn resolve_child(index: usize, child: &TomlChild) -> Result<SceneChild, SceneError> {
    let width = resolve_dimension(index, "width", child.width.as_ref())?;
    let height = resolve_dimension(index, "height", child.height.as_ref())?;

    let margin = child.margin.as_ref().map(Insets::from).unwrap_or_default();
    if margin != margin.clamped() {
        warn!("child {} margin {:?} has negative sides, using 0 for them", index, margin);
    }

    let content = child
        .content
        .map(|[w, h]| Size::new(w.max(0), h.max(0)))
        .unwrap_or_default();

    let spec = ChildSpec::new(SizeIntent::new(width, height))
        .with_margin(margin.clamped())
        .with_visibility(child.visibility.map(Visibility::from).unwrap_or_default());

    Ok(SceneChild {
        id: child.id.clone(),
        spec,
        content,
    })
}

/// Host backed by declared content sizes
///
/// Measuring resolves a child's content size against each constraint;
/// committed rectangles are recorded per child.
#[derive(Debug, Clone)]
pub struct SceneHost {
    contents: Vec<Size>,
    committed: Vec<Option<Rect>>,
}

impl SceneHost {
    pub fn new(contents: Vec<Size>) -> Self {
        let committed = vec![None; contents.len()];
        Self {
            contents,
            committed,
        }
    }

    /// Last rectangle committed for a child
    pub fn committed(&self, index: usize) -> Option<Rect> {
        self.committed.get(index).copied().flatten()
    }
}

impl ChildMeasurer for SceneHost {
    fn measure_child(&mut self, index: usize, width: MeasureSpec, height: MeasureSpec) -> Size {
        let content = self.contents.get(index).copied().unwrap_or_default();
        Size::new(width.resolve(content.width), height.resolve(content.height))
    }
}

impl FlowHost for SceneHost {
    fn commit_child(&mut self, index: usize, rect: Rect) {
        if let Some(slot) = self.committed.get_mut(index) {
            *slot = Some(rect);
        }
    }
}

/// A child after layout, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutChild {
    pub index: usize,
    pub label: String,
    pub rect: Rect,
    pub visibility: Visibility,
}

/// Vertical extent of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub top: Px,
    pub height: Px,
}

/// Result of laying out a scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLayout {
    /// Size the container reported
    pub size: Size,
    pub padding: Insets,
    pub children: Vec<LaidOutChild>,
    pub rows: Vec<RowBand>,
}

/// Row bands from the measured rows and the placed children
fn row_bands(pass: &MeasurePass, placed: &[PlacedChild]) -> Vec<RowBand> {
    pass.rows
        .iter()
        .filter_map(|row| {
            let top = pass.children[row.start..row.end]
                .iter()
                .zip(&placed[row.start..row.end])
                .map(|(measured, placed)| placed.rect.top - measured.margin.top)
                .min()?;
            Some(RowBand {
                top,
                height: row.height,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene_uses_defaults() {
        let scene = Scene::from_str("").expect("Should parse");
        assert_eq!(scene.config, LayoutConfig::default());
        assert_eq!(scene.viewport, Viewport::default());
        assert!(scene.children.is_empty());
    }

    #[test]
    fn test_parse_layout_section() {
        let scene = Scene::from_str(
            r#"
[layout]
horizontal_gap = 10
vertical_gap = 5
column_count = 3
padding = { left = 4, right = 6 }
"#,
        )
        .expect("Should parse");

        assert_eq!(scene.config.horizontal_gap, 10);
        assert_eq!(scene.config.vertical_gap, 5);
        assert_eq!(scene.config.columns, ColumnMode::Fixed(3));
        assert_eq!(scene.config.padding, Insets::new(4, 0, 6, 0));
    }

    #[test]
    fn test_auto_column_count() {
        let scene = Scene::from_str("[layout]\ncolumn_count = \"auto\"\n").expect("Should parse");
        assert_eq!(scene.config.columns, ColumnMode::AutoGrid);
    }

    #[test]
    fn test_non_positive_column_count_is_unset() {
        for value in ["0", "-1", "-7"] {
            let scene = Scene::from_str(&format!("[layout]\ncolumn_count = {}\n", value))
                .expect("Should parse");
            assert_eq!(scene.config.columns, ColumnMode::Natural);
        }
    }

    #[test]
    fn test_unknown_column_keyword_is_an_error() {
        let result = Scene::from_str("[layout]\ncolumn_count = \"lots\"\n");
        assert!(matches!(
            result,
            Err(SceneError::InvalidColumnCount { .. })
        ));
    }

    #[test]
    fn test_negative_gaps_clamp() {
        let scene = Scene::from_str("[layout]\nhorizontal_gap = -3\nvertical_gap = -8\n")
            .expect("Should parse");
        assert_eq!(scene.config.horizontal_gap, 0);
        assert_eq!(scene.config.vertical_gap, 0);
    }

    #[test]
    fn test_parse_children() {
        let scene = Scene::from_str(
            r#"
[[children]]
id = "photo"
width = 60
height = "fill"
margin = 2
content = [10, 20]

[[children]]
width = "fit"
margin = { top = 3 }
visibility = "gone"
"#,
        )
        .expect("Should parse");

        assert_eq!(scene.children.len(), 2);
        let first = &scene.children[0];
        assert_eq!(first.id.as_deref(), Some("photo"));
        assert_eq!(
            first.spec.size,
            SizeIntent::new(Dimension::Exact(60), Dimension::Fill)
        );
        assert_eq!(first.spec.margin, Insets::uniform(2));
        assert_eq!(first.content, Size::new(10, 20));

        let second = &scene.children[1];
        assert_eq!(second.label(1), "#1");
        assert_eq!(second.spec.size, SizeIntent::fit_content());
        assert_eq!(second.spec.margin, Insets::new(0, 3, 0, 0));
        assert!(second.spec.is_gone());
    }

    #[test]
    fn test_invalid_dimension() {
        let result = Scene::from_str("[[children]]\nwidth = \"huge\"\n");
        assert!(matches!(
            result,
            Err(SceneError::InvalidDimension { child: 0, axis: "width", .. })
        ));

        let result = Scene::from_str("[[children]]\nheight = -2\n");
        assert!(matches!(
            result,
            Err(SceneError::InvalidDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn test_parse_viewport() {
        let scene = Scene::from_str("[viewport]\nwidth = 200\nheight_mode = \"exact\"\n")
            .expect("Should parse");
        assert_eq!(scene.viewport.width, 200);
        assert_eq!(scene.viewport.height, 640);
        assert_eq!(scene.viewport.height_mode, MeasureMode::Exact);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let result = Scene::from_str("[layout]\nhgap = 3\n");
        assert!(matches!(result, Err(SceneError::ParseError(_))));
    }

    #[test]
    fn test_misspelled_side_is_an_error() {
        let result = Scene::from_str("[[children]]\nmargin = { lfet = 9 }\n");
        assert!(matches!(result, Err(SceneError::ParseError(_))));

        let result = Scene::from_str("[layout]\npadding = { top = 1, botom = 2 }\n");
        assert!(matches!(result, Err(SceneError::ParseError(_))));
    }

    #[test]
    fn test_parse_width_mode() {
        let scene = Scene::from_str("[viewport]\nwidth = 80\nwidth_mode = \"at-most\"\n")
            .expect("Should parse");
        assert_eq!(scene.viewport.width_spec(), MeasureSpec::at_most(80));
        assert_eq!(Viewport::default().width_mode, MeasureMode::Exact);

        let layout = Scene::from_str("[[children]]\ncontent = [30, 10]\n")
            .expect("Should parse")
            .layout_in(Viewport::new(100, 50).with_width_mode(MeasureMode::Unspecified))
            .expect("Should lay out");
        assert_eq!(layout.size, Size::new(100, 10));
        assert_eq!(layout.children[0].rect, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Scene::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }

    #[test]
    fn test_scene_host_resolves_content() {
        let mut host = SceneHost::new(vec![Size::new(80, 30)]);
        assert_eq!(
            host.measure_child(0, MeasureSpec::at_most(50), MeasureSpec::unspecified(0)),
            Size::new(50, 30)
        );
        assert_eq!(
            host.measure_child(0, MeasureSpec::exact(10), MeasureSpec::exact(12)),
            Size::new(10, 12)
        );
        host.commit_child(0, Rect::new(1, 2, 3, 4));
        host.commit_child(9, Rect::new(1, 2, 3, 4));
        assert_eq!(host.committed(0), Some(Rect::new(1, 2, 3, 4)));
        assert_eq!(host.committed(9), None);
    }

    #[test]
    fn test_layout_row_bands() {
        let scene = Scene::from_str(
            r#"
[layout]
horizontal_gap = 10
vertical_gap = 5

[viewport]
width = 100

[[children]]
width = 60
height = 40
margin = { top = 2 }

[[children]]
width = 60
height = 30
"#,
        )
        .expect("Should parse");

        let layout = scene.layout().expect("Should lay out");
        assert_eq!(layout.size, Size::new(100, 42 + 5 + 30));
        assert_eq!(
            layout.rows,
            vec![
                RowBand { top: 0, height: 42 },
                RowBand { top: 47, height: 30 },
            ]
        );
        assert_eq!(layout.children[0].rect, Rect::new(0, 2, 60, 42));
        assert_eq!(layout.children[1].rect, Rect::new(0, 47, 60, 77));
    }
}
