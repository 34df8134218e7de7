//! Measurement pass
//!
//! Resolves a constraint for every laid-out child, asks the host to
//! measure it, then sizes the container from the resulting rows.

use log::{debug, trace};

use super::columns::{cell_width, effective_columns};
use super::config::{ColumnMode, LayoutConfig};
use super::rows::{content_limit, partition_rows, stacked_height};
use super::types::{ChildSpec, Dimension, MeasureMode, MeasureSpec, MeasuredChild, Px, Row, Size};

/// Measures a single child under the given constraints
///
/// Implemented by the host toolkit. Called exactly once per laid-out
/// child per pass and must return synchronously. Sizes exclude margins.
pub trait ChildMeasurer {
    fn measure_child(&mut self, index: usize, width: MeasureSpec, height: MeasureSpec) -> Size;
}

impl<F> ChildMeasurer for F
where
    F: FnMut(usize, MeasureSpec, MeasureSpec) -> Size,
{
    fn measure_child(&mut self, index: usize, width: MeasureSpec, height: MeasureSpec) -> Size {
        self(index, width, height)
    }
}

/// Output of one measure pass, consumed by the placement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurePass {
    /// Size the container reports to its parent
    pub size: Size,
    /// Laid-out children in child order; gone children are absent
    pub children: Vec<MeasuredChild>,
    /// Rows over `children`
    pub rows: Vec<Row>,
    /// Column count that was in force, if any
    pub columns: Option<u32>,
}

impl MeasurePass {
    /// Positions in `children` where a row begins
    pub fn row_starts(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.start).collect()
    }
}

/// Derive a child's constraint along one axis
///
/// `used` is the space already spoken for on that axis (container
/// padding plus the child's margins).
pub fn child_measure_spec(parent: MeasureSpec, used: Px, dimension: Dimension) -> MeasureSpec {
    let available = parent.size.saturating_sub(used).max(0);

    match (dimension, parent.mode) {
        (Dimension::Exact(size), _) => MeasureSpec::exact(size.max(0)),
        (Dimension::Fill, MeasureMode::Exact) => MeasureSpec::exact(available),
        (Dimension::Fill, MeasureMode::AtMost) => MeasureSpec::at_most(available),
        (Dimension::FitContent, MeasureMode::Exact | MeasureMode::AtMost) => {
            MeasureSpec::at_most(available)
        }
        (Dimension::Fill | Dimension::FitContent, MeasureMode::Unspecified) => {
            MeasureSpec::unspecified(available)
        }
    }
}

/// Width and height preferences after any column override
///
/// Column cells fix the width only. A lone auto-grid child is half as tall
/// as wide; with several children the height stays the child's own, so
/// cells are not forced square.
fn resolve_dimensions(
    config: &LayoutConfig,
    spec: &ChildSpec,
    columns: Option<u32>,
    available_width: Px,
    child_count: usize,
) -> (Dimension, Dimension) {
    let Some(columns) = columns else {
        return (spec.size.width, spec.size.height);
    };

    let cell = cell_width(config, available_width, columns, &spec.margin);
    let height = if config.columns == ColumnMode::AutoGrid && child_count == 1 {
        Dimension::Exact(cell / 2)
    } else {
        spec.size.height
    };
    (Dimension::Exact(cell), height)
}

/// Run the measure pass over `children`
///
/// The container always claims the full available width. Its height is
/// the available height under an exact constraint, otherwise padding plus
/// the stacked row heights. Negative offers report as zero.
pub fn measure<M: ChildMeasurer + ?Sized>(
    config: &LayoutConfig,
    children: &[ChildSpec],
    width: MeasureSpec,
    height: MeasureSpec,
    measurer: &mut M,
) -> MeasurePass {
    let config = config.normalized();
    let columns = effective_columns(config.columns, children.len());

    let mut measured = Vec::with_capacity(children.len());
    for (index, spec) in children.iter().enumerate() {
        if spec.is_gone() {
            continue;
        }

        let spec = ChildSpec {
            margin: spec.margin.clamped(),
            ..*spec
        };
        let (width_dim, height_dim) =
            resolve_dimensions(&config, &spec, columns, width.size, children.len());
        let child_width = child_measure_spec(
            width,
            config.padding.horizontal().saturating_add(spec.margin.horizontal()),
            width_dim,
        );
        let child_height = child_measure_spec(
            height,
            config.padding.vertical().saturating_add(spec.margin.vertical()),
            height_dim,
        );

        let size = measurer.measure_child(index, child_width, child_height);
        trace!(
            "child {}: {:?} x {:?} -> {}x{}",
            index,
            child_width,
            child_height,
            size.width,
            size.height
        );
        measured.push(MeasuredChild {
            index,
            size: Size::new(size.width.max(0), size.height.max(0)),
            margin: spec.margin,
        });
    }

    let boxes: Vec<Size> = measured.iter().map(MeasuredChild::margin_box).collect();
    let rows = partition_rows(
        &boxes,
        content_limit(width.size, &config.padding),
        config.horizontal_gap,
    );

    let own_height = match height.mode {
        MeasureMode::Exact => height.size.max(0),
        MeasureMode::AtMost | MeasureMode::Unspecified => config
            .padding
            .vertical()
            .saturating_add(stacked_height(&rows, config.vertical_gap)),
    };
    let size = Size::new(width.size.max(0), own_height);

    debug!(
        "measured {} of {} children into {} rows (columns: {:?}), size {}x{}",
        measured.len(),
        children.len(),
        rows.len(),
        columns,
        size.width,
        size.height
    );

    MeasurePass {
        size,
        children: measured,
        rows,
        columns,
    }
}
