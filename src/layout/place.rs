//! Placement pass
//!
//! Turns the sizes from a measure pass into final child rectangles.

use log::{debug, trace};

use super::config::LayoutConfig;
use super::measure::MeasurePass;
use super::rows::{content_limit, partition_rows};
use super::types::{MeasuredChild, PlacedChild, Px, Rect, Size};

/// Place every measured child inside a container of `container_width`
///
/// Rows are re-derived from the same margin boxes the measure pass used,
/// so as long as `container_width` is the measured width, children land
/// in exactly the rows the container height was computed from.
pub fn place(config: &LayoutConfig, pass: &MeasurePass, container_width: Px) -> Vec<PlacedChild> {
    let config = config.normalized();
    let boxes: Vec<Size> = pass.children.iter().map(MeasuredChild::margin_box).collect();
    let rows = partition_rows(
        &boxes,
        content_limit(container_width, &config.padding),
        config.horizontal_gap,
    );

    let mut placed = Vec::with_capacity(pass.children.len());
    let mut top = config.padding.top;

    for (row_index, row) in rows.iter().enumerate() {
        trace!(
            "row {}: children {}..{} at y={} height {}",
            row_index,
            row.start,
            row.end,
            top,
            row.height
        );

        let mut left = config.padding.left;
        for child in &pass.children[row.start..row.end] {
            let rect = Rect::from_origin(
                left.saturating_add(child.margin.left),
                top.saturating_add(child.margin.top),
                child.size,
            );
            trace!("child {} -> {:?}", child.index, rect);
            placed.push(PlacedChild {
                index: child.index,
                rect,
            });
            left = rect
                .right
                .saturating_add(child.margin.right)
                .saturating_add(config.horizontal_gap);
        }

        top = top
            .saturating_add(row.height)
            .saturating_add(config.vertical_gap);
    }

    debug!(
        "placed {} children in {} rows within width {}",
        placed.len(),
        rows.len(),
        container_width
    );

    placed
}
