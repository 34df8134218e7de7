//! The flow container
//!
//! Owns the configuration and the per-child specs, runs the two passes
//! on behalf of the host and commits the results back to it.

use log::debug;

use super::config::{ColumnMode, LayoutConfig};
use super::error::LayoutError;
use super::measure::{measure, ChildMeasurer, MeasurePass};
use super::place::place;
use super::types::{ChildSpec, Insets, MeasureSpec, PlacedChild, Px, Rect, Size};

/// What the host toolkit provides to the container
///
/// Measuring comes from [`ChildMeasurer`]; committing applies a child's
/// final bounds in container-local coordinates.
pub trait FlowHost: ChildMeasurer {
    fn commit_child(&mut self, index: usize, rect: Rect);
}

/// A container that lays its children out left to right, wrapping into rows
///
/// Every layout is a measure pass followed by a layout pass. The measure
/// pass is cached until the next measure or any change to the children or
/// configuration, whichever comes first.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: LayoutConfig,
    children: Vec<ChildSpec>,
    pass: Option<MeasurePass>,
}

impl FlowLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            children: Vec::new(),
            pass: None,
        }
    }

    /// Create a container with children already attached
    pub fn with_children(config: LayoutConfig, children: Vec<ChildSpec>) -> Self {
        Self {
            config,
            children,
            pass: None,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn children(&self) -> &[ChildSpec] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The cached measure pass, if still current
    pub fn last_pass(&self) -> Option<&MeasurePass> {
        self.pass.as_ref()
    }

    fn invalidate(&mut self) {
        self.pass = None;
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn set_horizontal_gap(&mut self, gap: Px) {
        self.config.horizontal_gap = gap.max(0);
        self.invalidate();
    }

    pub fn set_vertical_gap(&mut self, gap: Px) {
        self.config.vertical_gap = gap.max(0);
        self.invalidate();
    }

    pub fn set_columns(&mut self, columns: ColumnMode) {
        self.config.columns = columns;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.config.padding = padding.clamped();
        self.invalidate();
    }

    /// Attach a child at the end, returning its index
    pub fn add_child(&mut self, spec: ChildSpec) -> usize {
        self.children.push(spec);
        self.invalidate();
        self.children.len() - 1
    }

    /// Attach a child at `index`, shifting later children along
    pub fn insert_child(&mut self, index: usize, spec: ChildSpec) -> Result<(), LayoutError> {
        if index > self.children.len() {
            return Err(LayoutError::out_of_range(index, self.children.len()));
        }
        self.children.insert(index, spec);
        self.invalidate();
        Ok(())
    }

    /// Replace the spec of an attached child
    pub fn set_child(&mut self, index: usize, spec: ChildSpec) -> Result<(), LayoutError> {
        let len = self.children.len();
        let slot = self
            .children
            .get_mut(index)
            .ok_or(LayoutError::out_of_range(index, len))?;
        *slot = spec;
        self.invalidate();
        Ok(())
    }

    /// Detach a child, returning its spec
    pub fn remove_child(&mut self, index: usize) -> Result<ChildSpec, LayoutError> {
        if index >= self.children.len() {
            return Err(LayoutError::out_of_range(index, self.children.len()));
        }
        let spec = self.children.remove(index);
        self.invalidate();
        Ok(spec)
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
        self.invalidate();
    }

    /// Measure pass: returns the size this container wants from its parent
    pub fn on_measure<M: ChildMeasurer + ?Sized>(
        &mut self,
        host: &mut M,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size {
        let pass = measure(&self.config, &self.children, width, height, host);
        let size = pass.size;
        self.pass = Some(pass);
        size
    }

    /// Layout pass: places every laid-out child and commits it to the host
    ///
    /// `width` and `height` are the bounds the parent actually assigned.
    /// Rows follow `width`, which normally matches the measured width.
    pub fn on_layout<H: FlowHost + ?Sized>(
        &self,
        host: &mut H,
        width: Px,
        height: Px,
    ) -> Result<Vec<PlacedChild>, LayoutError> {
        let pass = self.pass.as_ref().ok_or(LayoutError::NotMeasured)?;
        if width != pass.size.width {
            debug!(
                "layout width {} differs from measured width {}",
                width, pass.size.width
            );
        }

        let placed = place(&self.config, pass, width);
        for child in &placed {
            host.commit_child(child.index, child.rect);
        }
        debug!(
            "committed {} children in a {}x{} container",
            placed.len(),
            width,
            height
        );
        Ok(placed)
    }
}
