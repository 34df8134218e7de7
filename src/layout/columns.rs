//! Column-count resolution

use super::config::{ColumnMode, LayoutConfig};
use super::types::{Insets, Px};

/// Pick a column count for an auto grid from the number of children
///
/// Tuned for small square photo galleries, not a general rule: one item
/// fills the row, two or four items form a 2-wide grid, everything else
/// is 3-wide. Zero children also yields 3, though with nothing to lay
/// out the value is never applied.
pub fn resolve_auto_columns(child_count: usize) -> u32 {
    match child_count {
        1 => 1,
        2 | 4 => 2,
        _ => 3,
    }
}

/// Column count in force for one pass, or `None` for natural sizing
pub fn effective_columns(columns: ColumnMode, child_count: usize) -> Option<u32> {
    match columns {
        ColumnMode::Natural | ColumnMode::Fixed(0) => None,
        ColumnMode::Fixed(n) => Some(n),
        ColumnMode::AutoGrid => Some(resolve_auto_columns(child_count)),
    }
}

/// Width of one column cell for a child with the given margin
///
/// `(available - padding - (n - 1) * gap) / n - margins`, floored at zero.
pub fn cell_width(config: &LayoutConfig, available_width: Px, columns: u32, margin: &Insets) -> Px {
    let columns = Px::try_from(columns).unwrap_or(Px::MAX).max(1);
    let gaps = config.horizontal_gap.saturating_mul(columns - 1);
    let usable = available_width
        .saturating_sub(config.padding.horizontal())
        .saturating_sub(gaps);
    (usable / columns)
        .saturating_sub(margin.horizontal())
        .max(0)
}
