//! Configuration for the flow layout engine

use super::types::{Insets, Px};

/// Column override applied to every child's width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    /// Children keep their own declared widths
    #[default]
    Natural,
    /// Every child gets an equal share of the row; zero behaves as `Natural`
    Fixed(u32),
    /// Column count picked from the number of children
    AutoGrid,
}

/// Configuration options for flow layout computation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    /// Space between neighbouring children in a row
    pub horizontal_gap: Px,

    /// Space between consecutive rows
    pub vertical_gap: Px,

    /// Column override
    pub columns: ColumnMode,

    /// The container's own padding
    pub padding: Insets,
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between children in a row
    pub fn with_horizontal_gap(mut self, gap: Px) -> Self {
        self.horizontal_gap = gap.max(0);
        self
    }

    /// Set the gap between rows
    pub fn with_vertical_gap(mut self, gap: Px) -> Self {
        self.vertical_gap = gap.max(0);
        self
    }

    /// Set the column mode
    pub fn with_columns(mut self, columns: ColumnMode) -> Self {
        self.columns = columns;
        self
    }

    /// Set the container padding
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding.clamped();
        self
    }

    /// Copy with negative gaps and padding raised to zero
    ///
    /// The fields are public, so the passes work from this copy rather
    /// than trusting whatever was assigned directly.
    pub fn normalized(&self) -> Self {
        Self {
            horizontal_gap: self.horizontal_gap.max(0),
            vertical_gap: self.vertical_gap.max(0),
            columns: self.columns,
            padding: self.padding.clamped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.horizontal_gap, 0);
        assert_eq!(config.vertical_gap, 0);
        assert_eq!(config.columns, ColumnMode::Natural);
        assert_eq!(config.padding, Insets::zero());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_horizontal_gap(10)
            .with_vertical_gap(5)
            .with_columns(ColumnMode::Fixed(3))
            .with_padding(Insets::uniform(8));

        assert_eq!(config.horizontal_gap, 10);
        assert_eq!(config.vertical_gap, 5);
        assert_eq!(config.columns, ColumnMode::Fixed(3));
        assert_eq!(config.padding, Insets::uniform(8));
    }

    #[test]
    fn test_builder_clamps_negative_lengths() {
        let config = LayoutConfig::new()
            .with_horizontal_gap(-4)
            .with_vertical_gap(-1)
            .with_padding(Insets::new(-2, 3, 0, -9));

        assert_eq!(config.horizontal_gap, 0);
        assert_eq!(config.vertical_gap, 0);
        assert_eq!(config.padding, Insets::new(0, 3, 0, 0));
    }

    #[test]
    fn test_normalized_repairs_direct_assignment() {
        let config = LayoutConfig {
            horizontal_gap: -3,
            vertical_gap: 7,
            columns: ColumnMode::AutoGrid,
            padding: Insets::new(-1, -1, 2, 2),
        };
        let normalized = config.normalized();
        assert_eq!(normalized.horizontal_gap, 0);
        assert_eq!(normalized.vertical_gap, 7);
        assert_eq!(normalized.columns, ColumnMode::AutoGrid);
        assert_eq!(normalized.padding, Insets::new(0, 0, 2, 2));
    }
}
