//! Error types for the layout engine

use thiserror::Error;

/// Errors raised by the flow container outside the geometry itself
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout was requested without a current measure pass
    #[error("layout requested before measure (or after the child list or configuration changed)")]
    NotMeasured,

    /// A child mutation addressed an index past the end of the child list
    #[error("child index {index} out of range for {len} children")]
    ChildIndexOutOfRange { index: usize, len: usize },
}

impl LayoutError {
    /// Create a child index error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::ChildIndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = LayoutError::out_of_range(7, 3);
        assert_eq!(err.to_string(), "child index 7 out of range for 3 children");
    }

    #[test]
    fn test_not_measured_display() {
        assert!(LayoutError::NotMeasured.to_string().contains("before measure"));
    }
}
