//! Flow layout engine
//!
//! Children are laid out left to right and wrap into a new row whenever
//! the next one would overflow the container width. Layout runs in two
//! passes: [`measure`] sizes every child and the container, [`place`]
//! assigns final rectangles. Both passes take their rows from
//! [`partition_rows`], so they always agree on where rows break.

pub mod columns;
pub mod config;
pub mod container;
pub mod error;
pub mod measure;
pub mod place;
pub mod rows;
pub mod types;

pub use columns::{effective_columns, resolve_auto_columns};
pub use config::{ColumnMode, LayoutConfig};
pub use container::{FlowHost, FlowLayout};
pub use error::LayoutError;
pub use measure::{child_measure_spec, measure, ChildMeasurer, MeasurePass};
pub use place::place;
pub use rows::{partition_rows, stacked_height};
pub use types::*;
