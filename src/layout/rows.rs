//! Row partitioning shared by the measure and placement passes
//!
//! Both passes derive their rows from this one routine, so the rows used
//! to size the container are always the rows children are placed in.

use super::types::{Insets, Px, Row, Size};

/// Horizontal space rows may fill inside a container of the given width
pub fn content_limit(container_width: Px, padding: &Insets) -> Px {
    container_width.saturating_sub(padding.horizontal()).max(0)
}

/// Split margin boxes into rows, left to right
///
/// A box starts a new row when the running cursor plus its width exceeds
/// `limit`. The first box of a row never wraps, so a box wider than the
/// limit still gets a row of its own.
pub fn partition_rows(boxes: &[Size], limit: Px, gap: Px) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut cursor: Px = 0;
    let mut height: Px = 0;

    for (i, size) in boxes.iter().enumerate() {
        if i > start && cursor.saturating_add(size.width) > limit {
            rows.push(Row {
                start,
                end: i,
                height,
            });
            start = i;
            cursor = 0;
            height = 0;
        }
        cursor = cursor.saturating_add(size.width).saturating_add(gap);
        height = height.max(size.height);
    }

    if !boxes.is_empty() {
        rows.push(Row {
            start,
            end: boxes.len(),
            height,
        });
    }

    rows
}

/// Total height of stacked rows, one gap between each pair
pub fn stacked_height(rows: &[Row], gap: Px) -> Px {
    rows.iter().enumerate().fold(0, |total: Px, (i, row)| {
        let gap = if i == 0 { 0 } else { gap };
        total.saturating_add(gap).saturating_add(row.height)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes(widths: &[Px]) -> Vec<Size> {
        widths.iter().map(|&w| Size::new(w, 10)).collect()
    }

    fn starts(rows: &[Row]) -> Vec<usize> {
        rows.iter().map(|r| r.start).collect()
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(partition_rows(&[], 100, 10).is_empty());
        assert_eq!(stacked_height(&[], 5), 0);
    }

    #[test]
    fn test_wraps_when_cursor_plus_width_exceeds_limit() {
        let rows = partition_rows(&boxes(&[60, 60]), 100, 10);
        assert_eq!(starts(&rows), vec![0, 1]);
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        // 45 + 10 + 45 == 100
        let rows = partition_rows(&boxes(&[45, 45]), 100, 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_trailing_gap_does_not_count() {
        // The gap after the last box in a row is never charged
        let rows = partition_rows(&boxes(&[50, 50]), 100, 0);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_oversized_first_box_stays_alone() {
        let rows = partition_rows(&boxes(&[150, 20, 20]), 100, 0);
        assert_eq!(starts(&rows), vec![0, 1]);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_every_oversized_box_gets_its_own_row() {
        let rows = partition_rows(&boxes(&[150, 150, 150]), 100, 0);
        assert_eq!(starts(&rows), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_limit_places_one_per_row() {
        let rows = partition_rows(&boxes(&[1, 1, 1]), 0, 0);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_row_height_is_tallest_member() {
        let sizes = [Size::new(10, 40), Size::new(10, 70), Size::new(10, 20)];
        let rows = partition_rows(&sizes, 100, 0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].height, 70);
    }

    #[test]
    fn test_stacked_height() {
        let rows = [
            Row { start: 0, end: 1, height: 40 },
            Row { start: 1, end: 2, height: 50 },
            Row { start: 2, end: 3, height: 30 },
        ];
        assert_eq!(stacked_height(&rows, 5), 130);
    }

    #[test]
    fn test_content_limit() {
        assert_eq!(content_limit(100, &Insets::new(10, 0, 15, 0)), 75);
        assert_eq!(content_limit(10, &Insets::uniform(20)), 0);
        assert_eq!(content_limit(-50, &Insets::zero()), 0);
    }
}
