//! Page-grid references and source-image tiling.

use crate::error::ResourceError;

use super::{COLUMNS_PER_PAGE, ROWS_PER_PAGE};

/// One page tile of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpan {
    /// First source column on this page.
    pub start_column: u32,
    /// Columns on this page (≤ `COLUMNS_PER_PAGE`; less on the right edge).
    pub columns: u32,
    pub start_row: u32,
    pub rows: u32,
    /// Page reference, e.g. `0A1`.
    pub reference: String,
}

/// Build the page reference grid: `{image_index}{row_letter}{column_number}`.
///
/// A 3×2 grid for image 0 is:
///
/// ```text
/// 0A1 0A2 0A3
/// 0B1 0B2 0B3
/// ```
///
/// # Errors
///
/// `ResourceError::GridTooTall` when more than 26 page rows are needed.
pub fn page_grid(
    columns: u32,
    rows: u32,
    image_index: usize,
) -> Result<Vec<Vec<String>>, ResourceError> {
    if rows > 26 {
        return Err(ResourceError::GridTooTall { rows });
    }

    let mut grid = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let letter = char::from(b'A' + u8::try_from(row).unwrap_or(0));
        let mut row_refs = Vec::with_capacity(columns as usize);
        for column in 0..columns {
            row_refs.push(format!("{image_index}{letter}{}", column + 1));
        }
        grid.push(row_refs);
    }
    Ok(grid)
}

/// Tile a `width`×`height` source image into page spans, row-major,
/// referencing the given page grid.
#[must_use]
pub fn page_spans(width: u32, height: u32, grid: &[Vec<String>]) -> Vec<PageSpan> {
    let mut spans = Vec::new();
    for (row_page, row_refs) in grid.iter().enumerate() {
        let start_row = u32::try_from(row_page).unwrap_or(0) * ROWS_PER_PAGE;
        for (column_page, reference) in row_refs.iter().enumerate() {
            let start_column = u32::try_from(column_page).unwrap_or(0) * COLUMNS_PER_PAGE;
            spans.push(PageSpan {
                start_column,
                columns: COLUMNS_PER_PAGE.min(width - start_column),
                start_row,
                rows: ROWS_PER_PAGE.min(height - start_row),
                reference: reference.clone(),
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_references_match_layout() {
        let grid = page_grid(3, 2, 0).unwrap();
        assert_eq!(
            grid,
            vec![
                vec!["0A1", "0A2", "0A3"],
                vec!["0B1", "0B2", "0B3"],
            ]
        );
    }

    #[test]
    fn grid_carries_image_index() {
        let grid = page_grid(1, 1, 3).unwrap();
        assert_eq!(grid[0][0], "3A1");
    }

    #[test]
    fn grid_taller_than_alphabet_is_rejected() {
        let result = page_grid(1, 27, 0);
        assert!(matches!(result, Err(ResourceError::GridTooTall { rows: 27 })));
        assert!(page_grid(1, 26, 0).is_ok());
    }

    #[test]
    fn spans_tile_row_major_with_partial_edges() {
        // 31×45 pixels → 3 column pages (15, 15, 1) × 3 row pages (20, 20, 5).
        let grid = page_grid(3, 3, 0).unwrap();
        let spans = page_spans(31, 45, &grid);
        assert_eq!(spans.len(), 9);

        assert_eq!(spans[0].reference, "0A1");
        assert_eq!((spans[0].columns, spans[0].rows), (15, 20));

        // Right edge of the first page row.
        assert_eq!(spans[2].reference, "0A3");
        assert_eq!(spans[2].start_column, 30);
        assert_eq!((spans[2].columns, spans[2].rows), (1, 20));

        // Bottom-right corner.
        assert_eq!(spans[8].reference, "0C3");
        assert_eq!((spans[8].columns, spans[8].rows), (1, 5));
        assert_eq!(spans[8].start_row, 40);
    }

    #[test]
    fn exact_multiple_has_full_pages_only() {
        let grid = page_grid(2, 1, 1).unwrap();
        let spans = page_spans(30, 20, &grid);
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.columns == 15 && s.rows == 20));
        assert_eq!(spans[1].reference, "1A2");
    }
}
