use std::collections::HashMap;

use crate::{grid::CellGrid, parser::ParseError};

/// Find the header row: `offset` rows below the first row whose first cell is `marker`.
pub fn find_header_row(grid: &CellGrid, marker: &str, offset: usize) -> Result<usize, ParseError> {
    let marker_row = grid
        .rows()
        .position(|row| row.first().and_then(|cell| cell.as_text()) == Some(marker))
        .ok_or(ParseError::HeaderNotFound)?;
    let header_row = marker_row + offset;
    tracing::debug!(marker_row, header_row, "found header row");
    Ok(header_row)
}

/// Resolve each of `names` to its column index in `header_row` by exact text match.
///
/// When a name occurs more than once the leftmost column wins.
pub fn find_columns(
    grid: &CellGrid,
    header_row: usize,
    names: &[&str],
) -> Result<HashMap<String, usize>, ParseError> {
    let Some(header) = grid.row(header_row) else {
        return Err(ParseError::InvalidHeaderRow {
            index: header_row,
            rows: grid.row_count(),
        });
    };

    let mut columns = HashMap::with_capacity(names.len());
    for &name in names {
        let index = header
            .iter()
            .position(|cell| cell.as_text() == Some(name))
            .ok_or_else(|| ParseError::ColumnNotFound(name.to_owned()))?;
        columns.insert(name.to_owned(), index);
    }
    tracing::trace!(?columns, "resolved columns");
    Ok(columns)
}
