//! Typed cell grid handed over by the spreadsheet decoder.
//!
//! The decoder is responsible for turning its native cell representation into
//! [`CellValue`]s. Dates in particular must already be calendar dates in the
//! reference timezone when they reach the parser; see
//! [`CellValue::from_utc_midnight`] for the usual conversion.

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;

/// The kind of a [`CellValue`], used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CellKind {
    #[display("text")]
    Text,
    #[display("number")]
    Number,
    #[display("boolean")]
    Boolean,
    #[display("date")]
    Date,
    #[display("empty")]
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    #[default]
    Empty,
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl CellValue {
    /// Materialise a date the decoder stamped as midnight UTC.
    ///
    /// Spreadsheet libraries commonly hand out calendar days as UTC instants.
    /// The day meant is the UTC calendar date, not whatever that instant is
    /// in the reference timezone (which would land on the previous evening
    /// west of Greenwich).
    pub fn from_utc_midnight(instant: DateTime<Utc>) -> Self {
        Self::Date(instant.date_naive())
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Self::Text(_) => CellKind::Text,
            Self::Number(_) => CellKind::Number,
            Self::Boolean(_) => CellKind::Boolean,
            Self::Date(_) => CellKind::Date,
            Self::Empty => CellKind::Empty,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Row-major grid of cells. Rows may be ragged; missing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGrid {
    rows: Vec<Vec<CellValue>>,
}

impl CellGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the cell at `(row, column)`, or [`CellValue::Empty`] when out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl From<Vec<Vec<CellValue>>> for CellGrid {
    fn from(rows: Vec<Vec<CellValue>>) -> Self {
        Self::new(rows)
    }
}

impl<R: IntoIterator<Item = CellValue>> FromIterator<R> for CellGrid {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|row| row.into_iter().collect()).collect())
    }
}
