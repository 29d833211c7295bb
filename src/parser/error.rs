use crate::grid::CellKind;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unable to find the header row")]
    HeaderNotFound,
    #[error("unable to find the {0} column")]
    ColumnNotFound(String),
    #[error("invalid header row index {index} (sheet has {rows} rows)")]
    InvalidHeaderRow { index: usize, rows: usize },
    #[error("{field}: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
    #[error("failed to parse time string: {0:?}")]
    InvalidTimeString(String),
}

impl ParseError {
    pub(crate) fn invalid_field(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    pub(crate) fn wrong_kind(
        field: impl Into<String>,
        expected: &'static str,
        found: CellKind,
    ) -> Self {
        tracing::trace!(expected, %found, "cell has the wrong kind");
        Self::invalid_field(field, expected)
    }
}
