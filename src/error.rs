//! Error types for projections, formatting and file I/O

use thiserror::Error;

/// Everything that can go wrong in the calculator.
///
/// Projection arithmetic itself cannot fail; errors come from rejected
/// inputs or from reading and writing files.
#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    #[error("CSV row {row}: {source}")]
    CsvRow {
        row: usize,
        #[source]
        source: Box<InvestmentError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InvestmentError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// True for rejected inputs, including those found inside a CSV row
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => true,
            Self::CsvRow { source, .. } => source.is_invalid_argument(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvestmentError>;
