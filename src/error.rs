use thiserror::Error;

/// Error parsing a cron schedule expression.
///
/// Every variant except [`FieldCount`](ParseError::FieldCount) and
/// [`UnknownAlias`](ParseError::UnknownAlias) carries the name of the schedule
/// field and the raw token which caused the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseError {
    /// Wrong number of whitespace-separated fields in the expression.
    #[error("invalid number of fields: {0}, expected 5, 6 or 7")]
    FieldCount(usize),
    /// Unknown `@` macro alias.
    #[error("unknown schedule alias: {0}")]
    UnknownAlias(String),
    /// Non-numeric, unrecognized or out-of-bounds value.
    #[error("invalid {field} value: {token}")]
    InvalidValue {
        /// Name of the schedule field.
        field: &'static str,
        /// Offending token.
        token: String,
    },
    /// Range with the lower bound greater than the upper one.
    #[error("invalid {field} range: {token}")]
    InvalidRange {
        /// Name of the schedule field.
        field: &'static str,
        /// Offending token.
        token: String,
    },
    /// Malformed or zero step value.
    #[error("invalid {field} step: {token}")]
    InvalidStep {
        /// Name of the schedule field.
        field: &'static str,
        /// Offending token.
        token: String,
    },
    /// Empty field or empty item inside a list.
    #[error("invalid {field} syntax: {token}")]
    InvalidSyntax {
        /// Name of the schedule field.
        field: &'static str,
        /// Offending token.
        token: String,
    },
}

/// Error searching for a matching timestamp.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchError {
    /// No satisfying timestamp exists within the search horizon.
    ///
    /// This is a legitimate outcome for impossible or exhausted schedules
    /// (i.e. day of month `31` restricted to February), not a defect.
    #[error("no matching timestamp within the search horizon")]
    NotFound,
}
