//! Domain error types.

/// Why an input could not be turned into a classifiable metric.
///
/// `evaluate` never returns these to the caller: they are folded into an
/// Error-classified [`EvaluationResult`](crate::domain::evaluation::EvaluationResult).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{value}' is not a valid non-negative decimal number")]
    NotNumeric { value: String },

    #[error("unsupported input type: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("input value is missing")]
    Missing,

    #[error("input value must be finite, got {value}")]
    NotFinite { value: f64 },

    #[error("cannot divide by zero for {indicator}: {denominator} must not be zero")]
    ZeroDenominator {
        indicator: String,
        denominator: String,
    },

    #[error("{indicator} is not meaningful with a negative {denominator}, got {value}")]
    NegativeDenominator {
        indicator: String,
        denominator: String,
        value: f64,
    },

    #[error("{indicator} expects {expected} input(s), got {got}")]
    WrongArity {
        indicator: String,
        expected: usize,
        got: usize,
    },

    #[error("the parameter '{field}' must be a non-empty string")]
    EmptyField { field: &'static str },

    #[error("no range of {indicator} contains {value}")]
    NoMatchingRange { indicator: String, value: f64 },
}

/// A defect in a range table: the rules do not partition the real line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("{indicator}: table has no rules")]
    Empty { indicator: String },

    #[error("{indicator}: first rule must be unbounded below")]
    OpenStart { indicator: String },

    #[error("{indicator}: last rule must be unbounded above")]
    OpenEnd { indicator: String },

    #[error("{indicator}: rule {index} has an unbounded inner edge")]
    InnerUnbounded { indicator: String, index: usize },

    #[error("{indicator}: rule {index} ({range}) is an empty interval")]
    EmptyInterval {
        indicator: String,
        index: usize,
        range: String,
    },

    #[error("{indicator}: gap between rule {index} and rule {next} at {at}")]
    Gap {
        indicator: String,
        index: usize,
        next: usize,
        at: f64,
    },

    #[error("{indicator}: rule {index} and rule {next} overlap at {at}")]
    Overlap {
        indicator: String,
        index: usize,
        next: usize,
        at: f64,
    },
}

/// Top-level error type for ratiotier's outer surface (files, reports, CLI).
#[derive(Debug, thiserror::Error)]
pub enum RatioTierError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("unknown indicator: {name}")]
    UnknownIndicator { name: String },

    #[error("csv error in {file}: {reason}")]
    Csv { file: String, reason: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    TableDefect(#[from] TableError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RatioTierError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RatioTierError::Io(_) => 1,
            RatioTierError::ConfigParse { .. }
            | RatioTierError::ConfigMissing { .. }
            | RatioTierError::ConfigInvalid { .. } => 2,
            RatioTierError::Csv { .. } => 3,
            RatioTierError::UnknownIndicator { .. } => 4,
            RatioTierError::TableDefect(_) => 5,
            RatioTierError::Report { .. } => 6,
        }
    }
}

impl From<&RatioTierError> for std::process::ExitCode {
    fn from(err: &RatioTierError) -> Self {
        std::process::ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_message_names_indicator() {
        let err = ValidationError::ZeroDenominator {
            indicator: "current_ratio".into(),
            denominator: "current liabilities".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot divide by zero for current_ratio: current liabilities must not be zero"
        );
    }

    #[test]
    fn not_numeric_message_quotes_value() {
        let err = ValidationError::NotNumeric {
            value: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "'abc' is not a valid non-negative decimal number"
        );
    }

    #[test]
    fn table_error_converts_to_top_level() {
        let err: RatioTierError = TableError::Empty {
            indicator: "roe".into(),
        }
        .into();
        assert_eq!(err.to_string(), "roe: table has no rules");
        assert!(matches!(err, RatioTierError::TableDefect(_)));
    }

    #[test]
    fn exit_codes_per_family() {
        let cases = [
            (RatioTierError::Io(std::io::Error::other("disk")), 1),
            (
                RatioTierError::ConfigMissing {
                    section: "company".into(),
                    key: "name".into(),
                },
                2,
            ),
            (
                RatioTierError::Csv {
                    file: "a.csv".into(),
                    reason: "bad".into(),
                },
                3,
            ),
            (RatioTierError::UnknownIndicator { name: "x".into() }, 4),
            (
                RatioTierError::Report {
                    reason: "bad".into(),
                },
                6,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err}");
        }
    }
}
