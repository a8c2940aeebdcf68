//! Raw evaluator inputs and their validation.
//!
//! Numbers pass through (they must be finite). Strings must be a plain
//! non-negative decimal numeral: digits with at most one decimal point,
//! no sign, no exponent, no thousands separator.

use crate::domain::error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Missing,
    /// Any other value type; carries the type name for the error message.
    Unsupported(String),
}

impl NumericInput {
    /// Parse a field read from a file or the command line. A leading `-`
    /// is accepted in front of a decimal numeral so negative metrics can
    /// be expressed; anything else is kept as text and validated later.
    pub fn from_field(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericInput::Missing;
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            if let Some(v) = parse_decimal(rest) {
                return NumericInput::Number(-v);
            }
        }
        NumericInput::Text(raw.to_string())
    }

    pub fn to_f64(&self) -> Result<f64, ValidationError> {
        match self {
            NumericInput::Number(v) if v.is_finite() => Ok(*v),
            NumericInput::Number(v) => Err(ValidationError::NotFinite { value: *v }),
            NumericInput::Text(s) => parse_decimal(s.trim()).ok_or_else(|| {
                ValidationError::NotNumeric { value: s.clone() }
            }),
            NumericInput::Missing => Err(ValidationError::Missing),
            NumericInput::Unsupported(type_name) => Err(ValidationError::UnsupportedType {
                type_name: type_name.clone(),
            }),
        }
    }
}

/// `digits* [ '.' digits* ]` with at least one digit overall.
fn parse_decimal(s: &str) -> Option<f64> {
    let mut digits = 0usize;
    let mut points = 0usize;
    for ch in s.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    s.parse::<f64>().ok()
}

impl From<f64> for NumericInput {
    fn from(v: f64) -> Self {
        NumericInput::Number(v)
    }
}

impl From<f32> for NumericInput {
    fn from(v: f32) -> Self {
        NumericInput::Number(v as f64)
    }
}

impl From<i32> for NumericInput {
    fn from(v: i32) -> Self {
        NumericInput::Number(v as f64)
    }
}

impl From<i64> for NumericInput {
    fn from(v: i64) -> Self {
        NumericInput::Number(v as f64)
    }
}

impl From<u32> for NumericInput {
    fn from(v: u32) -> Self {
        NumericInput::Number(v as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(v: &str) -> Self {
        NumericInput::Text(v.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(v: String) -> Self {
        NumericInput::Text(v)
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(NumericInput::Missing, Into::into)
    }
}

impl From<&serde_json::Value> for NumericInput {
    fn from(v: &serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => NumericInput::Missing,
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| NumericInput::Unsupported("number".into()), NumericInput::Number),
            Value::String(s) => NumericInput::Text(s.clone()),
            Value::Bool(_) => NumericInput::Unsupported("bool".into()),
            Value::Array(_) => NumericInput::Unsupported("array".into()),
            Value::Object(_) => NumericInput::Unsupported("object".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(NumericInput::from(1.5).to_f64(), Ok(1.5));
        assert_eq!(NumericInput::from(-5).to_f64(), Ok(-5.0));
    }

    #[test]
    fn non_finite_numbers_rejected() {
        assert!(matches!(
            NumericInput::from(f64::NAN).to_f64(),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            NumericInput::from(f64::INFINITY).to_f64(),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn decimal_strings_accepted() {
        assert_eq!(NumericInput::from("12").to_f64(), Ok(12.0));
        assert_eq!(NumericInput::from("1.25").to_f64(), Ok(1.25));
        assert_eq!(NumericInput::from(".5").to_f64(), Ok(0.5));
        assert_eq!(NumericInput::from("3.").to_f64(), Ok(3.0));
        assert_eq!(NumericInput::from(" 7 ").to_f64(), Ok(7.0));
    }

    #[test]
    fn malformed_strings_rejected() {
        for bad in ["abc", "", ".", "-1", "+1", "1e3", "1,000", "1.2.3", "NaN", "inf"] {
            assert!(
                NumericInput::from(bad).to_f64().is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_and_unsupported() {
        assert_eq!(
            NumericInput::from(None::<f64>).to_f64(),
            Err(ValidationError::Missing)
        );
        assert_eq!(
            NumericInput::from(&json!(true)).to_f64(),
            Err(ValidationError::UnsupportedType {
                type_name: "bool".into()
            })
        );
        assert_eq!(NumericInput::from(&json!(null)), NumericInput::Missing);
        assert_eq!(NumericInput::from(&json!(2.5)).to_f64(), Ok(2.5));
        assert_eq!(NumericInput::from(&json!("2.5")).to_f64(), Ok(2.5));
    }

    #[test]
    fn from_field_accepts_sign() {
        assert_eq!(NumericInput::from_field("-250.5"), NumericInput::Number(-250.5));
        assert_eq!(NumericInput::from_field("  "), NumericInput::Missing);
        assert_eq!(
            NumericInput::from_field("12"),
            NumericInput::Text("12".into())
        );
        assert!(NumericInput::from_field("--3").to_f64().is_err());
        assert!(NumericInput::from_field("-x").to_f64().is_err());
    }
}
