//! Snapshot configuration validation.
//!
//! Checks the shape of an INI snapshot before it is loaded. Indicator values
//! themselves are not checked here: a malformed value is still evaluated and
//! reported as an Error result.

use crate::domain::error::RatioTierError;
use crate::domain::indicator::IndicatorKind;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub const COMPANY_SECTION: &str = "company";
pub const INDICATORS_SECTION: &str = "indicators";
pub const OUTPUT_SECTION: &str = "output";

pub const REPORT_FORMATS: [&str; 3] = ["text", "json", "csv"];
pub const MAX_PRECISION: i64 = 10;

pub fn validate_snapshot_config(config: &dyn ConfigPort) -> Result<(), RatioTierError> {
    validate_company(config)?;
    validate_as_of(config)?;
    validate_indicators(config)?;
    validate_output(config)?;
    Ok(())
}

/// Split an indicator value into its comma-separated inputs.
pub fn split_inputs(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

pub fn parse_as_of(value: Option<&str>) -> Result<Option<NaiveDate>, RatioTierError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| RatioTierError::ConfigInvalid {
                section: COMPANY_SECTION.to_string(),
                key: "as_of".to_string(),
                reason: "invalid as_of format, expected YYYY-MM-DD".to_string(),
            }),
    }
}

fn validate_company(config: &dyn ConfigPort) -> Result<(), RatioTierError> {
    match config.get_string(COMPANY_SECTION, "name") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(RatioTierError::ConfigMissing {
            section: COMPANY_SECTION.to_string(),
            key: "name".to_string(),
        }),
    }
}

fn validate_as_of(config: &dyn ConfigPort) -> Result<(), RatioTierError> {
    parse_as_of(config.get_string(COMPANY_SECTION, "as_of").as_deref()).map(|_| ())
}

fn validate_indicators(config: &dyn ConfigPort) -> Result<(), RatioTierError> {
    if !config.has_section(INDICATORS_SECTION) {
        return Err(RatioTierError::ConfigMissing {
            section: INDICATORS_SECTION.to_string(),
            key: "<any indicator>".to_string(),
        });
    }
    let keys = config.keys(INDICATORS_SECTION);
    if keys.is_empty() {
        return Err(RatioTierError::ConfigInvalid {
            section: INDICATORS_SECTION.to_string(),
            key: "<any indicator>".to_string(),
            reason: "no indicators listed".to_string(),
        });
    }

    for key in keys {
        let kind: IndicatorKind = key
            .parse()
            .map_err(|_| RatioTierError::UnknownIndicator { name: key.clone() })?;
        let raw = config
            .get_string(INDICATORS_SECTION, &key)
            .unwrap_or_default();
        let expected = kind.definition().inputs.arity();
        let got = split_inputs(&raw).len();
        if got != expected {
            return Err(RatioTierError::ConfigInvalid {
                section: INDICATORS_SECTION.to_string(),
                key,
                reason: format!("expected {expected} value(s), got {got}"),
            });
        }
    }
    Ok(())
}

fn validate_output(config: &dyn ConfigPort) -> Result<(), RatioTierError> {
    if let Some(format) = config.get_string(OUTPUT_SECTION, "format") {
        let format = format.trim().to_lowercase();
        if !REPORT_FORMATS.contains(&format.as_str()) {
            return Err(RatioTierError::ConfigInvalid {
                section: OUTPUT_SECTION.to_string(),
                key: "format".to_string(),
                reason: format!("format must be one of {}", REPORT_FORMATS.join(", ")),
            });
        }
    }

    if let Some(raw) = config.get_string(OUTPUT_SECTION, "precision") {
        let in_range = raw
            .trim()
            .parse::<i64>()
            .is_ok_and(|p| (0..=MAX_PRECISION).contains(&p));
        if !in_range {
            return Err(RatioTierError::ConfigInvalid {
                section: OUTPUT_SECTION.to_string(),
                key: "precision".to_string(),
                reason: format!("precision must be an integer between 0 and {MAX_PRECISION}"),
            });
        }
    }

    if let Some(raw) = config.get_string(OUTPUT_SECTION, "show_definition") {
        let value = raw.trim().to_lowercase();
        if !["true", "yes", "1", "false", "no", "0"].contains(&value.as_str()) {
            return Err(RatioTierError::ConfigInvalid {
                section: OUTPUT_SECTION.to_string(),
                key: "show_definition".to_string(),
                reason: "show_definition must be true or false".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn validate(content: &str) -> Result<(), RatioTierError> {
        let config = FileConfigAdapter::from_string(content).unwrap();
        validate_snapshot_config(&config)
    }

    const VALID: &str = r#"
[company]
name = Acme Holdings
ticker = ACME3
as_of = 2024-12-31

[indicators]
p_vp = 1.2
current_ratio = 150, 100
net_debt = -35

[output]
format = json
"#;

    #[test]
    fn valid_config_passes() {
        assert!(validate(VALID).is_ok());
    }

    #[test]
    fn missing_company_name() {
        let err = validate("[indicators]\nroe = 12\n").unwrap_err();
        assert!(matches!(err, RatioTierError::ConfigMissing { ref key, .. } if key == "name"));
    }

    #[test]
    fn missing_indicators_section() {
        let err = validate("[company]\nname = Acme\n").unwrap_err();
        assert!(matches!(
            err,
            RatioTierError::ConfigMissing { ref section, .. } if section == "indicators"
        ));
    }

    #[test]
    fn empty_indicators_section() {
        let err = validate("[company]\nname = Acme\n[indicators]\n").unwrap_err();
        assert!(matches!(err, RatioTierError::ConfigInvalid { ref section, .. } if section == "indicators"));
    }

    #[test]
    fn unknown_indicator_key() {
        let err = validate("[company]\nname = Acme\n[indicators]\nmagic = 3\n").unwrap_err();
        assert!(matches!(err, RatioTierError::UnknownIndicator { ref name } if name == "magic"));
    }

    #[test]
    fn arity_mismatch() {
        let err =
            validate("[company]\nname = Acme\n[indicators]\ncurrent_ratio = 1.5\n").unwrap_err();
        match err {
            RatioTierError::ConfigInvalid { key, reason, .. } => {
                assert_eq!(key, "current_ratio");
                assert_eq!(reason, "expected 2 value(s), got 1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_value_is_not_a_config_error() {
        assert!(validate("[company]\nname = Acme\n[indicators]\nroe = abc\n").is_ok());
    }

    #[test]
    fn bad_as_of_date() {
        let err = validate("[company]\nname = Acme\nas_of = 31/12/2024\n[indicators]\nroe = 1\n")
            .unwrap_err();
        assert!(matches!(err, RatioTierError::ConfigInvalid { ref key, .. } if key == "as_of"));
    }

    #[test]
    fn bad_output_format() {
        let err = validate("[company]\nname = Acme\n[indicators]\nroe = 1\n[output]\nformat = pdf\n")
            .unwrap_err();
        assert!(matches!(err, RatioTierError::ConfigInvalid { ref key, .. } if key == "format"));
    }

    #[test]
    fn precision_out_of_range() {
        let err = validate(
            "[company]\nname = Acme\n[indicators]\nroe = 1\n[output]\nprecision = 42\n",
        )
        .unwrap_err();
        assert!(matches!(err, RatioTierError::ConfigInvalid { ref key, .. } if key == "precision"));
    }

    #[test]
    fn non_integer_precision_is_rejected() {
        for bad in ["abc", "2.5", "-1"] {
            let err = validate(&format!(
                "[company]\nname = Acme\n[indicators]\nroe = 1\n[output]\nprecision = {bad}\n"
            ))
            .unwrap_err();
            assert!(
                matches!(err, RatioTierError::ConfigInvalid { ref key, .. } if key == "precision"),
                "precision = {bad:?}"
            );
        }
        assert!(validate("[company]\nname = Acme\n[indicators]\nroe = 1\n[output]\nprecision = 0\n").is_ok());
    }

    #[test]
    fn show_definition_must_be_boolean() {
        let err = validate(
            "[company]\nname = Acme\n[indicators]\nroe = 1\n[output]\nshow_definition = maybe\n",
        )
        .unwrap_err();
        assert!(matches!(err, RatioTierError::ConfigInvalid { ref key, .. } if key == "show_definition"));
        assert!(validate("[company]\nname = Acme\n[indicators]\nroe = 1\n[output]\nshow_definition = no\n").is_ok());
    }

    #[test]
    fn split_inputs_trims() {
        assert_eq!(split_inputs(" 150 ,100 "), vec!["150", "100"]);
        assert_eq!(split_inputs("1.2"), vec!["1.2"]);
    }

    #[test]
    fn as_of_optional() {
        assert_eq!(parse_as_of(None).unwrap(), None);
        assert_eq!(
            parse_as_of(Some("2024-06-30")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
    }
}
