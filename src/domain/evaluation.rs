//! The classification engine shared by every indicator.
//!
//! Evaluation is a pure function of the inputs and the indicator's static
//! table: validate, compute the metric, take the first band containing it,
//! and copy that band's text plus the indicator metadata into a fresh
//! [`EvaluationResult`]. Validation failures never escape; they come back
//! as a result classified [`Classification::Error`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::domain::classification::{Category, Classification};
use crate::domain::error::ValidationError;
use crate::domain::indicator::{IndicatorDefinition, InputShape};
use crate::domain::input::NumericInput;
use crate::domain::range_rule::{RangeRule, select_rule};

pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub indicator: String,
    /// Metric the bands were matched against; `None` when validation failed.
    pub metric: Option<f64>,
    pub classification: Classification,
    pub range: String,
    pub description: String,
    pub definition: String,
    pub category: Category,
    pub formula: String,
    pub risks: String,
    pub cross_reference: String,
    pub recommendation: String,
}

impl EvaluationResult {
    pub fn is_error(&self) -> bool {
        self.classification.is_error()
    }

    /// Flat string mapping of every field, for serializers that want plain
    /// key/value pairs.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        map.insert("indicator", self.indicator.clone());
        map.insert(
            "metric",
            self.metric
                .map_or_else(|| NOT_APPLICABLE.to_string(), |v| v.to_string()),
        );
        map.insert("classification", self.classification.to_string());
        map.insert("range", self.range.clone());
        map.insert("description", self.description.clone());
        map.insert("definition", self.definition.clone());
        map.insert("category", self.category.to_string());
        map.insert("formula", self.formula.clone());
        map.insert("risks", self.risks.clone());
        map.insert("cross_reference", self.cross_reference.clone());
        map.insert("recommendation", self.recommendation.clone());
        map
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<EvaluationResult: {} | Range: {}>",
            self.classification, self.range
        )
    }
}

impl IndicatorDefinition {
    /// Evaluate a single-input indicator.
    pub fn evaluate(&self, value: impl Into<NumericInput>) -> EvaluationResult {
        self.evaluate_inputs(&[value.into()])
    }

    /// Evaluate a ratio indicator from its numerator and denominator.
    pub fn evaluate_pair(
        &self,
        numerator: impl Into<NumericInput>,
        denominator: impl Into<NumericInput>,
    ) -> EvaluationResult {
        self.evaluate_inputs(&[numerator.into(), denominator.into()])
    }

    /// Evaluate with an arbitrary input list; the count must match the
    /// indicator's input shape.
    pub fn evaluate_inputs(&self, inputs: &[NumericInput]) -> EvaluationResult {
        let outcome = self
            .metric(inputs)
            .and_then(|x| self.classify(x).map(|rule| (x, rule)));

        match outcome {
            Ok((x, rule)) => {
                debug!(
                    indicator = self.key,
                    metric = x,
                    classification = %rule.classification,
                    "indicator evaluated"
                );
                self.result_from_rule(x, rule)
            }
            Err(err) => {
                if matches!(err, ValidationError::NoMatchingRange { .. }) {
                    error!(indicator = self.key, %err, "range table has a gap");
                } else {
                    warn!(indicator = self.key, %err, "invalid indicator input");
                }
                self.error_result(&err)
            }
        }
    }

    /// Validate the inputs and compute the value the bands are matched on.
    pub fn metric(&self, inputs: &[NumericInput]) -> Result<f64, ValidationError> {
        let expected = self.inputs.arity();
        if inputs.len() != expected {
            return Err(ValidationError::WrongArity {
                indicator: self.key.to_string(),
                expected,
                got: inputs.len(),
            });
        }

        match self.inputs {
            InputShape::Single { .. } => inputs[0].to_f64(),
            InputShape::Ratio { denominator, .. } => {
                let num = inputs[0].to_f64()?;
                let den = inputs[1].to_f64()?;
                if den == 0.0 {
                    return Err(ValidationError::ZeroDenominator {
                        indicator: self.key.to_string(),
                        denominator: denominator.to_string(),
                    });
                }
                if den < 0.0 {
                    return Err(ValidationError::NegativeDenominator {
                        indicator: self.key.to_string(),
                        denominator: denominator.to_string(),
                        value: den,
                    });
                }
                let ratio = num / den;
                if !ratio.is_finite() {
                    return Err(ValidationError::NotFinite { value: ratio });
                }
                Ok(ratio)
            }
        }
    }

    /// The band containing `x`.
    pub fn classify(&self, x: f64) -> Result<&'static RangeRule, ValidationError> {
        select_rule(self.rules, x).ok_or_else(|| ValidationError::NoMatchingRange {
            indicator: self.key.to_string(),
            value: x,
        })
    }

    /// Build a result from caller-supplied text. Every text argument must
    /// be non-empty after trimming; the stored text is trimmed.
    pub fn build_result(
        &self,
        classification: Classification,
        range: &str,
        description: &str,
        risks: &str,
        cross_reference: &str,
        recommendation: &str,
    ) -> Result<EvaluationResult, ValidationError> {
        let range = require_text("range", range)?;
        let description = require_text("description", description)?;
        let risks = require_text("risks", risks)?;
        let cross_reference = require_text("cross_reference", cross_reference)?;
        let recommendation = require_text("recommendation", recommendation)?;

        Ok(EvaluationResult {
            indicator: self.key.to_string(),
            metric: None,
            classification,
            range,
            description,
            definition: self.definition.trim().to_string(),
            category: self.category,
            formula: self.formula.to_string(),
            risks,
            cross_reference,
            recommendation,
        })
    }

    /// The Error-classified result reported for a failed evaluation.
    pub fn error_result(&self, err: &ValidationError) -> EvaluationResult {
        EvaluationResult {
            indicator: self.key.to_string(),
            metric: None,
            classification: Classification::Error,
            range: NOT_APPLICABLE.to_string(),
            description: format!(
                "An error occurred while processing {}: {err}. Check the input data and make sure the values are valid numbers.",
                self.name
            ),
            definition: self.definition.trim().to_string(),
            category: self.category,
            formula: self.formula.to_string(),
            risks: NOT_APPLICABLE.to_string(),
            cross_reference: NOT_APPLICABLE.to_string(),
            recommendation: NOT_APPLICABLE.to_string(),
        }
    }

    fn result_from_rule(&self, x: f64, rule: &RangeRule) -> EvaluationResult {
        EvaluationResult {
            indicator: self.key.to_string(),
            metric: Some(x),
            classification: rule.classification,
            range: rule.range.to_string(),
            description: rule.description.to_string(),
            definition: self.definition.trim().to_string(),
            category: self.category,
            formula: self.formula.to_string(),
            risks: rule.risks.to_string(),
            cross_reference: rule.cross_reference.to_string(),
            recommendation: rule.recommendation.to_string(),
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
