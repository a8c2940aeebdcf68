//! Core domain types and logic.

pub mod classification;
pub mod config_validation;
pub mod error;
pub mod evaluation;
pub mod indicator;
pub mod input;
pub mod range_rule;
pub mod snapshot;
pub mod table_check;
