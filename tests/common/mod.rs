#![allow(dead_code)]

use ratiotier::domain::error::RatioTierError;
use ratiotier::domain::indicator::IndicatorDefinition;
use ratiotier::domain::snapshot::Snapshot;
use ratiotier::ports::snapshot_port::SnapshotPort;
use std::io::Write;

/// Snapshot source backed by an in-memory value or a canned error.
pub struct MockSnapshotPort {
    pub snapshot: Option<Snapshot>,
    pub error: Option<String>,
}

impl MockSnapshotPort {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            snapshot: None,
            error: Some(reason.to_string()),
        }
    }
}

impl SnapshotPort for MockSnapshotPort {
    fn load_snapshot(&self) -> Result<Snapshot, RatioTierError> {
        if let Some(reason) = &self.error {
            return Err(RatioTierError::Csv {
                file: "mock".into(),
                reason: reason.clone(),
            });
        }
        Ok(self.snapshot.clone().unwrap_or_else(|| Snapshot {
            company: String::new(),
            ticker: String::new(),
            as_of: None,
            entries: Vec::new(),
        }))
    }
}

pub fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Every finite bound value in a table, in order, without duplicates.
pub fn thresholds(def: &IndicatorDefinition) -> Vec<f64> {
    let mut values: Vec<f64> = def
        .rules
        .iter()
        .flat_map(|r| [r.lower.value(), r.upper.value()])
        .flatten()
        .collect();
    values.dedup();
    values
}

/// Thresholds plus points just either side of each and far out in both tails.
pub fn sample_points(def: &IndicatorDefinition) -> Vec<f64> {
    let mut points = vec![-1.0e9, -1.0, 1.0e9];
    for t in thresholds(def) {
        points.extend([t - 1e-6, t, t + 1e-6]);
    }
    points
}

pub const ACME_INI: &str = r#"
[company]
name = Acme Holdings
ticker = ACME3
as_of = 2024-12-31

[indicators]
price_to_book = 1.2
current_ratio = 150, 100
roe = 30
price_to_earnings = -5
dividend_yield = 0
net_debt = -35
net_debt_to_ebitda = 120, 0
eps = n/a

[output]
format = text
precision = 2
"#;

pub const ACME_CSV: &str = "indicator,value,denominator\n\
price_to_book,1.2,\n\
current_ratio,150,100\n\
roe,30,\n\
p_l,-5,\n\
dy,0,\n\
net_debt_to_ebitda,120,0\n\
eps,n/a,\n";
