//! Snapshot source port trait.

use crate::domain::error::RatioTierError;
use crate::domain::snapshot::Snapshot;

/// A source of company snapshots (INI file, CSV file, ...).
pub trait SnapshotPort {
    fn load_snapshot(&self) -> Result<Snapshot, RatioTierError>;
}
