//! Tree record data model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned when a record does not carry one
pub const STATUS_HEALTHY: &str = "healthy";
/// Status for trees flagged for a follow-up visit
pub const STATUS_NEEDS_ATTENTION: &str = "needs_attention";

/// One tracked tree, as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub id: i64,
    pub species: String,
    pub latitude: f64,
    pub longitude: f64,
    pub planted_date: NaiveDate,
    pub planter_name: Option<String>,
    pub notes: Option<String>,
    /// Free text; `healthy` and `needs_attention` are the recognized values,
    /// but writes are not restricted to them
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate counts over all current records, computed at query time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    pub total_trees: i64,
    pub species_count: i64,
    pub healthy_trees: i64,
    pub needs_attention: i64,
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Registry Statistics:")?;
        writeln!(f, "  Total trees: {}", self.total_trees)?;
        writeln!(f, "  Species: {}", self.species_count)?;
        writeln!(f, "  Healthy: {}", self.healthy_trees)?;
        write!(f, "  Needs attention: {}", self.needs_attention)
    }
}
