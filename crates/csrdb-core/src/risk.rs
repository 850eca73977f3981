//! The three independent risk-taxonomy tables: likelihood, impact, level.
//!
//! The tables are not cross-linked; each is a flat reference list sorted by
//! its numeric `level` on listing.

use serde::{Deserialize, Serialize};

/// Likelihood taxonomy row ("Tingkat Kemungkinan Risiko").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLikelihood {
    pub id: i64,
    pub level: i64,
    pub keterangan: String,
    pub persentase: String,
}

/// Impact taxonomy row ("Dampak Risiko").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskImpact {
    pub id: i64,
    pub level: i64,
    pub dampak: String,
}

/// Overall risk level taxonomy row ("Tingkat Risiko").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLevel {
    pub id: i64,
    pub level: i64,
    pub tingkat: String,
    pub deskripsi: String,
    /// Display color token carried through from the UI layer.
    pub warna: String,
}
