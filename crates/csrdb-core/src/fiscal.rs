//! Fiscal years, CSR programs and CSR pillars.

use serde::{Deserialize, Serialize};

/// A budgeting period. At most one fiscal year is active at any time; the
/// access layer enforces the invariant on activation and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYear {
    pub id: i64,
    /// Year label, e.g. "2024". Sorted numerically on listing.
    pub tahun_fiskal: String,
    pub tanggal_mulai: String,
    pub tanggal_selesai: String,
    pub total_anggaran: i64,
    pub is_active: bool,
}

/// A CSR program, loosely tied to a fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrProgram {
    pub id: i64,
    pub fiscal_year_id: i64,
    /// Unique program number, e.g. "CSR-24-001".
    pub nomor_program: String,
    pub nama_program: String,
    pub deskripsi_program: String,
}

/// A named thematic category under which CSR programs are grouped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrPilar {
    pub id: i64,
    pub nama_pilar: String,
    pub deskripsi: String,
}
