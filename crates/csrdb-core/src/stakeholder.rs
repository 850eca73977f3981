//! Stakeholder profiles/types and the activity plan/implementation records.

use serde::{Deserialize, Serialize};

/// Whether a stakeholder is internal or external to the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kategori {
    Internal,
    Eksternal,
}

/// A stakeholder profile ("Profil Pemangku Kepentingan").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderProfile {
    pub id: i64,
    pub nama: String,
    pub kategori: Kategori,
    /// Free-text type name, loosely tied to [`StakeholderType::nama_tipe`].
    pub tipe: String,
    pub deskripsi: String,
    pub strategi_komunikasi: String,
}

/// A stakeholder type reference entry ("Tipe Pemangku Kepentingan").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderType {
    pub id: i64,
    pub nama_tipe: String,
    pub deskripsi: String,
}

/// A planned stakeholder engagement ("Rencana Kegiatan").
///
/// Relations are stored as id foreign keys; display names are resolved only
/// at the presentation boundary. A `None` (or dangling) key renders as SQL
/// NULL on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPlan {
    pub id: i64,
    /// FK to [`StakeholderProfile::id`].
    pub pemangku_kepentingan_id: Option<i64>,
    /// FK to [`crate::fiscal::CsrProgram::id`].
    pub program_csr_id: Option<i64>,
    pub bentuk_kegiatan: String,
    pub tujuan_kegiatan: String,
    pub frekuensi: String,
    pub periode: String,
    pub anggaran: i64,
}

/// The realized execution of a planned activity ("Pelaksanaan Kegiatan").
///
/// Deleting the parent plan removes its implementations in the same
/// operation, matching the `ON DELETE CASCADE` the exported schema declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityImplementation {
    pub id: i64,
    /// FK to [`ActivityPlan::id`].
    pub rencana_kegiatan_id: i64,
    pub tanggal_pelaksanaan: String,
    pub lokasi: String,
    pub realisasi_anggaran: i64,
    pub jumlah_peserta: i64,
    pub hasil_kegiatan: String,
}
