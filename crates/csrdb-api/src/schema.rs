//! Request payloads and presentation views.
//!
//! Views are what leaves the dispatch layer when the stored shape is not
//! suitable for callers: users lose their password, activity plans carry
//! resolved display names instead of raw foreign keys. `New*` payloads are
//! the creation bodies of the typed wrapper methods; the id is always
//! assigned by the store.

use serde::{Deserialize, Serialize};

use csrdb_core::{Kategori, User};

/// A user with the password stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> UserView {
        UserView {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// An activity plan with its foreign keys resolved to display names.
///
/// A `None` name means the plan has no reference, or the referenced record
/// was deleted out from under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPlanView {
    pub id: i64,
    pub pemangku_kepentingan: Option<String>,
    pub program_terkait: Option<String>,
    pub bentuk_kegiatan: String,
    pub tujuan_kegiatan: String,
    pub frekuensi: String,
    pub periode: String,
    pub anggaran: i64,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserView,
}

/// Generic acknowledgement returned by delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Creation payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFiscalYear {
    pub tahun_fiskal: String,
    pub tanggal_mulai: String,
    pub tanggal_selesai: String,
    pub total_anggaran: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCsrProgram {
    pub fiscal_year_id: i64,
    pub nomor_program: String,
    pub nama_program: String,
    pub deskripsi_program: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCsrPilar {
    pub nama_pilar: String,
    pub deskripsi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRiskLikelihood {
    pub level: i64,
    pub keterangan: String,
    pub persentase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRiskImpact {
    pub level: i64,
    pub dampak: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRiskLevel {
    pub level: i64,
    pub tingkat: String,
    pub deskripsi: String,
    pub warna: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityPlan {
    pub pemangku_kepentingan_id: Option<i64>,
    pub program_csr_id: Option<i64>,
    pub bentuk_kegiatan: String,
    pub tujuan_kegiatan: String,
    pub frekuensi: String,
    pub periode: String,
    pub anggaran: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStakeholderProfile {
    pub nama: String,
    pub kategori: Kategori,
    pub tipe: String,
    pub deskripsi: String,
    pub strategi_komunikasi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStakeholderType {
    pub nama_tipe: String,
    pub deskripsi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityImplementation {
    pub rencana_kegiatan_id: i64,
    pub tanggal_pelaksanaan: String,
    pub lokasi: String,
    pub realisasi_anggaran: i64,
    pub jumlah_peserta: i64,
    pub hasil_kegiatan: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_view_drops_the_password() {
        let user = User {
            id: 1,
            username: "admin".into(),
            password: "password123".into(),
        };
        let view = UserView::from(&user);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["username"], "admin");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn plan_view_uses_display_name_keys() {
        let view = ActivityPlanView {
            id: 1,
            pemangku_kepentingan: Some("Karyawan".into()),
            program_terkait: None,
            bentuk_kegiatan: "Town hall".into(),
            tujuan_kegiatan: "Sosialisasi program".into(),
            frekuensi: "2x".into(),
            periode: "Q2 2024".into(),
            anggaran: 5_000_000,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["pemangkuKepentingan"], "Karyawan");
        assert!(json["programTerkait"].is_null());
        assert!(json.get("pemangkuKepentinganId").is_none());
    }
}
