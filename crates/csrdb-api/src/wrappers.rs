//! Typed wrapper methods over the dispatch, one per logical operation.
//!
//! Each wrapper serializes its payload, goes through [`CsrApi::request`]
//! like any other caller (latency included) and deserializes the response
//! into the concrete type. Nothing here bypasses the dispatch.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use csrdb_core::{
    ActivityImplementation, CsrPilar, CsrProgram, FiscalYear, NewsArticle, RiskImpact, RiskLevel,
    RiskLikelihood, Sdg, Slide, StakeholderProfile, StakeholderType,
};

use crate::error::ApiError;
use crate::route::Method;
use crate::schema::{
    Ack, ActivityPlanView, LoginRequest, LoginResponse, NewActivityImplementation,
    NewActivityPlan, NewCsrPilar, NewCsrProgram, NewFiscalYear, NewRiskImpact, NewRiskLevel,
    NewRiskLikelihood, NewStakeholderProfile, NewStakeholderType, UserView,
};
use crate::service::CsrApi;

fn payload<T: Serialize>(data: &T) -> Result<Value, ApiError> {
    serde_json::to_value(data).map_err(|err| ApiError::Internal(err.to_string()))
}

impl CsrApi {
    async fn call<T: DeserializeOwned>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let value = self.request(method, path, body).await?;
        serde_json::from_value(value).map_err(|err| ApiError::Internal(err.to_string()))
    }

    // -- Content ------------------------------------------------------------

    pub async fn slides(&mut self) -> Result<Vec<Slide>, ApiError> {
        self.call(Method::Get, "/slides", None).await
    }

    pub async fn news(&mut self) -> Result<Vec<NewsArticle>, ApiError> {
        self.call(Method::Get, "/news", None).await
    }

    pub async fn users(&mut self) -> Result<Vec<UserView>, ApiError> {
        self.call(Method::Get, "/users", None).await
    }

    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = payload(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        self.call(Method::Post, "/auth/login", Some(body)).await
    }

    // -- Fiscal years -------------------------------------------------------

    pub async fn fiscal_years(&mut self) -> Result<Vec<FiscalYear>, ApiError> {
        self.call(Method::Get, "/fiscal-years", None).await
    }

    /// Creates a fiscal year. New years always start inactive; activation is
    /// a separate, exclusive operation.
    pub async fn add_fiscal_year(&mut self, new: &NewFiscalYear) -> Result<FiscalYear, ApiError> {
        let mut body = payload(new)?;
        if let Value::Object(obj) = &mut body {
            obj.insert("isActive".into(), Value::Bool(false));
        }
        self.call(Method::Post, "/fiscal-years", Some(body)).await
    }

    pub async fn update_fiscal_year(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<FiscalYear, ApiError> {
        self.call(Method::Put, &format!("/fiscal-years/{id}"), Some(patch))
            .await
    }

    pub async fn delete_fiscal_year(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/fiscal-years/{id}"), None)
            .await
    }

    pub async fn set_active_fiscal_year(&mut self, id: i64) -> Result<FiscalYear, ApiError> {
        self.call(
            Method::Post,
            &format!("/fiscal-years/{id}/set-active"),
            None,
        )
        .await
    }

    // -- Programs and pillars -----------------------------------------------

    pub async fn programs(&mut self) -> Result<Vec<CsrProgram>, ApiError> {
        self.call(Method::Get, "/programs", None).await
    }

    pub async fn add_program(&mut self, new: &NewCsrProgram) -> Result<CsrProgram, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/programs", Some(body)).await
    }

    pub async fn update_program(&mut self, id: i64, patch: Value) -> Result<CsrProgram, ApiError> {
        self.call(Method::Put, &format!("/programs/{id}"), Some(patch))
            .await
    }

    pub async fn delete_program(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/programs/{id}"), None)
            .await
    }

    pub async fn pilars(&mut self) -> Result<Vec<CsrPilar>, ApiError> {
        self.call(Method::Get, "/pilars", None).await
    }

    pub async fn add_pilar(&mut self, new: &NewCsrPilar) -> Result<CsrPilar, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/pilars", Some(body)).await
    }

    pub async fn update_pilar(&mut self, id: i64, patch: Value) -> Result<CsrPilar, ApiError> {
        self.call(Method::Put, &format!("/pilars/{id}"), Some(patch))
            .await
    }

    pub async fn delete_pilar(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/pilars/{id}"), None)
            .await
    }

    // -- SDGs ---------------------------------------------------------------

    pub async fn sdgs(&mut self) -> Result<Vec<Sdg>, ApiError> {
        self.call(Method::Get, "/sdgs", None).await
    }

    /// Replaces an SDG entry wholesale. The reference list is editable but
    /// has no create or delete surface.
    pub async fn update_sdg(&mut self, sdg: &Sdg) -> Result<Sdg, ApiError> {
        let body = payload(sdg)?;
        self.call(Method::Put, &format!("/sdgs/{}", sdg.id), Some(body))
            .await
    }

    // -- Risk taxonomies ----------------------------------------------------

    pub async fn risk_likelihood_levels(&mut self) -> Result<Vec<RiskLikelihood>, ApiError> {
        self.call(Method::Get, "/risk/likelihood", None).await
    }

    pub async fn add_risk_likelihood(
        &mut self,
        new: &NewRiskLikelihood,
    ) -> Result<RiskLikelihood, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/risk/likelihood", Some(body)).await
    }

    pub async fn update_risk_likelihood(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<RiskLikelihood, ApiError> {
        self.call(Method::Put, &format!("/risk/likelihood/{id}"), Some(patch))
            .await
    }

    pub async fn delete_risk_likelihood(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/risk/likelihood/{id}"), None)
            .await
    }

    pub async fn risk_impact_levels(&mut self) -> Result<Vec<RiskImpact>, ApiError> {
        self.call(Method::Get, "/risk/impact", None).await
    }

    pub async fn add_risk_impact(&mut self, new: &NewRiskImpact) -> Result<RiskImpact, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/risk/impact", Some(body)).await
    }

    pub async fn update_risk_impact(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<RiskImpact, ApiError> {
        self.call(Method::Put, &format!("/risk/impact/{id}"), Some(patch))
            .await
    }

    pub async fn delete_risk_impact(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/risk/impact/{id}"), None)
            .await
    }

    pub async fn risk_levels(&mut self) -> Result<Vec<RiskLevel>, ApiError> {
        self.call(Method::Get, "/risk/level", None).await
    }

    pub async fn add_risk_level(&mut self, new: &NewRiskLevel) -> Result<RiskLevel, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/risk/level", Some(body)).await
    }

    pub async fn update_risk_level(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<RiskLevel, ApiError> {
        self.call(Method::Put, &format!("/risk/level/{id}"), Some(patch))
            .await
    }

    pub async fn delete_risk_level(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/risk/level/{id}"), None)
            .await
    }

    // -- Stakeholders -------------------------------------------------------

    /// Lists plans as presentation views with relation names resolved.
    pub async fn activity_plans(&mut self) -> Result<Vec<ActivityPlanView>, ApiError> {
        self.call(Method::Get, "/stakeholders/plans", None).await
    }

    pub async fn add_activity_plan(
        &mut self,
        new: &NewActivityPlan,
    ) -> Result<csrdb_core::ActivityPlan, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/stakeholders/plans", Some(body))
            .await
    }

    pub async fn update_activity_plan(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<csrdb_core::ActivityPlan, ApiError> {
        self.call(
            Method::Put,
            &format!("/stakeholders/plans/{id}"),
            Some(patch),
        )
        .await
    }

    pub async fn delete_activity_plan(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/stakeholders/plans/{id}"), None)
            .await
    }

    pub async fn stakeholder_profiles(&mut self) -> Result<Vec<StakeholderProfile>, ApiError> {
        self.call(Method::Get, "/stakeholders/profiles", None).await
    }

    pub async fn add_stakeholder_profile(
        &mut self,
        new: &NewStakeholderProfile,
    ) -> Result<StakeholderProfile, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/stakeholders/profiles", Some(body))
            .await
    }

    pub async fn update_stakeholder_profile(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<StakeholderProfile, ApiError> {
        self.call(
            Method::Put,
            &format!("/stakeholders/profiles/{id}"),
            Some(patch),
        )
        .await
    }

    pub async fn delete_stakeholder_profile(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(
            Method::Delete,
            &format!("/stakeholders/profiles/{id}"),
            None,
        )
        .await
    }

    pub async fn stakeholder_types(&mut self) -> Result<Vec<StakeholderType>, ApiError> {
        self.call(Method::Get, "/stakeholders/types", None).await
    }

    pub async fn add_stakeholder_type(
        &mut self,
        new: &NewStakeholderType,
    ) -> Result<StakeholderType, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/stakeholders/types", Some(body))
            .await
    }

    pub async fn update_stakeholder_type(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<StakeholderType, ApiError> {
        self.call(
            Method::Put,
            &format!("/stakeholders/types/{id}"),
            Some(patch),
        )
        .await
    }

    pub async fn delete_stakeholder_type(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(Method::Delete, &format!("/stakeholders/types/{id}"), None)
            .await
    }

    pub async fn activity_implementations(
        &mut self,
    ) -> Result<Vec<ActivityImplementation>, ApiError> {
        self.call(Method::Get, "/stakeholders/implementations", None)
            .await
    }

    pub async fn add_activity_implementation(
        &mut self,
        new: &NewActivityImplementation,
    ) -> Result<ActivityImplementation, ApiError> {
        let body = payload(new)?;
        self.call(Method::Post, "/stakeholders/implementations", Some(body))
            .await
    }

    pub async fn update_activity_implementation(
        &mut self,
        id: i64,
        patch: Value,
    ) -> Result<ActivityImplementation, ApiError> {
        self.call(
            Method::Put,
            &format!("/stakeholders/implementations/{id}"),
            Some(patch),
        )
        .await
    }

    pub async fn delete_activity_implementation(&mut self, id: i64) -> Result<Ack, ApiError> {
        self.call(
            Method::Delete,
            &format!("/stakeholders/implementations/{id}"),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::Latency;
    use csrdb_store::MemoryBackend;
    use serde_json::json;

    fn api() -> CsrApi {
        CsrApi::open(Box::new(MemoryBackend::new()), Latency::None)
    }

    #[tokio::test]
    async fn typed_create_round_trips_through_the_dispatch() {
        let mut api = api();
        let created = api
            .add_stakeholder_type(&NewStakeholderType {
                nama_tipe: "Akademisi".into(),
                deskripsi: "Perguruan tinggi dan lembaga riset.".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 8);
        assert_eq!(created.nama_tipe, "Akademisi");

        let listed = api.stakeholder_types().await.unwrap();
        assert!(listed.iter().any(|t| t.id == 8));
    }

    #[tokio::test]
    async fn plan_update_can_relink_relations() {
        let mut api = api();
        let updated = api
            .update_activity_plan(1, json!({ "pemangkuKepentinganId": 3 }))
            .await
            .unwrap();
        assert_eq!(updated.pemangku_kepentingan_id, Some(3));

        let views = api.activity_plans().await.unwrap();
        let view = views.iter().find(|v| v.id == 1).unwrap();
        assert_eq!(view.pemangku_kepentingan.as_deref(), Some("Karyawan PT Tomo"));
    }

    #[tokio::test]
    async fn sdg_update_replaces_the_entry() {
        let mut api = api();
        let mut sdg = api.sdgs().await.unwrap().remove(0);
        sdg.description = "Deskripsi baru.".into();
        let updated = api.update_sdg(&sdg).await.unwrap();
        assert_eq!(updated.description, "Deskripsi baru.");
        assert_eq!(updated.id, sdg.id);
    }

    #[tokio::test]
    async fn implementation_create_links_to_a_plan() {
        let mut api = api();
        let created = api
            .add_activity_implementation(&NewActivityImplementation {
                rencana_kegiatan_id: 2,
                tanggal_pelaksanaan: "2024-09-01".into(),
                lokasi: "Kantor Pemda".into(),
                realisasi_anggaran: 4_800_000,
                jumlah_peserta: 12,
                hasil_kegiatan: "Audiensi kuartal ketiga selesai.".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.rencana_kegiatan_id, 2);
    }
}
