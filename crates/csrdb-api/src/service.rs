//! The [`CsrApi`] service: a single dispatch over the in-memory store.
//!
//! Every operation, typed wrapper included, funnels through
//! [`CsrApi::request`]: await the configured latency, parse the logical
//! route, run the mutation against the store, persist the snapshot. The
//! snapshot write is best-effort; a failed write is logged and the in-memory
//! state stands, so callers never see a persistence error for an operation
//! that already succeeded.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use csrdb_core::{
    ActivityImplementation, ActivityPlan, CsrPilar, CsrProgram, FiscalYear, Record, RiskImpact,
    RiskLevel, RiskLikelihood, Sdg, StakeholderProfile, StakeholderType,
};
use csrdb_store::{decode_or_seed, Database, SnapshotBackend};

use crate::error::ApiError;
use crate::latency::Latency;
use crate::route::{Method, Resource, Route};
use crate::schema::{ActivityPlanView, LoginRequest, UserView};

/// The access-dispatch service over one database snapshot slot.
pub struct CsrApi {
    db: Database,
    backend: Box<dyn SnapshotBackend>,
    latency: Latency,
}

impl CsrApi {
    /// Opens the service against a snapshot backend. A readable snapshot is
    /// loaded; otherwise the seed dataset is used and persisted immediately
    /// so a fresh slot starts populated.
    pub fn open(backend: Box<dyn SnapshotBackend>, latency: Latency) -> CsrApi {
        let snapshot = match backend.read() {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "snapshot read failed, falling back to seed dataset");
                None
            }
        };
        let had_snapshot = snapshot.is_some();
        let mut api = CsrApi {
            db: decode_or_seed(snapshot),
            backend,
            latency,
        };
        if !had_snapshot {
            api.persist();
        }
        api
    }

    /// Opens the service over an already-built database, bypassing the load.
    pub fn with_database(db: Database, backend: Box<dyn SnapshotBackend>, latency: Latency) -> CsrApi {
        CsrApi {
            db,
            backend,
            latency,
        }
    }

    /// Read access to the live store, e.g. for the SQL exporter.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The full store for backup/export purposes. Reads the live state
    /// directly, without latency and without dispatch.
    pub fn backup(&self) -> &Database {
        &self.db
    }

    /// Dispatches one request. This is the single entry point every typed
    /// wrapper goes through.
    pub async fn request(
        &mut self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(%method, path, "dispatching request");
        self.latency.wait().await;
        self.dispatch(method, path, body)
    }

    fn dispatch(
        &mut self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let Some(route) = Route::parse(path) else {
            return Err(unknown(method, path));
        };

        match (method, route) {
            (Method::Get, Route::Slides) => to_json(&self.db.slides),
            (Method::Get, Route::News) => to_json(&self.db.news),
            (Method::Get, Route::Users) => {
                let views: Vec<UserView> = self.db.users.iter().map(UserView::from).collect();
                to_json(&views)
            }
            (Method::Post, Route::Login) => self.authenticate(body),
            (Method::Post, Route::SetActive(id)) => self.set_active(id),
            (Method::Get, Route::Collection(resource)) => self.list(resource),
            (Method::Post, Route::Collection(resource)) => self.create(resource, body),
            (Method::Put, Route::Item(resource, id)) => self.update(resource, id, body),
            (Method::Delete, Route::Item(resource, id)) => self.delete(resource, id),
            _ => Err(unknown(method, path)),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    fn list(&self, resource: Resource) -> Result<Value, ApiError> {
        match resource {
            Resource::FiscalYears => {
                let mut years = self.db.fiscal_years.clone();
                years.sort_by_key(|y| std::cmp::Reverse(year_number(&y.tahun_fiskal)));
                to_json(&years)
            }
            Resource::Programs => to_json(&self.db.programs),
            Resource::Pilars => {
                let mut pilars = self.db.pilars.clone();
                pilars.sort_by(|a, b| a.nama_pilar.cmp(&b.nama_pilar));
                to_json(&pilars)
            }
            Resource::Sdgs => to_json(&self.db.sdgs),
            Resource::RiskLikelihood => {
                let mut rows = self.db.risk_likelihood.clone();
                rows.sort_by_key(|r| r.level);
                to_json(&rows)
            }
            Resource::RiskImpact => {
                let mut rows = self.db.risk_impact.clone();
                rows.sort_by_key(|r| r.level);
                to_json(&rows)
            }
            Resource::RiskLevel => {
                let mut rows = self.db.risk_levels.clone();
                rows.sort_by_key(|r| r.level);
                to_json(&rows)
            }
            Resource::Plans => to_json(&self.plan_views()),
            Resource::Profiles => {
                let mut profiles = self.db.stakeholder_profiles.clone();
                profiles.sort_by(|a, b| a.nama.cmp(&b.nama));
                to_json(&profiles)
            }
            Resource::Types => {
                let mut types = self.db.stakeholder_types.clone();
                types.sort_by(|a, b| a.nama_tipe.cmp(&b.nama_tipe));
                to_json(&types)
            }
            Resource::Implementations => {
                let mut rows = self.db.activity_implementations.clone();
                rows.sort_by(|a, b| b.tanggal_pelaksanaan.cmp(&a.tanggal_pelaksanaan));
                to_json(&rows)
            }
        }
    }

    /// Resolves plan foreign keys to display names and sorts by stakeholder
    /// name. A dangling key resolves to `None` rather than failing the read.
    fn plan_views(&self) -> Vec<ActivityPlanView> {
        let profiles: HashMap<i64, &str> = self
            .db
            .stakeholder_profiles
            .iter()
            .map(|p| (p.id, p.nama.as_str()))
            .collect();
        let programs: HashMap<i64, &str> = self
            .db
            .programs
            .iter()
            .map(|p| (p.id, p.nama_program.as_str()))
            .collect();

        let mut views: Vec<ActivityPlanView> = self
            .db
            .activity_plans
            .iter()
            .map(|plan| ActivityPlanView {
                id: plan.id,
                pemangku_kepentingan: plan
                    .pemangku_kepentingan_id
                    .and_then(|id| profiles.get(&id).map(|name| name.to_string())),
                program_terkait: plan
                    .program_csr_id
                    .and_then(|id| programs.get(&id).map(|name| name.to_string())),
                bentuk_kegiatan: plan.bentuk_kegiatan.clone(),
                tujuan_kegiatan: plan.tujuan_kegiatan.clone(),
                frekuensi: plan.frekuensi.clone(),
                periode: plan.periode.clone(),
                anggaran: plan.anggaran,
            })
            .collect();
        views.sort_by(|a, b| a.pemangku_kepentingan.cmp(&b.pemangku_kepentingan));
        views
    }

    fn authenticate(&self, body: Option<Value>) -> Result<Value, ApiError> {
        let body = body.ok_or_else(|| ApiError::BadRequest("missing request body".into()))?;
        let req: LoginRequest =
            serde_json::from_value(body).map_err(|err| ApiError::BadRequest(err.to_string()))?;

        let user = self
            .db
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == req.username.to_lowercase())
            .ok_or(ApiError::UnknownUsername)?;
        if user.password != req.password {
            return Err(ApiError::WrongPassword);
        }
        Ok(json!({
            "success": true,
            "message": "Login berhasil!",
            "user": UserView::from(user),
        }))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    fn create(&mut self, resource: Resource, body: Option<Value>) -> Result<Value, ApiError> {
        let mut body = body.ok_or_else(|| ApiError::BadRequest("missing request body".into()))?;
        let ids = &mut self.db.next_ids;
        let created = match resource {
            Resource::FiscalYears => {
                // Activation is exclusively the set-active operation's job;
                // a body-supplied flag must not bypass the single-active
                // invariant.
                if let Value::Object(obj) = &mut body {
                    obj.insert("isActive".into(), Value::Bool(false));
                }
                create_record::<FiscalYear>(&mut self.db.fiscal_years, &mut ids.fiscal_year, body)?
            }
            Resource::Programs => {
                create_record::<CsrProgram>(&mut self.db.programs, &mut ids.program, body)?
            }
            Resource::Pilars => {
                create_record::<CsrPilar>(&mut self.db.pilars, &mut ids.pilar, body)?
            }
            // SDGs are a fixed reference list; creation is not part of the
            // surface and signals a caller bug.
            Resource::Sdgs => {
                return Err(unknown(Method::Post, &format!("/{}", resource.path())));
            }
            Resource::RiskLikelihood => create_record::<RiskLikelihood>(
                &mut self.db.risk_likelihood,
                &mut ids.risk_likelihood,
                body,
            )?,
            Resource::RiskImpact => {
                create_record::<RiskImpact>(&mut self.db.risk_impact, &mut ids.risk_impact, body)?
            }
            Resource::RiskLevel => {
                create_record::<RiskLevel>(&mut self.db.risk_levels, &mut ids.risk_level, body)?
            }
            Resource::Plans => create_record::<ActivityPlan>(
                &mut self.db.activity_plans,
                &mut ids.activity_plan,
                body,
            )?,
            Resource::Profiles => create_record::<StakeholderProfile>(
                &mut self.db.stakeholder_profiles,
                &mut ids.stakeholder_profile,
                body,
            )?,
            Resource::Types => create_record::<StakeholderType>(
                &mut self.db.stakeholder_types,
                &mut ids.stakeholder_type,
                body,
            )?,
            Resource::Implementations => create_record::<ActivityImplementation>(
                &mut self.db.activity_implementations,
                &mut ids.activity_implementation,
                body,
            )?,
        };
        self.persist();
        Ok(created)
    }

    fn update(&mut self, resource: Resource, id: i64, body: Option<Value>) -> Result<Value, ApiError> {
        let mut patch = body.unwrap_or_else(|| Value::Object(Default::default()));
        let name = resource.path();
        let updated = match resource {
            Resource::FiscalYears => {
                // The activation flag is not patchable; only set-active may
                // move it.
                if let Value::Object(obj) = &mut patch {
                    obj.remove("isActive");
                }
                update_record::<FiscalYear>(&mut self.db.fiscal_years, name, id, patch)?
            }
            Resource::Programs => {
                update_record::<CsrProgram>(&mut self.db.programs, name, id, patch)?
            }
            Resource::Pilars => update_record::<CsrPilar>(&mut self.db.pilars, name, id, patch)?,
            Resource::Sdgs => update_record::<Sdg>(&mut self.db.sdgs, name, id, patch)?,
            Resource::RiskLikelihood => {
                update_record::<RiskLikelihood>(&mut self.db.risk_likelihood, name, id, patch)?
            }
            Resource::RiskImpact => {
                update_record::<RiskImpact>(&mut self.db.risk_impact, name, id, patch)?
            }
            Resource::RiskLevel => {
                update_record::<RiskLevel>(&mut self.db.risk_levels, name, id, patch)?
            }
            Resource::Plans => {
                update_record::<ActivityPlan>(&mut self.db.activity_plans, name, id, patch)?
            }
            Resource::Profiles => update_record::<StakeholderProfile>(
                &mut self.db.stakeholder_profiles,
                name,
                id,
                patch,
            )?,
            Resource::Types => {
                update_record::<StakeholderType>(&mut self.db.stakeholder_types, name, id, patch)?
            }
            Resource::Implementations => update_record::<ActivityImplementation>(
                &mut self.db.activity_implementations,
                name,
                id,
                patch,
            )?,
        };
        self.persist();
        Ok(updated)
    }

    fn delete(&mut self, resource: Resource, id: i64) -> Result<Value, ApiError> {
        let name = resource.path();
        match resource {
            Resource::FiscalYears => {
                let idx = self
                    .db
                    .fiscal_years
                    .iter()
                    .position(|y| y.id == id)
                    .ok_or(ApiError::ItemNotFound { resource: name, id })?;
                if self.db.fiscal_years[idx].is_active {
                    return Err(ApiError::InvalidOperation(
                        "Tidak dapat menghapus tahun fiskal yang aktif.".into(),
                    ));
                }
                self.db.fiscal_years.remove(idx);
            }
            Resource::Programs => remove_record(&mut self.db.programs, name, id)?,
            Resource::Pilars => remove_record(&mut self.db.pilars, name, id)?,
            Resource::Sdgs => remove_record(&mut self.db.sdgs, name, id)?,
            Resource::RiskLikelihood => remove_record(&mut self.db.risk_likelihood, name, id)?,
            Resource::RiskImpact => remove_record(&mut self.db.risk_impact, name, id)?,
            Resource::RiskLevel => remove_record(&mut self.db.risk_levels, name, id)?,
            Resource::Plans => {
                remove_record(&mut self.db.activity_plans, name, id)?;
                // Mirror the exported schema's ON DELETE CASCADE.
                self.db
                    .activity_implementations
                    .retain(|imp| imp.rencana_kegiatan_id != id);
            }
            Resource::Profiles => remove_record(&mut self.db.stakeholder_profiles, name, id)?,
            Resource::Types => remove_record(&mut self.db.stakeholder_types, name, id)?,
            Resource::Implementations => {
                remove_record(&mut self.db.activity_implementations, name, id)?
            }
        }
        self.persist();
        Ok(json!({ "success": true }))
    }

    /// Exclusively activates one fiscal year. The existence check runs before
    /// any flag is touched so an unknown id leaves the store unchanged.
    fn set_active(&mut self, id: i64) -> Result<Value, ApiError> {
        if !self.db.fiscal_years.iter().any(|y| y.id == id) {
            return Err(ApiError::ItemNotFound {
                resource: "fiscal-years",
                id,
            });
        }
        let mut activated = None;
        for year in &mut self.db.fiscal_years {
            year.is_active = year.id == id;
            if year.is_active {
                activated = Some(year.clone());
            }
        }
        self.persist();
        match activated {
            Some(year) => to_json(&year),
            None => Err(ApiError::Internal(format!(
                "fiscal year {id} vanished during activation"
            ))),
        }
    }

    /// Writes the snapshot. Failures are logged and absorbed: the in-memory
    /// mutation already succeeded and stays authoritative for this session.
    fn persist(&mut self) {
        let blob = match self.db.to_blob() {
            Ok(blob) => blob,
            Err(err) => {
                tracing::error!(error = %err, "snapshot encode failed, keeping in-memory state only");
                return;
            }
        };
        if let Err(err) = self.backend.write(&blob) {
            tracing::error!(error = %err, "snapshot write failed, keeping in-memory state only");
        }
    }
}

// ---------------------------------------------------------------------------
// Generic CRUD helpers
// ---------------------------------------------------------------------------

fn unknown(method: Method, path: &str) -> ApiError {
    ApiError::UnknownEndpoint {
        method,
        path: path.to_string(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|err| ApiError::Internal(err.to_string()))
}

/// Assigns the next id, deserializes the body into the record type and
/// prepends it, so newest records list first in unsorted views.
fn create_record<T>(items: &mut Vec<T>, next_id: &mut i64, body: Value) -> Result<Value, ApiError>
where
    T: Record + Serialize + DeserializeOwned,
{
    let Value::Object(mut obj) = body else {
        return Err(ApiError::BadRequest("request body must be a JSON object".into()));
    };
    obj.insert("id".into(), Value::from(*next_id));
    let record: T = serde_json::from_value(Value::Object(obj))
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    *next_id += 1;
    let json = to_json(&record)?;
    items.insert(0, record);
    Ok(json)
}

/// Shallow-merges the patch over the stored record. Patch keys replace
/// top-level fields wholesale; the id is never patchable.
fn update_record<T>(
    items: &mut [T],
    resource: &'static str,
    id: i64,
    patch: Value,
) -> Result<Value, ApiError>
where
    T: Record + Serialize + DeserializeOwned,
{
    let Some(slot) = items.iter_mut().find(|item| item.id() == id) else {
        return Err(ApiError::ItemNotFound { resource, id });
    };
    let mut merged = serde_json::to_value(&*slot).map_err(|err| ApiError::Internal(err.to_string()))?;
    if let (Value::Object(base), Value::Object(overlay)) = (&mut merged, patch) {
        for (key, value) in overlay {
            if key != "id" {
                base.insert(key, value);
            }
        }
    }
    let updated: T = serde_json::from_value(merged.clone())
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    *slot = updated;
    Ok(merged)
}

fn remove_record<T: Record>(
    items: &mut Vec<T>,
    resource: &'static str,
    id: i64,
) -> Result<(), ApiError> {
    let Some(idx) = items.iter().position(|item| item.id() == id) else {
        return Err(ApiError::ItemNotFound { resource, id });
    };
    items.remove(idx);
    Ok(())
}

/// Numeric value of a year label; non-numeric labels sort last (descending).
fn year_number(label: &str) -> i64 {
    label.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csrdb_store::{MemoryBackend, StoreError};
    use serde_json::json;

    fn api() -> CsrApi {
        CsrApi::open(Box::new(MemoryBackend::new()), Latency::None)
    }

    struct FailingBackend;

    impl SnapshotBackend for FailingBackend {
        fn read(&self) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn write(&self, _blob: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    #[tokio::test]
    async fn fresh_open_persists_the_seed() {
        let backend = MemoryBackend::new();
        let _api = CsrApi::open(Box::new(backend.clone()), Latency::None);
        let blob = backend.blob().expect("seed should be written on first open");
        let db = Database::from_blob(&blob).unwrap();
        assert_eq!(db, Database::seed());
    }

    #[tokio::test]
    async fn fiscal_years_list_newest_first() {
        let mut api = api();
        let years = api.fiscal_years().await.unwrap();
        let labels: Vec<&str> = years.iter().map(|y| y.tahun_fiskal.as_str()).collect();
        assert_eq!(labels, ["2024", "2023", "2022"]);
    }

    #[tokio::test]
    async fn risk_tables_list_by_level_ascending() {
        let mut api = api();
        let levels = api.risk_levels().await.unwrap();
        let order: Vec<i64> = levels.iter().map(|r| r.level).collect();
        assert_eq!(order, [1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn pilars_list_alphabetically() {
        let mut api = api();
        let pilars = api.pilars().await.unwrap();
        let names: Vec<&str> = pilars.iter().map(|p| p.nama_pilar.as_str()).collect();
        assert_eq!(
            names,
            ["Kesehatan", "Lingkungan", "Pemberdayaan Ekonomi", "Pendidikan"]
        );
    }

    #[tokio::test]
    async fn new_fiscal_year_gets_next_id_and_stays_inactive() {
        let mut api = api();
        let created = api
            .add_fiscal_year(&crate::schema::NewFiscalYear {
                tahun_fiskal: "2025".into(),
                tanggal_mulai: "2025-01-01".into(),
                tanggal_selesai: "2025-12-31".into(),
                total_anggaran: 600_000_000,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 4);
        assert!(!created.is_active);

        // The previously active year keeps its flag until set-active runs.
        let active: Vec<i64> = api
            .database()
            .fiscal_years
            .iter()
            .filter(|y| y.is_active)
            .map(|y| y.id)
            .collect();
        assert_eq!(active, [3]);
        // New records are prepended in storage order.
        assert_eq!(api.database().fiscal_years[0].id, 4);
    }

    #[tokio::test]
    async fn set_active_switches_the_flag_exclusively() {
        let mut api = api();
        let activated = api.set_active_fiscal_year(1).await.unwrap();
        assert!(activated.is_active);
        assert_eq!(activated.id, 1);

        let flags: Vec<(i64, bool)> = api
            .database()
            .fiscal_years
            .iter()
            .map(|y| (y.id, y.is_active))
            .collect();
        assert_eq!(flags, [(1, true), (2, false), (3, false)]);
    }

    #[tokio::test]
    async fn activation_flag_cannot_be_smuggled_through_put_or_post() {
        let mut api = api();

        // A PUT patch carrying the flag updates everything else but leaves
        // activation where it was.
        let updated = api
            .update_fiscal_year(1, json!({ "isActive": true, "totalAnggaran": 999 }))
            .await
            .unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.total_anggaran, 999);

        // A raw POST body claiming to be active is stored inactive.
        let created = api
            .request(
                Method::Post,
                "/fiscal-years",
                Some(json!({
                    "tahunFiskal": "2026",
                    "tanggalMulai": "2026-01-01",
                    "tanggalSelesai": "2026-12-31",
                    "totalAnggaran": 1,
                    "isActive": true
                })),
            )
            .await
            .unwrap();
        assert_eq!(created["isActive"], false);

        let active: Vec<i64> = api
            .database()
            .fiscal_years
            .iter()
            .filter(|y| y.is_active)
            .map(|y| y.id)
            .collect();
        assert_eq!(active, [3]);
    }

    #[tokio::test]
    async fn open_over_existing_snapshot_does_not_rewrite_it() {
        let mut db = Database::seed();
        db.pilars.clear();
        let blob = db.to_blob().unwrap();
        let backend = MemoryBackend::with_blob(blob.clone());

        let api = CsrApi::open(Box::new(backend.clone()), Latency::None);
        assert!(api.database().pilars.is_empty());
        assert_eq!(backend.blob().as_deref(), Some(blob.as_str()));
    }

    #[tokio::test]
    async fn set_active_unknown_id_leaves_flags_untouched() {
        let mut api = api();
        let err = api.set_active_fiscal_year(99).await.unwrap_err();
        assert!(matches!(err, ApiError::ItemNotFound { id: 99, .. }));
        assert!(api
            .database()
            .fiscal_years
            .iter()
            .any(|y| y.id == 3 && y.is_active));
    }

    #[tokio::test]
    async fn active_fiscal_year_cannot_be_deleted() {
        let mut api = api();
        let err = api.delete_fiscal_year(3).await.unwrap_err();
        match err {
            ApiError::InvalidOperation(message) => {
                assert_eq!(message, "Tidak dapat menghapus tahun fiskal yang aktif.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(api.database().fiscal_years.len(), 3);

        // Inactive years delete normally.
        let ack = api.delete_fiscal_year(1).await.unwrap();
        assert!(ack.success);
        assert_eq!(api.database().fiscal_years.len(), 2);
    }

    #[tokio::test]
    async fn delete_of_missing_item_is_not_found() {
        let mut api = api();
        let err = api.delete_pilar(42).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::ItemNotFound {
                resource: "pilars",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn update_merges_partial_bodies() {
        let mut api = api();
        let updated = api
            .update_pilar(1, json!({ "deskripsi": "Diperbarui." }))
            .await
            .unwrap();
        assert_eq!(updated.nama_pilar, "Pendidikan");
        assert_eq!(updated.deskripsi, "Diperbarui.");

        // The id is not patchable.
        let still_one = api
            .update_pilar(1, json!({ "id": 999, "deskripsi": "x" }))
            .await
            .unwrap();
        assert_eq!(still_one.id, 1);
    }

    #[tokio::test]
    async fn update_rejects_type_mismatched_patch() {
        let mut api = api();
        let err = api
            .request(
                Method::Put,
                "/fiscal-years/1",
                Some(json!({ "totalAnggaran": "not-a-number" })),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn user_listing_strips_passwords() {
        let mut api = api();
        let raw = api.request(Method::Get, "/users", None).await.unwrap();
        let users = raw.as_array().unwrap();
        assert_eq!(users.len(), 2);
        for user in users {
            assert!(user.get("password").is_none());
            assert!(user.get("username").is_some());
        }
    }

    #[tokio::test]
    async fn login_distinguishes_unknown_user_from_wrong_password() {
        let mut api = api();
        let err = api.login("ghost", "whatever").await.unwrap_err();
        assert!(matches!(err, ApiError::UnknownUsername));

        let err = api.login("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, ApiError::WrongPassword));

        // Usernames match case-insensitively; the response strips the password.
        let resp = api.login("ADMIN", "sandi").await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Login berhasil!");
        assert_eq!(resp.user.username, "admin");
    }

    #[tokio::test]
    async fn deleting_a_plan_cascades_to_its_implementations() {
        let mut api = api();
        assert!(api
            .database()
            .activity_implementations
            .iter()
            .any(|imp| imp.rencana_kegiatan_id == 1));

        api.delete_activity_plan(1).await.unwrap();

        assert!(api
            .database()
            .activity_plans
            .iter()
            .all(|plan| plan.id != 1));
        assert!(api
            .database()
            .activity_implementations
            .iter()
            .all(|imp| imp.rencana_kegiatan_id != 1));
        // Implementations of other plans survive.
        assert!(!api.database().activity_implementations.is_empty());
    }

    #[tokio::test]
    async fn plan_listing_resolves_relation_names() {
        let mut api = api();
        let views = api.activity_plans().await.unwrap();
        let plan1 = views.iter().find(|v| v.id == 1).unwrap();
        assert_eq!(
            plan1.pemangku_kepentingan.as_deref(),
            Some("Masyarakat Desa Sukamaju")
        );
        assert_eq!(
            plan1.program_terkait.as_deref(),
            Some("Beasiswa Pendidikan Merdeka")
        );
    }

    #[tokio::test]
    async fn plan_listing_tolerates_dangling_relations() {
        let mut api = api();
        // Plan 1 references profile 2; deleting the profile leaves the plan
        // readable with an unresolved name.
        api.delete_stakeholder_profile(2).await.unwrap();
        let views = api.activity_plans().await.unwrap();
        let plan1 = views.iter().find(|v| v.id == 1).unwrap();
        assert_eq!(plan1.pemangku_kepentingan, None);
        assert!(plan1.program_terkait.is_some());
    }

    #[tokio::test]
    async fn unknown_endpoints_are_raised() {
        let mut api = api();
        let err = api
            .request(Method::Get, "/totally/unknown", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownEndpoint { .. }));

        // Verb/route mismatch is raised too.
        let err = api
            .request(Method::Delete, "/users", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownEndpoint { .. }));
    }

    #[tokio::test]
    async fn sdgs_are_editable_but_not_creatable() {
        let mut api = api();
        let err = api
            .request(Method::Post, "/sdgs", Some(json!({ "goal": "18. Baru" })))
            .await
            .unwrap_err();
        match err {
            ApiError::UnknownEndpoint { method, path } => {
                assert_eq!(method, Method::Post);
                assert_eq!(path, "/sdgs");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let updated = api
            .request(
                Method::Put,
                "/sdgs/1",
                Some(json!({ "description": "Teks baru." })),
            )
            .await
            .unwrap();
        assert_eq!(updated["description"], "Teks baru.");
    }

    #[tokio::test]
    async fn id_counters_survive_reload() {
        let backend = MemoryBackend::new();

        let mut api = CsrApi::open(Box::new(backend.clone()), Latency::None);
        let created = api
            .add_pilar(&crate::schema::NewCsrPilar {
                nama_pilar: "Infrastruktur".into(),
                deskripsi: "Pembangunan fasilitas umum.".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 5);
        api.delete_pilar(5).await.unwrap();
        drop(api);

        // The counter does not rewind after a delete plus reload.
        let mut api = CsrApi::open(Box::new(backend), Latency::None);
        let created = api
            .add_pilar(&crate::schema::NewCsrPilar {
                nama_pilar: "Budaya".into(),
                deskripsi: "Pelestarian budaya lokal.".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn snapshot_write_failure_does_not_fail_the_operation() {
        let mut api = CsrApi::open(Box::new(FailingBackend), Latency::None);
        let created = api
            .add_pilar(&crate::schema::NewCsrPilar {
                nama_pilar: "Infrastruktur".into(),
                deskripsi: "Pembangunan fasilitas umum.".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 5);
        assert!(api
            .database()
            .pilars
            .iter()
            .any(|p| p.nama_pilar == "Infrastruktur"));
    }

    #[tokio::test]
    async fn listing_sorts_regardless_of_storage_order() {
        let mut db = Database::empty();
        for (id, label) in [(1, "2022"), (2, "2024"), (3, "2023")] {
            db.fiscal_years.push(csrdb_core::FiscalYear {
                id,
                tahun_fiskal: label.into(),
                tanggal_mulai: format!("{label}-01-01"),
                tanggal_selesai: format!("{label}-12-31"),
                total_anggaran: 0,
                is_active: false,
            });
        }
        for (id, level) in [(1, 3), (2, 1), (3, 5)] {
            db.risk_levels.push(csrdb_core::RiskLevel {
                id,
                level,
                tingkat: format!("L{level}"),
                deskripsi: String::new(),
                warna: String::new(),
            });
        }
        let mut api =
            CsrApi::with_database(db, Box::new(MemoryBackend::new()), Latency::None);

        let years = api.fiscal_years().await.unwrap();
        let labels: Vec<&str> = years.iter().map(|y| y.tahun_fiskal.as_str()).collect();
        assert_eq!(labels, ["2024", "2023", "2022"]);

        let levels = api.risk_levels().await.unwrap();
        let order: Vec<i64> = levels.iter().map(|r| r.level).collect();
        assert_eq!(order, [1, 3, 5]);
    }

    #[tokio::test]
    async fn create_then_activate_hands_over_the_active_flag() {
        let mut api = api();
        let created = api
            .add_fiscal_year(&crate::schema::NewFiscalYear {
                tahun_fiskal: "2025".into(),
                tanggal_mulai: "2025-01-01".into(),
                tanggal_selesai: "2025-12-31".into(),
                total_anggaran: 1000,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 4);
        assert!(api
            .database()
            .fiscal_years
            .iter()
            .any(|y| y.id == 3 && y.is_active));

        let activated = api.set_active_fiscal_year(4).await.unwrap();
        assert!(activated.is_active);
        let flags: Vec<(i64, bool)> = api
            .database()
            .fiscal_years
            .iter()
            .map(|y| (y.id, y.is_active))
            .collect();
        assert_eq!(flags, [(4, true), (1, false), (2, false), (3, false)]);
    }

    #[tokio::test]
    async fn implementations_list_most_recent_first() {
        let mut api = api();
        let rows = api.activity_implementations().await.unwrap();
        let dates: Vec<&str> = rows.iter().map(|r| r.tanggal_pelaksanaan.as_str()).collect();
        assert_eq!(dates, ["2024-04-22", "2024-02-15"]);
    }
}
