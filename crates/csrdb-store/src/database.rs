//! The [`Database`] aggregate: every collection plus per-collection counters,
//! with encode/decode to the single persisted JSON snapshot blob.
//!
//! The blob layout is an external interface: collection arrays under their
//! historical camelCase keys plus a `nextIds` object. Decoding tolerates a
//! missing `nextIds` entry (or individual missing counters) by recomputing
//! each counter as `max(existing id) + 1`, falling back to the seed floor
//! when the collection is empty.

use serde::{Deserialize, Serialize};

use csrdb_core::{
    ActivityImplementation, ActivityPlan, CsrPilar, CsrProgram, FiscalYear, NewsArticle, Record,
    RiskImpact, RiskLevel, RiskLikelihood, Sdg, Slide, StakeholderProfile, StakeholderType, User,
};

use crate::error::StoreError;

/// Monotonic id counters, one per creatable collection.
///
/// Users, slides, news and SDGs are not creatable through the access layer
/// and carry no counter, matching the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextIds {
    pub fiscal_year: i64,
    pub program: i64,
    pub pilar: i64,
    pub risk_likelihood: i64,
    pub risk_impact: i64,
    pub risk_level: i64,
    pub activity_plan: i64,
    pub stakeholder_profile: i64,
    pub stakeholder_type: i64,
    pub activity_implementation: i64,
}

impl NextIds {
    /// Counter values one past the seed dataset's highest ids. Also the
    /// floors used when recomputing a missing counter over an empty
    /// collection.
    pub const SEED: NextIds = NextIds {
        fiscal_year: 4,
        program: 105,
        pilar: 5,
        risk_likelihood: 6,
        risk_impact: 6,
        risk_level: 6,
        activity_plan: 4,
        stakeholder_profile: 5,
        stakeholder_type: 8,
        activity_implementation: 3,
    };
}

/// The canonical in-memory copy of all collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    pub users: Vec<User>,
    pub slides: Vec<Slide>,
    pub news: Vec<NewsArticle>,
    pub fiscal_years: Vec<FiscalYear>,
    pub programs: Vec<CsrProgram>,
    pub pilars: Vec<CsrPilar>,
    pub sdgs: Vec<Sdg>,
    pub risk_likelihood: Vec<RiskLikelihood>,
    pub risk_impact: Vec<RiskImpact>,
    pub risk_levels: Vec<RiskLevel>,
    pub stakeholder_profiles: Vec<StakeholderProfile>,
    pub stakeholder_types: Vec<StakeholderType>,
    pub activity_plans: Vec<ActivityPlan>,
    pub activity_implementations: Vec<ActivityImplementation>,
    pub next_ids: NextIds,
}

impl Database {
    /// An empty database with all counters at their seed floors.
    pub fn empty() -> Self {
        Database {
            users: Vec::new(),
            slides: Vec::new(),
            news: Vec::new(),
            fiscal_years: Vec::new(),
            programs: Vec::new(),
            pilars: Vec::new(),
            sdgs: Vec::new(),
            risk_likelihood: Vec::new(),
            risk_impact: Vec::new(),
            risk_levels: Vec::new(),
            stakeholder_profiles: Vec::new(),
            stakeholder_types: Vec::new(),
            activity_plans: Vec::new(),
            activity_implementations: Vec::new(),
            next_ids: NextIds::SEED,
        }
    }

    /// Decodes a snapshot blob, recomputing any counter the blob is missing.
    pub fn from_blob(blob: &str) -> Result<Database, StoreError> {
        let snapshot: Snapshot = serde_json::from_str(blob)?;
        Ok(Database::from_snapshot(snapshot))
    }

    /// Encodes all collections plus current counters into one snapshot blob.
    pub fn to_blob(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&Snapshot::from_database(self))?)
    }

    fn from_snapshot(snapshot: Snapshot) -> Database {
        let saved = snapshot.next_ids.unwrap_or_default();
        let floors = NextIds::SEED;
        let next_ids = NextIds {
            fiscal_year: next_id(saved.fiscal_year, &snapshot.fiscal_years, floors.fiscal_year),
            program: next_id(saved.program, &snapshot.programs, floors.program),
            pilar: next_id(saved.pilar, &snapshot.pilars, floors.pilar),
            risk_likelihood: next_id(
                saved.risk_likelihood,
                &snapshot.risk_likelihood,
                floors.risk_likelihood,
            ),
            risk_impact: next_id(saved.risk_impact, &snapshot.risk_impact, floors.risk_impact),
            risk_level: next_id(saved.risk_level, &snapshot.risk_levels, floors.risk_level),
            activity_plan: next_id(
                saved.activity_plan,
                &snapshot.activity_plans,
                floors.activity_plan,
            ),
            stakeholder_profile: next_id(
                saved.stakeholder_profile,
                &snapshot.stakeholder_profiles,
                floors.stakeholder_profile,
            ),
            stakeholder_type: next_id(
                saved.stakeholder_type,
                &snapshot.stakeholder_types,
                floors.stakeholder_type,
            ),
            activity_implementation: next_id(
                saved.activity_implementation,
                &snapshot.activity_implementations,
                floors.activity_implementation,
            ),
        };
        Database {
            users: snapshot.users,
            slides: snapshot.slides,
            news: snapshot.news,
            fiscal_years: snapshot.fiscal_years,
            programs: snapshot.programs,
            pilars: snapshot.pilars,
            sdgs: snapshot.sdgs,
            risk_likelihood: snapshot.risk_likelihood,
            risk_impact: snapshot.risk_impact,
            risk_levels: snapshot.risk_levels,
            stakeholder_profiles: snapshot.stakeholder_profiles,
            stakeholder_types: snapshot.stakeholder_types,
            activity_plans: snapshot.activity_plans,
            activity_implementations: snapshot.activity_implementations,
            next_ids,
        }
    }
}

/// Recomputed counter: the saved value when present, otherwise one past the
/// highest existing id, otherwise the floor.
fn next_id<T: Record>(saved: Option<i64>, items: &[T], floor: i64) -> i64 {
    saved.unwrap_or_else(|| items.iter().map(Record::id).max().map_or(floor, |max| max + 1))
}

/// Wire form of the persisted blob. Collection keys keep the historical
/// camelCase names; every key is optional on decode.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    slides: Vec<Slide>,
    #[serde(default)]
    news: Vec<NewsArticle>,
    #[serde(rename = "fiscalYears", default)]
    fiscal_years: Vec<FiscalYear>,
    #[serde(rename = "programsCSR", default)]
    programs: Vec<CsrProgram>,
    #[serde(rename = "pilarCSR", default)]
    pilars: Vec<CsrPilar>,
    #[serde(default)]
    sdgs: Vec<Sdg>,
    #[serde(rename = "tingkatKemungkinanRisiko", default)]
    risk_likelihood: Vec<RiskLikelihood>,
    #[serde(rename = "dampakRisiko", default)]
    risk_impact: Vec<RiskImpact>,
    #[serde(rename = "tingkatRisiko", default)]
    risk_levels: Vec<RiskLevel>,
    #[serde(rename = "rencanaKegiatan", default)]
    activity_plans: Vec<ActivityPlan>,
    #[serde(rename = "profilPemangkuKepentinganData", default)]
    stakeholder_profiles: Vec<StakeholderProfile>,
    #[serde(rename = "tipePemangkuKepentinganData", default)]
    stakeholder_types: Vec<StakeholderType>,
    #[serde(rename = "pelaksanaanKegiatanData", default)]
    activity_implementations: Vec<ActivityImplementation>,
    #[serde(rename = "nextIds", default, skip_serializing_if = "Option::is_none")]
    next_ids: Option<SavedNextIds>,
}

impl Snapshot {
    fn from_database(db: &Database) -> Snapshot {
        Snapshot {
            users: db.users.clone(),
            slides: db.slides.clone(),
            news: db.news.clone(),
            fiscal_years: db.fiscal_years.clone(),
            programs: db.programs.clone(),
            pilars: db.pilars.clone(),
            sdgs: db.sdgs.clone(),
            risk_likelihood: db.risk_likelihood.clone(),
            risk_impact: db.risk_impact.clone(),
            risk_levels: db.risk_levels.clone(),
            stakeholder_profiles: db.stakeholder_profiles.clone(),
            stakeholder_types: db.stakeholder_types.clone(),
            activity_plans: db.activity_plans.clone(),
            activity_implementations: db.activity_implementations.clone(),
            next_ids: Some(SavedNextIds::from(db.next_ids)),
        }
    }
}

/// The `nextIds` counter object as persisted. Each counter is optional on
/// decode so a partial snapshot still loads.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedNextIds {
    #[serde(rename = "nextFiscalYearId", default)]
    fiscal_year: Option<i64>,
    #[serde(rename = "nextProgramId", default)]
    program: Option<i64>,
    #[serde(rename = "nextPilarCSRId", default)]
    pilar: Option<i64>,
    #[serde(rename = "nextTingkatKemungkinanId", default)]
    risk_likelihood: Option<i64>,
    #[serde(rename = "nextDampakRisikoId", default)]
    risk_impact: Option<i64>,
    #[serde(rename = "nextTingkatRisikoId", default)]
    risk_level: Option<i64>,
    #[serde(rename = "nextRencanaKegiatanId", default)]
    activity_plan: Option<i64>,
    #[serde(rename = "nextProfilPemangkuKepentinganId", default)]
    stakeholder_profile: Option<i64>,
    #[serde(rename = "nextTipePemangkuKepentinganId", default)]
    stakeholder_type: Option<i64>,
    #[serde(rename = "nextPelaksanaanKegiatanId", default)]
    activity_implementation: Option<i64>,
}

impl From<NextIds> for SavedNextIds {
    fn from(ids: NextIds) -> SavedNextIds {
        SavedNextIds {
            fiscal_year: Some(ids.fiscal_year),
            program: Some(ids.program),
            pilar: Some(ids.pilar),
            risk_likelihood: Some(ids.risk_likelihood),
            risk_impact: Some(ids.risk_impact),
            risk_level: Some(ids.risk_level),
            activity_plan: Some(ids.activity_plan),
            stakeholder_profile: Some(ids.stakeholder_profile),
            stakeholder_type: Some(ids.stakeholder_type),
            activity_implementation: Some(ids.activity_implementation),
        }
    }
}
