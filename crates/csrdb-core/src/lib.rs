//! Entity model for the CSR data core.
//!
//! Every collection managed by the portal is a flat list of plain records
//! with an integer identifier unique within its collection. The structs here
//! carry serde renames so the persisted JSON snapshot keeps the historical
//! camelCase key layout the frontend wrote (`tahunFiskal`, `tanggalMulai`,
//! ...), which is an external interface of the store.
//!
//! # Modules
//!
//! - [`content`]: public-facing content records (users, slides, news)
//! - [`fiscal`]: fiscal years, CSR programs, CSR pillars
//! - [`sdg`]: Sustainable Development Goals reference entries
//! - [`risk`]: the three independent risk-taxonomy tables
//! - [`stakeholder`]: stakeholder profiles/types and activity plans/implementations
//! - [`record`]: the [`Record`] id-accessor trait

pub mod content;
pub mod fiscal;
pub mod record;
pub mod risk;
pub mod sdg;
pub mod stakeholder;

// Re-export the full entity surface for ergonomic use.
pub use content::{NewsArticle, Slide, User};
pub use fiscal::{CsrPilar, CsrProgram, FiscalYear};
pub use record::Record;
pub use risk::{RiskImpact, RiskLevel, RiskLikelihood};
pub use sdg::Sdg;
pub use stakeholder::{
    ActivityImplementation, ActivityPlan, Kategori, StakeholderProfile, StakeholderType,
};
