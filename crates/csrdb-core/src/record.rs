//! The [`Record`] trait: uniform id access for generic CRUD helpers.

use crate::content::{NewsArticle, User};
use crate::fiscal::{CsrPilar, CsrProgram, FiscalYear};
use crate::risk::{RiskImpact, RiskLevel, RiskLikelihood};
use crate::sdg::Sdg;
use crate::stakeholder::{
    ActivityImplementation, ActivityPlan, StakeholderProfile, StakeholderType,
};

/// A record addressable by an integer id within its collection.
///
/// Slides are the one collection without ids (position-identified) and do
/// not implement this.
pub trait Record {
    /// The record's collection-unique identifier.
    fn id(&self) -> i64;
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })+
    };
}

impl_record!(
    User,
    NewsArticle,
    FiscalYear,
    CsrProgram,
    CsrPilar,
    Sdg,
    RiskLikelihood,
    RiskImpact,
    RiskLevel,
    StakeholderProfile,
    StakeholderType,
    ActivityPlan,
    ActivityImplementation,
);
