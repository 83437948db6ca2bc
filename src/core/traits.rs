//! Core trait definitions for catalog access
//!
//! These traits split the read side (lookups and view projections) from the
//! write side (form submission and the draft store behind it).

use crate::core::data::{AttributeRecord, Player, PlayerProfile, Position, StaffMember, Team, TeamCategory};
use crate::core::filter::PlayerFilter;
use crate::core::forms::{PlayerForm, SubmissionOutcome, TeamForm};
use crate::core::grouping::Bucket;
use crate::utils::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Team detail view: the team, its staff, and its roster by position
#[derive(Debug, Clone, Serialize)]
pub struct TeamDetail<'a> {
    pub team: &'a Team,
    pub staff: Vec<&'a StaffMember>,
    pub roster: Vec<Bucket<Position, &'a Player>>,
}

/// Player detail view with the attribute panel grouped by category
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail<'a> {
    pub profile: &'a PlayerProfile,
    pub sections: Vec<Bucket<&'a str, &'a AttributeRecord>>,
    /// Set when the requested identifier was absent or unknown
    pub fell_back: bool,
}

/// Confirmation handed back by a draft store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub reference: Uuid,
    pub name: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredDraft<T> {
    pub receipt: Receipt,
    pub form: T,
}

/// What a submit press produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub outcome: SubmissionOutcome,
    pub receipt: Option<Receipt>,
}

/// Read-only record lookups
pub trait CatalogLookup {
    fn find_team(&self, id: &str) -> Option<&Team>;

    fn find_player(&self, id: &str) -> Option<&Player>;

    /// Profile for `id`, falling back to the default record
    fn resolve_player_profile(&self, id: Option<&str>) -> Option<&PlayerProfile>;
}

/// Derived, screen-shaped views of the catalog
pub trait ViewProjection {
    /// Teams sectioned by category
    fn team_sections(&self) -> Vec<Bucket<TeamCategory, &Team>>;

    fn team_detail(&self, id: Option<&str>) -> Option<TeamDetail<'_>>;

    fn player_list(&self, filter: &PlayerFilter) -> Vec<&Player>;

    fn player_detail(&self, id: Option<&str>) -> Option<PlayerDetail<'_>>;
}

/// Storage for accepted form drafts, kept apart from the catalog
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn create_team(&self, form: &TeamForm) -> AppResult<Receipt>;

    async fn create_player(&self, form: &PlayerForm) -> AppResult<Receipt>;

    async fn team_drafts(&self) -> AppResult<Vec<StoredDraft<TeamForm>>>;

    async fn player_drafts(&self) -> AppResult<Vec<StoredDraft<PlayerForm>>>;
}

/// Validation plus hand-off of accepted forms
#[async_trait]
pub trait FormSubmission {
    async fn submit_team(&self, form: &TeamForm) -> AppResult<SubmissionReport>;

    async fn submit_player(&self, form: &PlayerForm) -> AppResult<SubmissionReport>;
}
