//! Core operations implementation
//!
//! `CatalogOperations` is the hub the CLI talks to: it owns a shared handle
//! on the catalog and the draft store, and implements every core trait.

use crate::config::Config;
use crate::core::{
    catalog::Catalog,
    data::{Player, PlayerProfile, Team, TeamCategory},
    filter::PlayerFilter,
    forms::{PlayerForm, SubmissionOutcome, TeamForm},
    grouping::{Bucket, group_by_key},
    store::InMemoryDraftStore,
    traits::{
        CatalogLookup, DraftStore, FormSubmission, PlayerDetail, SubmissionReport, TeamDetail,
        ViewProjection,
    },
};
use crate::utils::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Main operations hub that implements all core traits
#[derive(Clone)]
pub struct CatalogOperations {
    catalog: Arc<Catalog>,
    store: Arc<dyn DraftStore>,
}

impl CatalogOperations {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn DraftStore>) -> Self {
        Self { catalog, store }
    }

    /// Build from configuration: the override catalog file when one is set,
    /// the built-in catalog otherwise, with a fresh in-memory draft store
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let catalog = match &config.general.catalog_file {
            Some(path) => {
                debug!(path = %path.display(), "loading catalog override");
                Catalog::load(path)?
            }
            None => Catalog::builtin(),
        };
        debug!(
            teams = catalog.teams.len(),
            players = catalog.players.len(),
            profiles = catalog.profiles.len(),
            "catalog ready"
        );

        Ok(Self::new(Arc::new(catalog), Arc::new(InMemoryDraftStore::new())))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &dyn DraftStore {
        self.store.as_ref()
    }
}

impl Default for CatalogOperations {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()), Arc::new(InMemoryDraftStore::new()))
    }
}

impl CatalogLookup for CatalogOperations {
    fn find_team(&self, id: &str) -> Option<&Team> {
        self.catalog.find_team(id)
    }

    fn find_player(&self, id: &str) -> Option<&Player> {
        self.catalog.find_player(id)
    }

    fn resolve_player_profile(&self, id: Option<&str>) -> Option<&PlayerProfile> {
        self.catalog.resolve_profile(id)
    }
}

impl ViewProjection for CatalogOperations {
    fn team_sections(&self) -> Vec<Bucket<TeamCategory, &Team>> {
        group_by_key(self.catalog.teams.iter(), |team| team.category)
    }

    fn team_detail(&self, id: Option<&str>) -> Option<TeamDetail<'_>> {
        let team = self.catalog.resolve_team(id)?;
        if id.is_some_and(|wanted| wanted != team.id && wanted != team.name) {
            debug!(requested = ?id, shown = %team.id, "team lookup fell back to default");
        }

        let staff = self.catalog.staff_of(&team.name).collect();
        let roster = group_by_key(self.catalog.players_of(&team.name), |player| player.position);

        Some(TeamDetail {
            team,
            staff,
            roster,
        })
    }

    fn player_list(&self, filter: &PlayerFilter) -> Vec<&Player> {
        let players = filter.apply(&self.catalog.players);
        debug!(
            matched = players.len(),
            total = self.catalog.players.len(),
            "player filter applied"
        );
        players
    }

    fn player_detail(&self, id: Option<&str>) -> Option<PlayerDetail<'_>> {
        let profile = self.catalog.resolve_profile(id)?;
        let fell_back = id != Some(profile.id.as_str());
        if fell_back {
            debug!(requested = ?id, shown = %profile.id, "player lookup fell back to default");
        }

        let sections = group_by_key(profile.attributes.iter(), |attribute| attribute.category.as_str());

        Some(PlayerDetail {
            profile,
            sections,
            fell_back,
        })
    }
}

#[async_trait]
impl FormSubmission for CatalogOperations {
    async fn submit_team(&self, form: &TeamForm) -> AppResult<SubmissionReport> {
        let outcome = form.validate();
        let receipt = match &outcome {
            SubmissionOutcome::Accepted { .. } => Some(self.store.create_team(form).await?),
            SubmissionOutcome::Rejected { missing, .. } => {
                debug!(?missing, "team submission rejected");
                None
            }
        };
        Ok(SubmissionReport { outcome, receipt })
    }

    async fn submit_player(&self, form: &PlayerForm) -> AppResult<SubmissionReport> {
        let outcome = form.validate();
        let receipt = match &outcome {
            SubmissionOutcome::Accepted { .. } => Some(self.store.create_player(form).await?),
            SubmissionOutcome::Rejected { missing, .. } => {
                debug!(?missing, "player submission rejected");
                None
            }
        };
        Ok(SubmissionReport { outcome, receipt })
    }
}
