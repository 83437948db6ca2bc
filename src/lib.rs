//! Futsal ISM - futsal team and player catalog
//!
//! This library holds the catalog of teams, players, staff and player
//! profiles, the projections that turn it into list and detail views, and
//! validation of the add-team and add-player forms.

pub mod cli;
pub mod config;
pub mod core;
pub mod manager;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    catalog::Catalog,
    data::{AttributeKey, Player, PlayerProfile, Position, Team, TeamCategory},
    filter::{PlayerFilter, Selector},
    operations::CatalogOperations,
    traits::{CatalogLookup, DraftStore, FormSubmission, ViewProjection},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
#[derive(Default)]
pub struct FutsalIsm {
    operations: CatalogOperations,
}

impl FutsalIsm {
    /// Build from configuration, loading the override catalog when one is set
    pub fn new(config: &config::Config) -> utils::AppResult<Self> {
        Ok(Self {
            operations: CatalogOperations::from_config(config)?,
        })
    }

    /// Get the underlying operations for direct access
    pub fn operations(&self) -> &CatalogOperations {
        &self.operations
    }
}
