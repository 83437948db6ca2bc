//! In-memory draft store
//!
//! Drafts live for the lifetime of the store value only.

use crate::core::forms::{PlayerForm, TeamForm};
use crate::core::traits::{DraftStore, Receipt, StoredDraft};
use crate::utils::error::AppResult;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    teams: Mutex<Vec<StoredDraft<TeamForm>>>,
    players: Mutex<Vec<StoredDraft<PlayerForm>>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn receipt(name: &str) -> Receipt {
        Receipt {
            reference: Uuid::new_v4(),
            name: name.trim().to_string(),
            submitted_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn create_team(&self, form: &TeamForm) -> AppResult<Receipt> {
        let receipt = Self::receipt(&form.team_name);
        self.teams.lock().await.push(StoredDraft {
            receipt: receipt.clone(),
            form: form.clone(),
        });
        Ok(receipt)
    }

    async fn create_player(&self, form: &PlayerForm) -> AppResult<Receipt> {
        let receipt = Self::receipt(&form.player_name);
        self.players.lock().await.push(StoredDraft {
            receipt: receipt.clone(),
            form: form.clone(),
        });
        Ok(receipt)
    }

    async fn team_drafts(&self) -> AppResult<Vec<StoredDraft<TeamForm>>> {
        Ok(self.teams.lock().await.clone())
    }

    async fn player_drafts(&self) -> AppResult<Vec<StoredDraft<PlayerForm>>> {
        Ok(self.players.lock().await.clone())
    }
}
