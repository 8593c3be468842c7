//! Trámite use-case service: catalog reads and in-person scheduling.
//!
//! # Invariants
//! - Scheduling copies the trámite record wholesale; the reservation is
//!   never affected by later catalog changes.
//! - No uniqueness or conflict checks apply to scheduled slots.

use crate::model::tramite::{ScheduledTramite, Tramite, TramiteId};
use crate::repo::tramite_repo::TramiteRepository;
use crate::repo::RepoResult;
use log::info;
use std::collections::BTreeSet;

/// Trámite service facade over a repository implementation.
pub struct TramiteService<R: TramiteRepository> {
    repo: R,
}

impl<R: TramiteRepository> TramiteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_tramites(&self) -> RepoResult<Vec<Tramite>> {
        self.repo.list_tramites()
    }

    pub fn get_tramite(&self, id: TramiteId) -> RepoResult<Option<Tramite>> {
        self.repo.get_tramite(id)
    }

    /// Distinct trámite categories, sorted, for grouped display.
    pub fn categories(&self) -> RepoResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .repo
            .list_tramites()?
            .into_iter()
            .map(|tramite| tramite.category)
            .collect();
        Ok(categories.into_iter().collect())
    }

    /// Reserves an in-person slot for the given trámite.
    pub fn schedule(
        &self,
        tramite: &Tramite,
        date: &str,
        time: &str,
    ) -> RepoResult<ScheduledTramite> {
        let scheduled = self.repo.schedule_tramite(tramite, date, time)?;
        info!(
            "event=tramite_scheduled module=tramites status=ok scheduled_id={} tramite_id={}",
            scheduled.id, tramite.id
        );
        Ok(scheduled)
    }

    pub fn scheduled(&self) -> RepoResult<Vec<ScheduledTramite>> {
        self.repo.list_scheduled_tramites()
    }
}
