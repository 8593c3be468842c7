//! Trámite repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Serve the seeded trámite reference collection.
//! - Append and list scheduled in-person slots.
//!
//! # Invariants
//! - A scheduled row stores a full copy of the source trámite so later
//!   catalog edits never rewrite reservation history.
//! - No uniqueness constraint: the same trámite can be scheduled repeatedly.

use crate::model::tramite::{ScheduledTramite, Tramite, TramiteId};
use crate::repo::{
    ensure_connection_ready, parse_string_list, parse_uuid_column, string_list_to_db, RepoResult,
};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TRAMITE_COLUMNS: &str =
    "category, title, description, requirements, documents, cost, estimated_time, digital_link";

/// Repository interface for trámite data access.
pub trait TramiteRepository {
    fn list_tramites(&self) -> RepoResult<Vec<Tramite>>;
    fn get_tramite(&self, id: TramiteId) -> RepoResult<Option<Tramite>>;
    /// Appends a copy of `tramite` with the chosen slot and a fresh id.
    fn schedule_tramite(
        &self,
        tramite: &Tramite,
        date: &str,
        time: &str,
    ) -> RepoResult<ScheduledTramite>;
    fn list_scheduled_tramites(&self) -> RepoResult<Vec<ScheduledTramite>>;
}

/// SQLite-backed trámite repository.
pub struct SqliteTramiteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTramiteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["tramites", "scheduled_tramites"])?;
        Ok(Self { conn })
    }
}

impl TramiteRepository for SqliteTramiteRepository<'_> {
    fn list_tramites(&self) -> RepoResult<Vec<Tramite>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, {TRAMITE_COLUMNS}
             FROM tramites
             ORDER BY category ASC, title ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut tramites = Vec::new();
        while let Some(row) = rows.next()? {
            tramites.push(parse_tramite_row(row, "tramites")?);
        }
        Ok(tramites)
    }

    fn get_tramite(&self, id: TramiteId) -> RepoResult<Option<Tramite>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, {TRAMITE_COLUMNS}
             FROM tramites
             WHERE id = ?1;"
        ))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_tramite_row(row, "tramites")?));
        }
        Ok(None)
    }

    fn schedule_tramite(
        &self,
        tramite: &Tramite,
        date: &str,
        time: &str,
    ) -> RepoResult<ScheduledTramite> {
        let scheduled = ScheduledTramite {
            id: Uuid::new_v4(),
            tramite: tramite.clone(),
            date: date.to_string(),
            time: time.to_string(),
        };

        self.conn.execute(
            &format!(
                "INSERT INTO scheduled_tramites (id, tramite_id, {TRAMITE_COLUMNS}, date, time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);"
            ),
            params![
                scheduled.id.to_string(),
                tramite.id.to_string(),
                tramite.category.as_str(),
                tramite.title.as_str(),
                tramite.description.as_str(),
                string_list_to_db(&tramite.requirements),
                string_list_to_db(&tramite.documents),
                tramite.cost.as_str(),
                tramite.estimated_time.as_str(),
                tramite.digital_link.as_deref(),
                date,
                time,
            ],
        )?;

        Ok(scheduled)
    }

    fn list_scheduled_tramites(&self) -> RepoResult<Vec<ScheduledTramite>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, tramite_id, {TRAMITE_COLUMNS}, date, time
             FROM scheduled_tramites
             ORDER BY created_at ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut scheduled = Vec::new();
        while let Some(row) = rows.next()? {
            scheduled.push(parse_scheduled_row(row)?);
        }
        Ok(scheduled)
    }
}

/// Inserts a trámite reference row. Only used by catalog seeding.
pub(crate) fn insert_tramite(conn: &Connection, tramite: &Tramite) -> RepoResult<()> {
    conn.execute(
        &format!(
            "INSERT INTO tramites (id, {TRAMITE_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);"
        ),
        params![
            tramite.id.to_string(),
            tramite.category.as_str(),
            tramite.title.as_str(),
            tramite.description.as_str(),
            string_list_to_db(&tramite.requirements),
            string_list_to_db(&tramite.documents),
            tramite.cost.as_str(),
            tramite.estimated_time.as_str(),
            tramite.digital_link.as_deref(),
        ],
    )?;
    Ok(())
}

fn parse_tramite_row(row: &Row<'_>, table: &str) -> RepoResult<Tramite> {
    // In scheduled_tramites the copied source id lives in tramite_id.
    let id_column = if table == "scheduled_tramites" {
        "tramite_id"
    } else {
        "id"
    };
    let id_text: String = row.get(id_column)?;
    let requirements_text: String = row.get("requirements")?;
    let documents_text: String = row.get("documents")?;

    Ok(Tramite {
        id: parse_uuid_column(&format!("{table}.{id_column}"), &id_text)?,
        category: row.get("category")?,
        title: row.get("title")?,
        description: row.get("description")?,
        requirements: parse_string_list(&format!("{table}.requirements"), &requirements_text)?,
        documents: parse_string_list(&format!("{table}.documents"), &documents_text)?,
        cost: row.get("cost")?,
        estimated_time: row.get("estimated_time")?,
        digital_link: row.get("digital_link")?,
    })
}

fn parse_scheduled_row(row: &Row<'_>) -> RepoResult<ScheduledTramite> {
    let id_text: String = row.get("id")?;

    Ok(ScheduledTramite {
        id: parse_uuid_column("scheduled_tramites.id", &id_text)?,
        tramite: parse_tramite_row(row, "scheduled_tramites")?,
        date: row.get("date")?,
        time: row.get("time")?,
    })
}
