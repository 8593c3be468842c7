//! Public WiFi point repository. Read-only after seeding.

use crate::model::wifi::{Coordinates, WifiPoint, WifiPointId};
use crate::repo::{ensure_connection_ready, parse_uuid_column, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for WiFi point lookups.
pub trait WifiRepository {
    fn list_wifi_points(&self) -> RepoResult<Vec<WifiPoint>>;
    fn get_wifi_point(&self, id: WifiPointId) -> RepoResult<Option<WifiPoint>>;
}

/// SQLite-backed WiFi point repository.
pub struct SqliteWifiRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWifiRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["wifi_points"])?;
        Ok(Self { conn })
    }
}

impl WifiRepository for SqliteWifiRepository<'_> {
    fn list_wifi_points(&self) -> RepoResult<Vec<WifiPoint>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, kind, schedule, latitude, longitude
             FROM wifi_points
             ORDER BY name ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut points = Vec::new();
        while let Some(row) = rows.next()? {
            points.push(parse_point_row(row)?);
        }
        Ok(points)
    }

    fn get_wifi_point(&self, id: WifiPointId) -> RepoResult<Option<WifiPoint>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, kind, schedule, latitude, longitude
             FROM wifi_points
             WHERE id = ?1;",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_point_row(row)?));
        }
        Ok(None)
    }
}

/// Inserts a WiFi point row. Only used by catalog seeding.
pub(crate) fn insert_wifi_point(conn: &Connection, point: &WifiPoint) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO wifi_points (id, name, address, kind, schedule, latitude, longitude)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
        params![
            point.id.to_string(),
            point.name.as_str(),
            point.address.as_str(),
            point.kind.as_str(),
            point.schedule.as_str(),
            point.coordinates.latitude,
            point.coordinates.longitude,
        ],
    )?;
    Ok(())
}

fn parse_point_row(row: &Row<'_>) -> RepoResult<WifiPoint> {
    let id_text: String = row.get("id")?;

    Ok(WifiPoint {
        id: parse_uuid_column("wifi_points.id", &id_text)?,
        name: row.get("name")?,
        address: row.get("address")?,
        kind: row.get("kind")?,
        schedule: row.get("schedule")?,
        coordinates: Coordinates {
            latitude: row.get("latitude")?,
            longitude: row.get("longitude")?,
        },
    })
}
