//! SQLite storage implementation

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;
use crate::record::{TreeRecord, TreeStats};
use crate::validate::ValidTree;
use super::schema;

/// SQLite-backed storage for tree records
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::debug!("Opened tree database at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert a validated record. SQLite assigns the next unused id; both
    /// timestamps are set to now. Returns the assigned id.
    pub fn insert_tree(&self, tree: &ValidTree) -> Result<i64> {
        let now = Utc::now();
        self.conn.execute(
            r#"
            INSERT INTO trees (species, latitude, longitude, planted_date, planter_name, notes, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                tree.species,
                tree.latitude,
                tree.longitude,
                tree.planted_date,
                tree.planter_name,
                tree.notes,
                tree.status,
                now,
                now,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a record by id
    pub fn get_tree(&self, id: i64) -> Result<Option<TreeRecord>> {
        self.conn
            .query_row(
                "SELECT id, species, latitude, longitude, planted_date, planter_name, notes, status, created_at, updated_at FROM trees WHERE id = ?1",
                [id],
                |row| self.row_to_tree(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Replace every mutable field of a record and refresh `updated_at`.
    /// `created_at` is left untouched. Returns false when the id is absent.
    pub fn update_tree(&self, id: i64, tree: &ValidTree) -> Result<bool> {
        let changed = self.conn.execute(
            r#"
            UPDATE trees
            SET species = ?1, latitude = ?2, longitude = ?3, planted_date = ?4,
                planter_name = ?5, notes = ?6, status = ?7, updated_at = ?8
            WHERE id = ?9
            "#,
            params![
                tree.species,
                tree.latitude,
                tree.longitude,
                tree.planted_date,
                tree.planter_name,
                tree.notes,
                tree.status,
                Utc::now(),
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Delete a record. Returns false when the id is absent.
    pub fn delete_tree(&self, id: i64) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM trees WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }

    /// All records, most recently created first. The id tiebreak keeps the
    /// ordering stable for same-instant inserts.
    pub fn list_trees(&self) -> Result<Vec<TreeRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, species, latitude, longitude, planted_date, planter_name, notes, status, created_at, updated_at FROM trees ORDER BY created_at DESC, id DESC"
        )?;

        let trees = stmt
            .query_map([], |row| self.row_to_tree(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(trees)
    }

    /// Count all records
    pub fn count_trees(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM trees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Aggregate counts over the whole table, computed fresh on every call
    pub fn stats(&self) -> Result<TreeStats> {
        self.conn
            .query_row(
                r#"
                SELECT
                    COUNT(*) AS total_trees,
                    COUNT(DISTINCT species) AS species_count,
                    COUNT(CASE WHEN status = 'healthy' THEN 1 END) AS healthy_trees,
                    COUNT(CASE WHEN status = 'needs_attention' THEN 1 END) AS needs_attention
                FROM trees
                "#,
                [],
                |row| {
                    Ok(TreeStats {
                        total_trees: row.get(0)?,
                        species_count: row.get(1)?,
                        healthy_trees: row.get(2)?,
                        needs_attention: row.get(3)?,
                    })
                },
            )
            .map_err(Into::into)
    }

    /// Helper to convert a row to a TreeRecord
    fn row_to_tree(&self, row: &rusqlite::Row) -> rusqlite::Result<TreeRecord> {
        let created_at: DateTime<Utc> = row.get(8)?;
        let updated_at: DateTime<Utc> = row.get(9)?;

        Ok(TreeRecord {
            id: row.get(0)?,
            species: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            planted_date: row.get(4)?,
            planter_name: row.get(5)?,
            notes: row.get(6)?,
            status: row.get(7)?,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{STATUS_HEALTHY, STATUS_NEEDS_ATTENTION};
    use chrono::NaiveDate;

    fn sample_tree(species: &str, status: &str) -> ValidTree {
        ValidTree {
            species: species.to_string(),
            latitude: -1.2921,
            longitude: 36.8219,
            planted_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            planter_name: Some("Wangari".to_string()),
            notes: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = SqliteStore::open_in_memory().unwrap();

        let id = store.insert_tree(&sample_tree("Acacia tortilis", STATUS_HEALTHY)).unwrap();
        let tree = store.get_tree(id).unwrap().unwrap();

        assert_eq!(tree.id, id);
        assert_eq!(tree.species, "Acacia tortilis");
        assert_eq!(tree.latitude, -1.2921);
        assert_eq!(tree.planted_date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(tree.planter_name.as_deref(), Some("Wangari"));
        assert_eq!(tree.status, STATUS_HEALTHY);
        assert!(tree.updated_at >= tree.created_at);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_tree(42).unwrap().is_none());
    }

    #[test]
    fn test_update_is_full_replace() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.insert_tree(&sample_tree("Acacia tortilis", STATUS_HEALTHY)).unwrap();
        let before = store.get_tree(id).unwrap().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));

        let replacement = ValidTree {
            species: "Adansonia digitata".to_string(),
            latitude: -6.8,
            longitude: 39.2,
            planted_date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            planter_name: None,
            notes: Some("storm damage".to_string()),
            status: STATUS_NEEDS_ATTENTION.to_string(),
        };
        assert!(store.update_tree(id, &replacement).unwrap());

        let after = store.get_tree(id).unwrap().unwrap();
        assert_eq!(after.species, "Adansonia digitata");
        assert_eq!(after.planter_name, None);
        assert_eq!(after.notes.as_deref(), Some("storm damage"));
        assert_eq!(after.status, STATUS_NEEDS_ATTENTION);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_tree(&sample_tree("Acacia tortilis", STATUS_HEALTHY)).unwrap();

        let before = store.list_trees().unwrap();
        assert!(!store.update_tree(999, &sample_tree("Baobab", STATUS_HEALTHY)).unwrap());
        let after = store.list_trees().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_delete() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.insert_tree(&sample_tree("Acacia tortilis", STATUS_HEALTHY)).unwrap();

        assert!(store.delete_tree(id).unwrap());
        assert!(store.get_tree(id).unwrap().is_none());
        assert!(!store.delete_tree(id).unwrap());
        assert_eq!(store.count_trees().unwrap(), 0);
    }

    #[test]
    fn test_list_newest_first() {
        let store = SqliteStore::open_in_memory().unwrap();

        let a = store.insert_tree(&sample_tree("Acacia tortilis", STATUS_HEALTHY)).unwrap();
        let b = store.insert_tree(&sample_tree("Adansonia digitata", STATUS_HEALTHY)).unwrap();
        let c = store.insert_tree(&sample_tree("Mangifera indica", STATUS_HEALTHY)).unwrap();

        assert!(a < b && b < c);

        let ids: Vec<i64> = store.list_trees().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c, b, a]);
    }

    #[test]
    fn test_stats_counts() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.insert_tree(&sample_tree("Acacia", STATUS_HEALTHY)).unwrap();
        store.insert_tree(&sample_tree("Acacia", STATUS_HEALTHY)).unwrap();
        store.insert_tree(&sample_tree("Baobab", STATUS_NEEDS_ATTENTION)).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_trees, 3);
        assert_eq!(stats.species_count, 2);
        assert_eq!(stats.healthy_trees, 2);
        assert_eq!(stats.needs_attention, 1);
    }

    #[test]
    fn test_stats_ignore_unrecognized_status() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.insert_tree(&sample_tree("Acacia", STATUS_HEALTHY)).unwrap();
        store.insert_tree(&sample_tree("Acacia", "thriving")).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_trees, 2);
        assert_eq!(stats.healthy_trees, 1);
        assert_eq!(stats.needs_attention, 0);
    }

    #[test]
    fn test_ids_never_reused_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("grove.db");

        {
            let store = SqliteStore::open(&db).unwrap();
            let a = store.insert_tree(&sample_tree("Acacia", STATUS_HEALTHY)).unwrap();
            let b = store.insert_tree(&sample_tree("Baobab", STATUS_HEALTHY)).unwrap();
            assert!(b > a);
            assert!(store.delete_tree(b).unwrap());
        }

        let store = SqliteStore::open(&db).unwrap();
        let c = store.insert_tree(&sample_tree("Mango", STATUS_HEALTHY)).unwrap();
        assert_eq!(c, 3);
    }
}
