//! SQLite storage implementation.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

use crate::models::NewRegistrationRow;
use crate::schema::registrations;
use crate::{RegistrationStore, StorageError};
use hubsync_core::RegistrationName;

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// SQLite-backed registration store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new SQLite store from a database URL.
    pub fn new(database_url: &str) -> Result<Self, StorageError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = Pool::builder().max_size(10).build(manager)?;

        Ok(Self { pool })
    }

    /// In-memory SQLite store; entries last for the lifetime of the pool.
    ///
    /// Each connection to `:memory:` is its own database, so the pool is
    /// limited to one connection.
    pub fn in_memory() -> Result<Self, StorageError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder().max_size(1).build(manager)?;

        Ok(Self { pool })
    }

    /// Run pending migrations.
    pub fn run_migrations(&self) -> Result<(), StorageError> {
        use diesel_migrations::MigrationHarness as _;

        let mut conn = self.conn()?;
        conn.run_pending_migrations(crate::MIGRATIONS)
            .map_err(|e| StorageError::Migration(e.to_string()))?;

        Ok(())
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<ConnectionManager<SqliteConnection>>, StorageError>
    {
        Ok(self.pool.get()?)
    }
}

impl RegistrationStore for SqliteStore {
    fn put(&self, name: &RegistrationName, remote_id: &str) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        let now = chrono::Utc::now().naive_utc();

        let row = NewRegistrationRow {
            name: name.as_str(),
            remote_id,
            updated_at: now,
        };

        diesel::insert_into(registrations::table)
            .values(&row)
            .on_conflict(registrations::name)
            .do_update()
            .set((
                registrations::remote_id.eq(remote_id),
                registrations::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        tracing::debug!(name = %name, remote_id, "stored registration id");
        Ok(())
    }

    fn get(&self, name: &RegistrationName) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn()?;

        let result: Option<String> = registrations::table
            .filter(registrations::name.eq(name.as_str()))
            .select(registrations::remote_id)
            .first(&mut conn)
            .optional()?;

        Ok(result)
    }

    fn remove(&self, name: &RegistrationName) -> Result<(), StorageError> {
        let mut conn = self.conn()?;

        diesel::delete(registrations::table.filter(registrations::name.eq(name.as_str())))
            .execute(&mut conn)?;

        Ok(())
    }

    fn remove_all(&self) -> Result<(), StorageError> {
        let mut conn = self.conn()?;

        diesel::delete(registrations::table).execute(&mut conn)?;

        Ok(())
    }

    fn count(&self) -> Result<usize, StorageError> {
        let mut conn = self.conn()?;

        let count: i64 = registrations::table.count().get_result(&mut conn)?;

        Ok(count as usize)
    }

    fn names(&self) -> Result<Vec<RegistrationName>, StorageError> {
        let mut conn = self.conn()?;

        let names: Vec<String> = registrations::table
            .select(registrations::name)
            .load(&mut conn)?;

        Ok(names.iter().map(|n| RegistrationName::parse(n)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        let store = SqliteStore::in_memory().unwrap();
        store.run_migrations().unwrap();
        store
    }

    #[test]
    fn test_put_then_get() {
        let store = store();
        let name = RegistrationName::Native;

        store.put(&name, "reg-1").unwrap();
        assert_eq!(store.get(&name).unwrap().as_deref(), Some("reg-1"));
    }

    #[test]
    fn test_put_overwrites_prior_id() {
        let store = store();
        let name = RegistrationName::template("news");

        store.put(&name, "reg-1").unwrap();
        store.put(&name, "reg-2").unwrap();

        assert_eq!(store.get(&name).unwrap().as_deref(), Some("reg-2"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_remove_absent_is_not_an_error() {
        let store = store();
        store.remove(&RegistrationName::Native).unwrap();
    }

    #[test]
    fn test_remove_all_clears_every_entry() {
        let store = store();
        store.put(&RegistrationName::Native, "reg-1").unwrap();
        store.put(&RegistrationName::template("a"), "reg-2").unwrap();

        store.remove_all().unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert!(store.names().unwrap().is_empty());
    }

    #[test]
    fn test_names_round_trip_native_key() {
        let store = store();
        store.put(&RegistrationName::Native, "reg-1").unwrap();
        store.put(&RegistrationName::template("a"), "reg-2").unwrap();

        let mut names = store.names().unwrap();
        names.sort();
        assert_eq!(
            names,
            vec![RegistrationName::Native, RegistrationName::template("a")]
        );
    }
}
