//! redb backend: one file, one table, one transaction per key.

use log::info;
use redb::{Database, TableDefinition, TableError};

use crate::conf::EmbeddedConfig;
use crate::core::BenchError;

use super::Backend;

pub struct EmbeddedBackend {
    db: Database,
    bucket: String,
}

impl EmbeddedBackend {
    pub const NAME: &'static str = "embedded";

    /// Open the database file, creating it if absent. The table itself is created by the first write.
    pub fn open(config: &EmbeddedConfig) -> Result<Self, BenchError> {
        // redb asserts on empty table names.
        if config.bucket.is_empty() {
            return Err(BenchError::open(Self::NAME, "bucket name must not be empty"));
        }
        let db = Database::create(&config.path).map_err(|e| {
            BenchError::open(
                Self::NAME,
                format!("{}: {}", config.path.display(), e),
            )
        })?;
        info!(
            "opened redb file {} (bucket '{}')",
            config.path.display(),
            config.bucket
        );
        Ok(Self {
            db,
            bucket: config.bucket.clone(),
        })
    }

    fn table(&self) -> TableDefinition<'_, &'static str, &'static str> {
        TableDefinition::new(&self.bucket)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), redb::Error> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(self.table())?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, redb::Error> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(self.table()) {
            Ok(table) => table,
            // Nothing has been written to this file yet.
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }
}

impl Backend for EmbeddedBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BenchError> {
        self.put(key, value).map_err(|e| BenchError::write(key, e))
    }

    fn read(&mut self, key: &str) -> Result<Option<String>, BenchError> {
        self.get(key).map_err(|e| BenchError::read(key, e))
    }

    fn close(self: Box<Self>) -> Result<(), BenchError> {
        // redb flushes on commit; dropping the handle releases the file lock.
        drop(self);
        Ok(())
    }
}
