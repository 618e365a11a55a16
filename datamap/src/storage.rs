use rusqlite::{params, Connection, OptionalExtension, Row};

use log::{debug, info};
use std::path::Path;

/// Key/value configuration store, one table of `(group, key) -> value` rows.
///
/// Values are kept as text the way a host config manager stores them,
/// callers parse them into whatever they persisted.
pub struct Storage {
    connection: Connection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub group: String,
    pub key: String,
    pub value: String,
}

impl Entry {
    fn parse(row: &Row) -> rusqlite::Result<Self> {
        Ok(Entry {
            group: row.get("group_name")?,
            key: row.get("name")?,
            value: row.get("value")?,
        })
    }
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    pub fn setup_configuration(&self) -> rusqlite::Result<()> {
        let configuration_table = "create table if not exists configuration (
            group_name text not null,
            name text not null,
            value text not null,
            primary key (group_name, name)
        );";
        self.connection.execute_batch(configuration_table)?;
        info!("Initialize configuration storage");
        Ok(())
    }

    pub fn get_configuration(&self, group: &str, key: &str) -> rusqlite::Result<Option<String>> {
        self.connection
            .query_row(
                "select value from configuration where group_name = ? and name = ?",
                params![group, key],
                |row| row.get(0),
            )
            .optional()
    }

    pub fn set_configuration(&self, group: &str, key: &str, value: &str) -> rusqlite::Result<()> {
        debug!("Set configuration {}.{} = {}", group, key, value);
        self.connection.execute(
            "insert into configuration (group_name, name, value) values (?, ?, ?)
            on conflict (group_name, name) do update set value = excluded.value",
            params![group, key, value],
        )?;
        Ok(())
    }

    pub fn fetch_group(&self, group: &str) -> rusqlite::Result<Vec<Entry>> {
        let mut statement = self
            .connection
            .prepare("select * from configuration where group_name = ? order by name")?;
        let mut rows = statement.query([group])?;
        let mut entries = vec![];
        while let Some(row) = rows.next()? {
            entries.push(Entry::parse(row)?);
        }
        Ok(entries)
    }
}
