//! Key-value configuration storage backed by SQLite.
//!
//! Holds the Gemini API key, the remote service URL, and the default
//! model. Secrets resolve stored-value-first with an environment-variable
//! fallback, so a hosting environment's secret store still works without
//! ever touching the database.

use anyhow::{Context as _, Result};
use rusqlite::Connection;
use std::sync::Mutex;

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a config value (upsert).
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Remove a config key.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM config WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Resolve a secret: stored value first, then the environment variable.
    /// Empty values count as absent either way.
    pub fn resolve(&self, key: &str, env_var: &str) -> Result<Option<String>> {
        if let Some(value) = self.get(key)?
            && !value.is_empty()
        {
            return Ok(Some(value));
        }

        if let Ok(value) = std::env::var(env_var)
            && !value.is_empty()
        {
            return Ok(Some(value));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_config() -> Config {
        Config::open(":memory:").unwrap()
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let config = mem_config();
        assert!(config.get("nonexistent").unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let config = mem_config();
        config.set("model", "gemini-2.5-flash").unwrap();
        assert_eq!(config.get("model").unwrap().unwrap(), "gemini-2.5-flash");
    }

    #[test]
    fn set_overwrites_existing() {
        let config = mem_config();
        config.set("remote_url", "https://old.example.com").unwrap();
        config.set("remote_url", "https://new.example.com").unwrap();
        assert_eq!(
            config.get("remote_url").unwrap().unwrap(),
            "https://new.example.com"
        );
    }

    #[test]
    fn remove_deletes_key() {
        let config = mem_config();
        config.set("gemini_api_key", "secret").unwrap();
        config.remove("gemini_api_key").unwrap();
        assert!(config.get("gemini_api_key").unwrap().is_none());
    }

    #[test]
    fn remove_nonexistent_is_ok() {
        let config = mem_config();
        config.remove("nonexistent").unwrap();
    }

    #[test]
    fn resolve_prefers_stored_value() {
        let config = mem_config();
        config.set("test_key", "from-store").unwrap();
        // An env var that certainly isn't set
        let value = config
            .resolve("test_key", "SAFESCAN_TEST_UNSET_VAR")
            .unwrap();
        assert_eq!(value.unwrap(), "from-store");
    }

    #[test]
    fn resolve_missing_everywhere_is_none() {
        let config = mem_config();
        assert!(
            config
                .resolve("test_key", "SAFESCAN_TEST_UNSET_VAR")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn resolve_skips_empty_stored_value() {
        let config = mem_config();
        config.set("test_key", "").unwrap();
        assert!(
            config
                .resolve("test_key", "SAFESCAN_TEST_UNSET_VAR")
                .unwrap()
                .is_none()
        );
    }
}
