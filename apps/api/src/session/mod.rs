//! Session persistence for generated portfolios.
//!
//! An opaque key/value store. Portfolios are written once at generation time as a JSON
//! string and read back verbatim; there is no schema versioning or migration.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::schema::PortfolioData;

/// Fixed key prefix for stored portfolios.
pub const PORTFOLIO_STORAGE_KEY: &str = "portfolioData";

/// Carried in `AppState` as `Arc<dyn SessionStore>`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn put(&self, key: &str, value: String) -> Result<(), AppError>;
}

pub fn portfolio_key(session_id: Uuid) -> String {
    format!("{PORTFOLIO_STORAGE_KEY}:{session_id}")
}

/// Stores a portfolio under a fresh session id.
pub async fn save_portfolio(store: &dyn SessionStore, data: &PortfolioData) -> Result<Uuid, AppError> {
    let session_id = Uuid::new_v4();
    let json = serde_json::to_string(data)
        .map_err(|e| AppError::Session(format!("failed to serialize portfolio: {e}")))?;
    store.put(&portfolio_key(session_id), json).await?;
    debug!("Stored portfolio for session {}", session_id);
    Ok(session_id)
}

pub async fn load_portfolio(store: &dyn SessionStore, session_id: Uuid) -> Result<PortfolioData, AppError> {
    let json = store
        .get(&portfolio_key(session_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No portfolio for session {session_id}")))?;
    serde_json::from_str(&json)
        .map_err(|e| AppError::Session(format!("stored portfolio is unreadable: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// In-process store
// ────────────────────────────────────────────────────────────────────────────

/// Used when no Redis URL is configured. Entries live until the process exits.
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis store
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisSessionStore {
    conn: redis::aio::MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub async fn connect(url: &str, ttl_secs: u64) -> Result<Self, AppError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        Ok(Self { conn, ttl_secs })
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.conn.clone();
        Ok(conn.get::<_, Option<String>>(key).await?)
    }

    async fn put(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, self.ttl_secs).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::coerce::normalize;
    use crate::portfolio::intent::CoercionOptions;
    use serde_json::json;

    #[test]
    fn test_key_format() {
        let id = Uuid::nil();
        assert_eq!(portfolio_key(id), "portfolioData:00000000-0000-0000-0000-000000000000");
    }

    #[tokio::test]
    async fn test_portfolio_round_trips_through_store() {
        let store = MemorySessionStore::default();
        let data = normalize(
            &json!({"about": {"content": {"text": "Hello"}}}),
            &CoercionOptions::default(),
        );
        let id = save_portfolio(&store, &data).await.unwrap();
        let loaded = load_portfolio(&store, id).await.unwrap();
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = MemorySessionStore::default();
        let err = load_portfolio(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_session_error() {
        let store = MemorySessionStore::default();
        let id = Uuid::new_v4();
        store.put(&portfolio_key(id), "{not json".to_string()).await.unwrap();
        let err = load_portfolio(&store, id).await.unwrap_err();
        assert!(matches!(err, AppError::Session(_)));
    }
}
