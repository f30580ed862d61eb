//! Access to the external REST document store.
//!
//! The console itself only touches the `sessions` collection, to keep an
//! audit trail of HR login spans. Everything here is best-effort from the
//! console's point of view: callers log failures and carry on.

mod client;

pub use client::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CloseSession, CreatedDocument, NewSession};

/// Collection holding HR session records.
pub const SESSIONS: &str = "sessions";

/// Failure talking to the document store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("document store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("document store answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected document store payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where HR session records are opened and closed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a session record and returns the id the store assigned.
    async fn open_session(&self, session: &NewSession) -> Result<String, PersistenceError>;

    async fn close_session(&self, id: &str, close: &CloseSession) -> Result<(), PersistenceError>;
}

/// `SessionStore` backed by the document store's `sessions` collection.
#[derive(Debug, Clone)]
pub struct HttpSessionStore {
    client: DocumentClient,
}

impl HttpSessionStore {
    pub fn new(client: DocumentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn open_session(&self, session: &NewSession) -> Result<String, PersistenceError> {
        let created: CreatedDocument = self.client.create(SESSIONS, session).await?;
        Ok(created.id)
    }

    async fn close_session(&self, id: &str, close: &CloseSession) -> Result<(), PersistenceError> {
        self.client.patch(SESSIONS, id, close).await
    }
}
