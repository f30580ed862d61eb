//! Session/role controller.
//!
//! Holds the authenticated actor and, for HR staff, the id of the open
//! session record. Session records are written in detached background tasks:
//! logins and logouts never wait on the document store, and a failed write
//! is logged and dropped.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::auth::CredentialChecker;
use crate::errors::ConsoleError;
use crate::models::{Actor, CloseSession, NewSession, Role};
use crate::store::SessionStore;

/// Slot the background session-create task writes into.
///
/// `generation` changes on every HR login and logout, so a create that
/// resolves after its login span has ended can tell it is stale.
#[derive(Debug, Default)]
struct OpenSession {
    generation: u64,
    id: Option<String>,
}

pub struct SessionController {
    actor: Option<Actor>,
    credentials: Arc<dyn CredentialChecker>,
    store: Arc<dyn SessionStore>,
    open_session: Arc<Mutex<OpenSession>>,
}

impl SessionController {
    pub fn new(credentials: Arc<dyn CredentialChecker>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            actor: None,
            credentials,
            store,
            open_session: Arc::new(Mutex::new(OpenSession::default())),
        }
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    pub fn role(&self) -> Role {
        self.actor.as_ref().map_or(Role::None, Actor::role)
    }

    /// Id of the open HR session record, once the store has answered.
    pub fn open_session_id(&self) -> Option<String> {
        lock(&self.open_session).id.clone()
    }

    pub fn login_hr(&mut self, email: &str) -> Result<(), ConsoleError> {
        let email = require_identity(email)?;
        self.actor = Some(Actor::HrStaff {
            email: email.to_string(),
        });

        let generation = {
            let mut slot = lock(&self.open_session);
            slot.generation += 1;
            slot.id = None;
            slot.generation
        };

        let store = Arc::clone(&self.store);
        let slot = Arc::clone(&self.open_session);
        let record = NewSession::opened_now(email);
        tracing::info!(email = %record.email, "HR staff logged in");

        spawn_best_effort(async move {
            match store.open_session(&record).await {
                Ok(session_id) => {
                    let mut slot = lock(&slot);
                    if slot.generation == generation {
                        tracing::debug!(session_id = %session_id, "session record opened");
                        slot.id = Some(session_id);
                    } else {
                        tracing::warn!(
                            session_id = %session_id,
                            "session record opened after its login ended; leaving it open"
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, email = %record.email, "failed to open session record");
                }
            }
        });

        Ok(())
    }

    pub fn login_employee(&mut self, employee_id: &str) -> Result<(), ConsoleError> {
        let employee_id = require_identity(employee_id)?;
        tracing::info!(employee_id, "employee logged in");
        self.actor = Some(Actor::Employee {
            employee_id: employee_id.to_string(),
        });
        Ok(())
    }

    pub fn login_admin(&mut self, email: &str, password: &str) -> Result<(), ConsoleError> {
        if !self.credentials.check_admin(email, password) {
            tracing::info!(email, "admin login rejected");
            return Err(ConsoleError::InvalidCredentials);
        }
        tracing::info!(email, "admin logged in");
        self.actor = Some(Actor::Admin {
            email: email.to_string(),
        });
        Ok(())
    }

    /// Clears the HR actor and closes its session record in the background.
    pub fn logout_hr(&mut self) {
        let open_id = {
            let mut slot = lock(&self.open_session);
            slot.generation += 1;
            slot.id.take()
        };
        self.clear_actor();

        let Some(id) = open_id else {
            tracing::debug!("no session record to close");
            return;
        };

        let store = Arc::clone(&self.store);
        spawn_best_effort(async move {
            if let Err(err) = store.close_session(&id, &CloseSession::now()).await {
                tracing::warn!(error = %err, session_id = %id, "failed to close session record");
            }
        });
    }

    pub fn logout_employee(&mut self) {
        self.clear_actor();
    }

    pub fn logout_admin(&mut self) {
        self.clear_actor();
    }

    fn clear_actor(&mut self) {
        if let Some(actor) = self.actor.take() {
            tracing::info!(role = actor.role().as_str(), identity = actor.identity(), "logged out");
        }
    }
}

fn require_identity(raw: &str) -> Result<&str, ConsoleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ConsoleError::MissingIdentity)
    } else {
        Ok(trimmed)
    }
}

fn lock(slot: &Mutex<OpenSession>) -> MutexGuard<'_, OpenSession> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `task` detached from the caller. The handle is dropped on purpose:
/// nothing may ever join on session persistence.
fn spawn_best_effort<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => drop(handle.spawn(task)),
        Err(_) => tracing::warn!("no async runtime; skipping session record write"),
    }
}
