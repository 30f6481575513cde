//! Remote collaborator: authentication and transaction rows.
//!
//! [`HttpBackend`] talks to the server; [`MockBackend`] keeps everything in
//! memory with the same rules, for offline use and tests.

use engine::{ProfileUpdate, Session, Transaction, TransactionDraft, TransactionPatch, UserProfile};
use thiserror::Error;
use uuid::Uuid;

mod http;
mod mock;

pub use http::HttpBackend;
pub use mock::{DEMO_EMAIL, DEMO_PASSWORD, MockBackend};

#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing, expired or rejected credentials.
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("server unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Every call after sign-in acts on the signed-in user's data only.
pub trait Backend {
    async fn sign_in(&mut self, email: &str, password: &str) -> BackendResult<Session>;

    async fn sign_up(&mut self, name: &str, email: &str, password: &str)
    -> BackendResult<Session>;

    async fn sign_out(&mut self) -> BackendResult<()>;

    /// Adopt a stored token, returning its session when still valid.
    async fn restore(&mut self, token: &str) -> BackendResult<Session>;

    /// Newest first.
    async fn list(&mut self) -> BackendResult<Vec<Transaction>>;

    async fn get(&mut self, id: Uuid) -> BackendResult<Transaction>;

    async fn insert(&mut self, draft: TransactionDraft) -> BackendResult<Transaction>;

    async fn update(&mut self, id: Uuid, patch: TransactionPatch) -> BackendResult<Transaction>;

    async fn delete(&mut self, id: Uuid) -> BackendResult<()>;

    async fn import(&mut self, drafts: Vec<TransactionDraft>) -> BackendResult<usize>;

    async fn clear(&mut self) -> BackendResult<u64>;

    async fn update_profile(&mut self, update: ProfileUpdate) -> BackendResult<UserProfile>;
}

/// The backend picked at startup.
#[derive(Debug)]
pub enum AnyBackend {
    Http(HttpBackend),
    Mock(MockBackend),
}

macro_rules! delegate {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            AnyBackend::Http($backend) => $call,
            AnyBackend::Mock($backend) => $call,
        }
    };
}

impl Backend for AnyBackend {
    async fn sign_in(&mut self, email: &str, password: &str) -> BackendResult<Session> {
        delegate!(self, b => b.sign_in(email, password).await)
    }

    async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        delegate!(self, b => b.sign_up(name, email, password).await)
    }

    async fn sign_out(&mut self) -> BackendResult<()> {
        delegate!(self, b => b.sign_out().await)
    }

    async fn restore(&mut self, token: &str) -> BackendResult<Session> {
        delegate!(self, b => b.restore(token).await)
    }

    async fn list(&mut self) -> BackendResult<Vec<Transaction>> {
        delegate!(self, b => b.list().await)
    }

    async fn get(&mut self, id: Uuid) -> BackendResult<Transaction> {
        delegate!(self, b => b.get(id).await)
    }

    async fn insert(&mut self, draft: TransactionDraft) -> BackendResult<Transaction> {
        delegate!(self, b => b.insert(draft).await)
    }

    async fn update(&mut self, id: Uuid, patch: TransactionPatch) -> BackendResult<Transaction> {
        delegate!(self, b => b.update(id, patch).await)
    }

    async fn delete(&mut self, id: Uuid) -> BackendResult<()> {
        delegate!(self, b => b.delete(id).await)
    }

    async fn import(&mut self, drafts: Vec<TransactionDraft>) -> BackendResult<usize> {
        delegate!(self, b => b.import(drafts).await)
    }

    async fn clear(&mut self) -> BackendResult<u64> {
        delegate!(self, b => b.clear().await)
    }

    async fn update_profile(&mut self, update: ProfileUpdate) -> BackendResult<UserProfile> {
        delegate!(self, b => b.update_profile(update).await)
    }
}
