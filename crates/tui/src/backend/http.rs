use api_types::{
    ErrorResponse,
    auth::{SessionResponse, SignIn, SignUp},
    profile::{self, ProfileView},
    transaction::{
        ClearResponse, ImportResponse, TransactionImport, TransactionKind as ApiKind,
        TransactionListResponse, TransactionNew, TransactionUpdate, TransactionView,
    },
};
use engine::{
    MoneyCents, ProfileUpdate, Session, Transaction, TransactionDraft, TransactionKind,
    TransactionPatch, UserProfile,
};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{Backend, BackendError, BackendResult};
use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Url,
    http: reqwest::Client,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Invalid(format!("base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            token: None,
        })
    }

    fn request(&self, method: Method, path: &str) -> BackendResult<RequestBuilder> {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|err| BackendError::Server(format!("invalid base_url: {err}")))?;
        let builder = self.http.request(method, endpoint);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(builder: RequestBuilder) -> BackendResult<Response> {
        let res = builder.send().await?;
        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status();
        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::debug!(%status, %body, "request failed");

        let err = match status.as_u16() {
            401 | 403 => BackendError::Unauthorized,
            404 => BackendError::NotFound,
            409 => BackendError::Conflict(body),
            422 => BackendError::Validation(body),
            _ => BackendError::Server(body),
        };
        Err(err)
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> BackendResult<T> {
        Ok(Self::send(builder).await?.json::<T>().await?)
    }

    fn adopt(&mut self, res: SessionResponse) -> Session {
        self.token = Some(res.token.clone());
        Session {
            token: res.token,
            profile: profile_from_view(res.profile),
        }
    }
}

fn profile_from_view(view: ProfileView) -> UserProfile {
    UserProfile {
        id: view.id,
        name: view.name,
        email: view.email,
        monthly_budget: MoneyCents::new(view.monthly_budget_minor),
        selected_categories: view.selected_categories,
        onboarding_complete: view.onboarding_complete,
    }
}

fn api_kind(kind: TransactionKind) -> ApiKind {
    match kind {
        TransactionKind::Expense => ApiKind::Expense,
        TransactionKind::Income => ApiKind::Income,
    }
}

fn transaction_from_view(view: TransactionView) -> Transaction {
    Transaction {
        id: view.id,
        kind: match view.kind {
            ApiKind::Expense => TransactionKind::Expense,
            ApiKind::Income => TransactionKind::Income,
        },
        amount: MoneyCents::new(view.amount_minor),
        category: view.category,
        description: view.description,
        date: view.date,
    }
}

fn transaction_new(draft: TransactionDraft) -> TransactionNew {
    TransactionNew {
        kind: api_kind(draft.kind),
        amount_minor: draft.amount.cents(),
        category: draft.category,
        description: draft.description,
        date: draft.date,
    }
}

impl Backend for HttpBackend {
    async fn sign_in(&mut self, email: &str, password: &str) -> BackendResult<Session> {
        let payload = SignIn {
            email: email.to_string(),
            password: password.to_string(),
        };
        let res: SessionResponse =
            Self::json(self.request(Method::POST, "auth/sign_in")?.json(&payload)).await?;
        Ok(self.adopt(res))
    }

    async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        let payload = SignUp {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let res: SessionResponse =
            Self::json(self.request(Method::POST, "auth/sign_up")?.json(&payload)).await?;
        Ok(self.adopt(res))
    }

    async fn sign_out(&mut self) -> BackendResult<()> {
        if self.token.is_none() {
            return Ok(());
        }
        let result = Self::send(self.request(Method::POST, "auth/sign_out")?).await;
        self.token = None;
        match result {
            Ok(_) | Err(BackendError::Unauthorized) => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn restore(&mut self, token: &str) -> BackendResult<Session> {
        self.token = Some(token.to_string());
        match Self::json::<SessionResponse>(self.request(Method::GET, "auth/session")?).await {
            Ok(res) => Ok(self.adopt(res)),
            Err(err) => {
                self.token = None;
                Err(err)
            }
        }
    }

    async fn list(&mut self) -> BackendResult<Vec<Transaction>> {
        let res: TransactionListResponse =
            Self::json(self.request(Method::GET, "transactions")?).await?;
        Ok(res
            .transactions
            .into_iter()
            .map(transaction_from_view)
            .collect())
    }

    async fn get(&mut self, id: Uuid) -> BackendResult<Transaction> {
        let view: TransactionView =
            Self::json(self.request(Method::GET, &format!("transactions/{id}"))?).await?;
        Ok(transaction_from_view(view))
    }

    async fn insert(&mut self, draft: TransactionDraft) -> BackendResult<Transaction> {
        let payload = transaction_new(draft);
        let view: TransactionView =
            Self::json(self.request(Method::POST, "transactions")?.json(&payload)).await?;
        Ok(transaction_from_view(view))
    }

    async fn update(&mut self, id: Uuid, patch: TransactionPatch) -> BackendResult<Transaction> {
        let payload = TransactionUpdate {
            kind: patch.kind.map(api_kind),
            amount_minor: patch.amount.map(MoneyCents::cents),
            category: patch.category,
            description: patch.description,
            date: patch.date,
        };
        let view: TransactionView = Self::json(
            self.request(Method::PATCH, &format!("transactions/{id}"))?
                .json(&payload),
        )
        .await?;
        Ok(transaction_from_view(view))
    }

    async fn delete(&mut self, id: Uuid) -> BackendResult<()> {
        Self::send(self.request(Method::DELETE, &format!("transactions/{id}"))?).await?;
        Ok(())
    }

    async fn import(&mut self, drafts: Vec<TransactionDraft>) -> BackendResult<usize> {
        let payload = TransactionImport {
            transactions: drafts.into_iter().map(transaction_new).collect(),
        };
        let res: ImportResponse = Self::json(
            self.request(Method::POST, "transactions/import")?
                .json(&payload),
        )
        .await?;
        Ok(res.imported)
    }

    async fn clear(&mut self) -> BackendResult<u64> {
        let res: ClearResponse = Self::json(self.request(Method::DELETE, "transactions")?).await?;
        Ok(res.removed)
    }

    async fn update_profile(&mut self, update: ProfileUpdate) -> BackendResult<UserProfile> {
        let payload = profile::ProfileUpdate {
            name: update.name,
            monthly_budget_minor: update.monthly_budget.map(MoneyCents::cents),
            selected_categories: update.selected_categories,
            onboarding_complete: update.onboarding_complete,
        };
        let view: ProfileView =
            Self::json(self.request(Method::PATCH, "profile")?.json(&payload)).await?;
        Ok(profile_from_view(view))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use migration::MigratorTrait;
    use sea_orm::Database;

    use super::*;

    async fn spawn_server() -> String {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let engine = engine::Engine::builder().database(db).build().await.unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = server::spawn_with_listener(engine, listener).unwrap();
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn talks_to_the_server() {
        let base_url = spawn_server().await;
        let mut backend = HttpBackend::new(&base_url).unwrap();

        assert!(matches!(backend.list().await, Err(BackendError::Unauthorized)));

        let session = backend
            .sign_up("Asha", "asha@example.com", "secret1")
            .await
            .unwrap();
        assert!(!session.profile.onboarding_complete);

        let tx = backend
            .insert(TransactionDraft {
                kind: TransactionKind::Expense,
                amount: MoneyCents::new(4_550),
                category: "food".to_string(),
                description: "Lunch".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(backend.list().await.unwrap(), vec![tx.clone()]);
        assert_eq!(backend.get(tx.id).await.unwrap(), tx);

        let profile = backend
            .update_profile(
                ProfileUpdate::default()
                    .monthly_budget(MoneyCents::new(2_000_000))
                    .selected_categories(vec!["food".to_string()])
                    .onboarding_complete(true),
            )
            .await
            .unwrap();
        assert!(profile.onboarding_complete);

        backend.sign_out().await.unwrap();
        let mut fresh = HttpBackend::new(&base_url).unwrap();
        assert!(matches!(
            fresh.restore(&session.token).await,
            Err(BackendError::Unauthorized)
        ));
        assert!(matches!(
            fresh.sign_in("asha@example.com", "bad-password").await,
            Err(BackendError::Unauthorized)
        ));
        let again = fresh.sign_in("asha@example.com", "secret1").await.unwrap();
        assert_eq!(again.profile.id, session.profile.id);
        assert!(again.profile.onboarding_complete);
        assert_eq!(again.profile.monthly_budget, MoneyCents::new(2_000_000));
        assert_eq!(again.profile.selected_categories, vec!["food".to_string()]);
    }
}
