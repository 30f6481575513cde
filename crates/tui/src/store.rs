//! The client's copy of the signed-in user's transactions.
//!
//! Every mutation goes to the backend first; the local list changes only
//! once the backend confirmed it, so a failed call leaves it untouched.

use chrono::NaiveDate;
use engine::{
    MoneyCents, ProfileUpdate, Session, Transaction, TransactionDraft, TransactionFilter,
    TransactionPatch, UserProfile, sample,
    stats::{AnalyticsSummary, DashboardSummary},
};
use rand::Rng;
use uuid::Uuid;

use crate::backend::{Backend, BackendError, BackendResult};

/// What the screens read.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    loading: bool,
}

impl Ledger {
    /// Newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dashboard(&self, profile: Option<&UserProfile>, today: NaiveDate) -> DashboardSummary {
        DashboardSummary::compute(&self.transactions, profile, today)
    }

    pub fn analytics(&self, profile: Option<&UserProfile>, today: NaiveDate) -> AnalyticsSummary {
        AnalyticsSummary::compute(&self.transactions, profile, today)
    }

    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter.apply(&self.transactions)
    }

    pub fn find(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Inserts ahead of older dates and ahead of records sharing its date.
    fn insert_sorted(&mut self, tx: Transaction) {
        let at = self
            .transactions
            .iter()
            .position(|existing| existing.date <= tx.date)
            .unwrap_or(self.transactions.len());
        self.transactions.insert(at, tx);
    }

    fn clear(&mut self) {
        self.transactions.clear();
    }
}

pub struct Store<B> {
    backend: B,
    ledger: Ledger,
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            ledger: Ledger::default(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn begin(&mut self) {
        self.ledger.loading = true;
    }

    fn finish<T>(&mut self, op: &'static str, result: BackendResult<T>) -> BackendResult<T> {
        self.ledger.loading = false;
        if let Err(err) = &result {
            tracing::warn!(op, "backend call failed: {err}");
        }
        result
    }

    /// Opens a session only; the caller fetches the list with
    /// [`Store::refresh`] once the session is adopted.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> BackendResult<Session> {
        self.begin();
        let result = self.backend.sign_in(email, password).await;
        let session = self.finish("sign_in", result)?;
        self.ledger.clear();
        Ok(session)
    }

    pub async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        self.begin();
        let result = self.backend.sign_up(name, email, password).await;
        let session = self.finish("sign_up", result)?;
        self.ledger.clear();
        Ok(session)
    }

    pub async fn restore(&mut self, token: &str) -> BackendResult<Session> {
        self.begin();
        let result = self.backend.restore(token).await;
        let session = self.finish("restore", result)?;
        self.ledger.clear();
        Ok(session)
    }

    /// Local state is dropped even when the backend call fails.
    pub async fn sign_out(&mut self) -> BackendResult<()> {
        self.begin();
        let result = self.backend.sign_out().await;
        self.ledger.clear();
        self.finish("sign_out", result)
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Drops local state after the backend invalidated the session.
    pub fn forget(&mut self) {
        self.ledger.clear();
        self.ledger.loading = false;
    }

    /// Replaces the local list with the backend's.
    pub async fn refresh(&mut self) -> BackendResult<()> {
        self.begin();
        let result = self.backend.list().await;
        self.ledger.transactions = self.finish("refresh", result)?;
        Ok(())
    }

    /// Invalid drafts are rejected before any backend call.
    pub async fn add(&mut self, draft: TransactionDraft) -> BackendResult<Transaction> {
        let draft = draft
            .validated()
            .map_err(|err| BackendError::Validation(err.to_string()))?;
        self.begin();
        let result = self.backend.insert(draft).await;
        let tx = self.finish("add", result)?;
        tracing::info!(id = %tx.id, "transaction added");
        self.ledger.insert_sorted(tx.clone());
        Ok(tx)
    }

    pub async fn update(
        &mut self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> BackendResult<Transaction> {
        let current = match self.ledger.find(id) {
            Some(tx) => tx.clone(),
            None => {
                self.begin();
                let result = self.backend.get(id).await;
                self.finish("get", result)?
            }
        };
        patch
            .apply(&current)
            .map_err(|err| BackendError::Validation(err.to_string()))?;
        self.begin();
        let result = self.backend.update(id, patch).await;
        let tx = self.finish("update", result)?;
        self.ledger.transactions.retain(|existing| existing.id != id);
        self.ledger.insert_sorted(tx.clone());
        Ok(tx)
    }

    pub async fn delete(&mut self, id: Uuid) -> BackendResult<()> {
        self.begin();
        let result = self.backend.delete(id).await;
        self.finish("delete", result)?;
        self.ledger.transactions.retain(|tx| tx.id != id);
        Ok(())
    }

    /// Imports generated sample data, then re-fetches the list.
    pub async fn import_sample<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        rng: &mut R,
    ) -> BackendResult<usize> {
        let drafts = sample::generate(today, rng);
        self.begin();
        let result = self.backend.import(drafts).await;
        let imported = self.finish("import_sample", result)?;
        tracing::info!(imported, "sample data imported");
        self.refresh().await?;
        Ok(imported)
    }

    /// Deletes every transaction on the backend, then re-fetches the list.
    pub async fn clear_all(&mut self) -> BackendResult<u64> {
        self.begin();
        let result = self.backend.clear().await;
        let removed = self.finish("clear_all", result)?;
        tracing::info!(removed, "transactions cleared");
        self.refresh().await?;
        Ok(removed)
    }

    pub async fn update_profile(&mut self, update: ProfileUpdate) -> BackendResult<UserProfile> {
        self.begin();
        let result = self.backend.update_profile(update).await;
        self.finish("update_profile", result)
    }

    /// Saves the onboarding choices and marks onboarding done. A user
    /// without transactions gets sample data.
    pub async fn complete_onboarding<R: Rng + ?Sized>(
        &mut self,
        budget: MoneyCents,
        categories: Vec<String>,
        today: NaiveDate,
        rng: &mut R,
    ) -> BackendResult<UserProfile> {
        let update = ProfileUpdate::default()
            .monthly_budget(budget)
            .selected_categories(categories)
            .onboarding_complete(true);
        let profile = self.update_profile(update).await?;
        self.refresh().await?;
        if self.ledger.transactions.is_empty() {
            self.import_sample(today, rng).await?;
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use engine::{CATEGORIES, TransactionKind, sample::SAMPLE_DAYS};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::backend::{DEMO_EMAIL, DEMO_PASSWORD, HttpBackend, MockBackend};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn draft(d: u32, description: &str, major: i64) -> TransactionDraft {
        TransactionDraft {
            kind: TransactionKind::Expense,
            amount: MoneyCents::from_major(major),
            category: "food".to_string(),
            description: description.to_string(),
            date: day(d),
        }
    }

    async fn demo_store() -> Store<MockBackend> {
        let mut store = Store::new(MockBackend::new(Duration::ZERO));
        store.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store
    }

    fn descriptions<B: Backend>(store: &Store<B>) -> Vec<&str> {
        store
            .ledger()
            .transactions()
            .iter()
            .map(|tx| tx.description.as_str())
            .collect()
    }

    #[tokio::test]
    async fn add_keeps_newest_first() {
        let mut store = demo_store().await;
        store.add(draft(3, "a", 10)).await.unwrap();
        store.add(draft(9, "b", 10)).await.unwrap();
        store.add(draft(3, "c", 10)).await.unwrap();
        assert_eq!(descriptions(&store), ["b", "c", "a"]);

        store.refresh().await.unwrap();
        assert_eq!(descriptions(&store), ["b", "c", "a"]);
    }

    #[tokio::test]
    async fn add_then_delete_restores_the_store() {
        let mut store = demo_store().await;
        store.add(draft(3, "a", 10)).await.unwrap();
        let before = store.ledger().transactions().to_vec();

        let tx = store.add(draft(5, "b", 20)).await.unwrap();
        store.delete(tx.id).await.unwrap();
        assert_eq!(store.ledger().transactions(), before.as_slice());
        store.refresh().await.unwrap();
        assert_eq!(store.ledger().transactions(), before.as_slice());
    }

    #[tokio::test]
    async fn invalid_draft_changes_nothing() {
        let mut store = demo_store().await;
        let err = store.add(draft(3, "  ", 10)).await.unwrap_err();
        assert!(matches!(err, BackendError::Validation(_)));
        let err = store.add(draft(3, "zero", 0)).await.unwrap_err();
        assert!(matches!(err, BackendError::Validation(_)));

        store.refresh().await.unwrap();
        assert!(store.ledger().transactions().is_empty());
        assert!(!store.ledger().is_loading());
    }

    #[tokio::test]
    async fn update_moves_the_record_to_its_new_date() {
        let mut store = demo_store().await;
        let first = store.add(draft(3, "a", 10)).await.unwrap();
        store.add(draft(5, "b", 10)).await.unwrap();

        let patch = TransactionPatch {
            date: Some(day(8)),
            description: Some("a2".to_string()),
            ..Default::default()
        };
        let updated = store.update(first.id, patch).await.unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(descriptions(&store), ["a2", "b"]);

        let bad = TransactionPatch {
            amount: Some(MoneyCents::ZERO),
            ..Default::default()
        };
        assert!(matches!(
            store.update(first.id, bad).await,
            Err(BackendError::Validation(_))
        ));
        assert_eq!(descriptions(&store), ["a2", "b"]);
    }

    #[tokio::test]
    async fn failed_delete_leaves_the_list() {
        let mut store = demo_store().await;
        store.add(draft(3, "a", 10)).await.unwrap();
        assert!(matches!(
            store.delete(Uuid::new_v4()).await,
            Err(BackendError::NotFound)
        ));
        assert_eq!(descriptions(&store), ["a"]);

        let patch = TransactionPatch {
            description: Some("b".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            store.update(Uuid::new_v4(), patch).await,
            Err(BackendError::NotFound)
        ));
        assert!(!store.ledger().is_loading());
    }

    #[tokio::test]
    async fn sample_import_and_clear_refetch() {
        let mut store = demo_store().await;
        let mut rng = StdRng::seed_from_u64(7);
        let imported = store.import_sample(day(18), &mut rng).await.unwrap();
        assert!(imported > 0);
        assert_eq!(store.ledger().transactions().len(), imported);
        let oldest = store.ledger().transactions().last().unwrap().date;
        assert!(oldest >= day(18) - chrono::Days::new(SAMPLE_DAYS));

        let removed = store.clear_all().await.unwrap();
        assert_eq!(removed, imported as u64);
        assert!(store.ledger().transactions().is_empty());
    }

    #[tokio::test]
    async fn sign_in_succeeds_when_the_list_is_unavailable() {
        let mut store = Store::new(MockBackend::new(Duration::ZERO));
        store.backend_mut().set_outage(true);
        let session = store.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(session.profile.email, DEMO_EMAIL);
        assert!(matches!(store.refresh().await, Err(BackendError::Server(_))));
        assert!(!store.ledger().is_loading());

        store.backend_mut().set_outage(false);
        store.refresh().await.unwrap();
    }

    #[tokio::test]
    async fn sign_out_drops_local_state() {
        let mut store = demo_store().await;
        store.add(draft(3, "a", 10)).await.unwrap();
        store.sign_out().await.unwrap();
        assert!(store.ledger().transactions().is_empty());
        assert!(matches!(store.refresh().await, Err(BackendError::Unauthorized)));
    }

    #[tokio::test]
    async fn selectors_read_the_ledger() {
        let mut store = demo_store().await;
        store.add(draft(3, "Lunch", 300)).await.unwrap();
        store.add(draft(4, "Dinner", 200)).await.unwrap();

        let summary = store.ledger().dashboard(None, day(18));
        assert_eq!(summary.expenses, MoneyCents::from_major(500));
        assert_eq!(summary.recent.len(), 2);

        let filter = TransactionFilter {
            search: "lun".to_string(),
            ..Default::default()
        };
        assert_eq!(store.ledger().filtered(&filter).len(), 1);
    }

    async fn spawn_server() -> String {
        use migration::MigratorTrait;

        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let engine = engine::Engine::builder().database(db).build().await.unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = server::spawn_with_listener(engine, listener).unwrap();
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn onboarding_is_stored_on_the_server() {
        let base_url = spawn_server().await;
        let mut store = Store::new(HttpBackend::new(&base_url).unwrap());
        let session = store
            .sign_up("Asha", "asha@example.com", "secret1")
            .await
            .unwrap();
        assert!(!session.profile.onboarding_complete);

        let mut rng = StdRng::seed_from_u64(1);
        let profile = store
            .complete_onboarding(MoneyCents::from_major(20_000), Vec::new(), day(18), &mut rng)
            .await
            .unwrap();
        assert!(profile.onboarding_complete);
        assert_eq!(profile.selected_categories.len(), CATEGORIES.len());
        let imported = store.ledger().transactions().len();
        assert!(imported > 0);
        store.sign_out().await.unwrap();

        let mut fresh = Store::new(HttpBackend::new(&base_url).unwrap());
        let again = fresh.sign_in("asha@example.com", "secret1").await.unwrap();
        assert!(fresh.ledger().transactions().is_empty());
        fresh.refresh().await.unwrap();
        assert!(again.profile.onboarding_complete);
        assert_eq!(again.profile.monthly_budget, MoneyCents::from_major(20_000));
        assert_eq!(fresh.ledger().transactions().len(), imported);
    }
}
