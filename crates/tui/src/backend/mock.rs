use std::{collections::HashMap, time::Duration};

use engine::{
    CATEGORIES, MAX_AMOUNT, MIN_PASSWORD_LEN, MoneyCents, ProfileUpdate, Session, Transaction,
    TransactionDraft, TransactionPatch, UserProfile,
};
use uuid::Uuid;

use super::{Backend, BackendError, BackendResult};

pub const DEMO_EMAIL: &str = "demo@financeflow.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug)]
struct Account {
    password: String,
    profile: UserProfile,
}

#[derive(Debug)]
struct Row {
    owner: Uuid,
    /// Insert order; breaks ties between equal dates.
    seq: u64,
    tx: Transaction,
}

/// In-memory backend with the server's rules: ownership, validation and
/// newest-first ordering.
///
/// Authentication calls sleep for `latency` first.
#[derive(Debug)]
pub struct MockBackend {
    latency: Duration,
    /// Keyed by normalized email.
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, Uuid>,
    rows: Vec<Row>,
    next_seq: u64,
    current: Option<Uuid>,
    /// While set, every call past authentication fails as a server error.
    outage: bool,
}

impl MockBackend {
    /// A backend holding only the demo account, onboarding already done.
    pub fn new(latency: Duration) -> Self {
        let mut backend = Self {
            latency,
            accounts: HashMap::new(),
            sessions: HashMap::new(),
            rows: Vec::new(),
            next_seq: 0,
            current: None,
            outage: false,
        };
        backend.accounts.insert(
            DEMO_EMAIL.to_string(),
            Account {
                password: DEMO_PASSWORD.to_string(),
                profile: UserProfile {
                    id: Uuid::new_v4(),
                    name: "Demo User".to_string(),
                    email: DEMO_EMAIL.to_string(),
                    monthly_budget: MoneyCents::from_major(35_000),
                    selected_categories: CATEGORIES.iter().map(|c| c.id.to_string()).collect(),
                    onboarding_complete: true,
                },
            },
        );
        backend
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    #[cfg(test)]
    pub fn set_outage(&mut self, outage: bool) {
        self.outage = outage;
    }

    fn user(&self) -> BackendResult<Uuid> {
        let user = self.current.ok_or(BackendError::Unauthorized)?;
        if self.outage {
            return Err(BackendError::Server("service unavailable".to_string()));
        }
        Ok(user)
    }

    fn account_mut(&mut self, user_id: Uuid) -> BackendResult<&mut Account> {
        self.accounts
            .values_mut()
            .find(|account| account.profile.id == user_id)
            .ok_or(BackendError::Unauthorized)
    }

    fn open_session(&mut self, profile: UserProfile) -> Session {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(token.clone(), profile.id);
        self.current = Some(profile.id);
        Session { token, profile }
    }

    fn owned_mut(&mut self, id: Uuid) -> BackendResult<&mut Row> {
        let owner = self.user()?;
        self.rows
            .iter_mut()
            .find(|row| row.owner == owner && row.tx.id == id)
            .ok_or(BackendError::NotFound)
    }

    fn push(&mut self, owner: Uuid, draft: TransactionDraft) -> Transaction {
        let tx = Transaction {
            id: Uuid::new_v4(),
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        };
        self.rows.push(Row {
            owner,
            seq: self.next_seq,
            tx: tx.clone(),
        });
        self.next_seq += 1;
        tx
    }
}

fn validation(err: engine::EngineError) -> BackendError {
    BackendError::Validation(err.to_string())
}

fn normalize_email(email: &str) -> BackendResult<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(BackendError::Validation("invalid email".to_string())),
    }
}

fn required_name(name: &str) -> BackendResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BackendError::Validation("name is required".to_string()));
    }
    Ok(name.to_string())
}

impl Backend for MockBackend {
    async fn sign_in(&mut self, email: &str, password: &str) -> BackendResult<Session> {
        self.delay().await;
        let email = email.trim().to_lowercase();
        let profile = self
            .accounts
            .get(&email)
            .filter(|account| account.password == password)
            .map(|account| account.profile.clone())
            .ok_or(BackendError::Unauthorized)?;
        Ok(self.open_session(profile))
    }

    async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        self.delay().await;
        let name = required_name(name)?;
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BackendError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.accounts.contains_key(&email) {
            return Err(BackendError::Conflict(email));
        }

        let profile = UserProfile {
            id: Uuid::new_v4(),
            name,
            email: email.clone(),
            monthly_budget: MoneyCents::ZERO,
            selected_categories: Vec::new(),
            onboarding_complete: false,
        };
        self.accounts.insert(
            email,
            Account {
                password: password.to_string(),
                profile: profile.clone(),
            },
        );
        Ok(self.open_session(profile))
    }

    async fn sign_out(&mut self) -> BackendResult<()> {
        self.delay().await;
        if let Some(user_id) = self.current.take() {
            self.sessions.retain(|_, owner| *owner != user_id);
        }
        Ok(())
    }

    async fn restore(&mut self, token: &str) -> BackendResult<Session> {
        self.delay().await;
        let user_id = *self.sessions.get(token).ok_or(BackendError::Unauthorized)?;
        let profile = self.account_mut(user_id)?.profile.clone();
        self.current = Some(user_id);
        Ok(Session {
            token: token.to_string(),
            profile,
        })
    }

    async fn list(&mut self) -> BackendResult<Vec<Transaction>> {
        let owner = self.user()?;
        let mut owned: Vec<&Row> = self.rows.iter().filter(|row| row.owner == owner).collect();
        owned.sort_by(|a, b| b.tx.date.cmp(&a.tx.date).then(b.seq.cmp(&a.seq)));
        Ok(owned.into_iter().map(|row| row.tx.clone()).collect())
    }

    async fn get(&mut self, id: Uuid) -> BackendResult<Transaction> {
        Ok(self.owned_mut(id)?.tx.clone())
    }

    async fn insert(&mut self, draft: TransactionDraft) -> BackendResult<Transaction> {
        let owner = self.user()?;
        let draft = draft.validated().map_err(validation)?;
        Ok(self.push(owner, draft))
    }

    async fn update(&mut self, id: Uuid, patch: TransactionPatch) -> BackendResult<Transaction> {
        let row = self.owned_mut(id)?;
        if patch.is_empty() {
            return Ok(row.tx.clone());
        }
        row.tx = patch.apply(&row.tx).map_err(validation)?;
        Ok(row.tx.clone())
    }

    async fn delete(&mut self, id: Uuid) -> BackendResult<()> {
        let owner = self.user()?;
        let before = self.rows.len();
        self.rows.retain(|row| !(row.owner == owner && row.tx.id == id));
        if self.rows.len() == before {
            return Err(BackendError::NotFound);
        }
        Ok(())
    }

    async fn import(&mut self, drafts: Vec<TransactionDraft>) -> BackendResult<usize> {
        let owner = self.user()?;
        let drafts = drafts
            .into_iter()
            .map(TransactionDraft::validated)
            .collect::<Result<Vec<_>, _>>()
            .map_err(validation)?;
        let count = drafts.len();
        for draft in drafts {
            self.push(owner, draft);
        }
        Ok(count)
    }

    async fn clear(&mut self) -> BackendResult<u64> {
        let owner = self.user()?;
        let before = self.rows.len();
        self.rows.retain(|row| row.owner != owner);
        Ok((before - self.rows.len()) as u64)
    }

    async fn update_profile(&mut self, update: ProfileUpdate) -> BackendResult<UserProfile> {
        let user_id = self.user()?;
        let name = update.name.as_deref().map(required_name).transpose()?;
        if update.monthly_budget.is_some_and(MoneyCents::is_negative) {
            return Err(BackendError::Validation(
                "budget must not be negative".to_string(),
            ));
        }
        if update.monthly_budget.is_some_and(MoneyCents::exceeds_limit) {
            return Err(BackendError::Validation(format!(
                "budget must be at most {MAX_AMOUNT}"
            )));
        }

        let profile = &mut self.account_mut(user_id)?.profile;
        if let Some(name) = name {
            profile.name = name;
        }
        if let Some(budget) = update.monthly_budget {
            profile.monthly_budget = budget;
        }
        if let Some(ids) = update.selected_categories {
            profile.selected_categories = if ids.is_empty() {
                CATEGORIES.iter().map(|c| c.id.to_string()).collect()
            } else {
                ids
            };
        }
        if let Some(complete) = update.onboarding_complete {
            profile.onboarding_complete = complete;
        }
        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::TransactionKind;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn draft(d: u32, description: &str) -> TransactionDraft {
        TransactionDraft {
            kind: TransactionKind::Expense,
            amount: MoneyCents::from_major(100),
            category: "food".to_string(),
            description: description.to_string(),
            date: day(d),
        }
    }

    #[tokio::test]
    async fn demo_account_signs_in() {
        let mut backend = MockBackend::new(Duration::ZERO);
        let session = backend.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert!(session.profile.onboarding_complete);
        assert!(matches!(
            backend.sign_in(DEMO_EMAIL, "wrong").await,
            Err(BackendError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn calls_need_a_session() {
        let mut backend = MockBackend::new(Duration::ZERO);
        assert!(matches!(backend.list().await, Err(BackendError::Unauthorized)));

        let session = backend.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        backend.sign_out().await.unwrap();
        assert!(matches!(backend.list().await, Err(BackendError::Unauthorized)));
        assert!(matches!(
            backend.restore(&session.token).await,
            Err(BackendError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn sign_up_rules_match_the_server() {
        let mut backend = MockBackend::new(Duration::ZERO);
        assert!(matches!(
            backend.sign_up("Asha", "asha", "secret1").await,
            Err(BackendError::Validation(_))
        ));
        assert!(matches!(
            backend.sign_up("Asha", "asha@example.com", "12345").await,
            Err(BackendError::Validation(_))
        ));
        assert!(matches!(
            backend.sign_up("Demo", DEMO_EMAIL, "secret1").await,
            Err(BackendError::Conflict(_))
        ));

        let session = backend
            .sign_up(" Asha ", "Asha@Example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(session.profile.name, "Asha");
        assert_eq!(session.profile.email, "asha@example.com");
        assert!(!session.profile.onboarding_complete);
    }

    #[tokio::test]
    async fn list_is_newest_first_with_insert_order_ties() {
        let mut backend = MockBackend::new(Duration::ZERO);
        backend.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        backend.insert(draft(3, "a")).await.unwrap();
        backend.insert(draft(7, "b")).await.unwrap();
        backend.insert(draft(3, "c")).await.unwrap();

        let order: Vec<_> = backend
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|tx| tx.description)
            .collect();
        assert_eq!(order, ["b", "c", "a"]);
    }

    #[tokio::test]
    async fn rows_belong_to_their_owner() {
        let mut backend = MockBackend::new(Duration::ZERO);
        backend.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        let tx = backend.insert(draft(3, "mine")).await.unwrap();

        backend
            .sign_up("Other", "other@example.com", "secret1")
            .await
            .unwrap();
        assert!(backend.list().await.unwrap().is_empty());
        assert!(matches!(backend.get(tx.id).await, Err(BackendError::NotFound)));
        assert!(matches!(backend.delete(tx.id).await, Err(BackendError::NotFound)));
        assert_eq!(backend.clear().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn import_is_all_or_nothing() {
        let mut backend = MockBackend::new(Duration::ZERO);
        backend.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        let mut bad = draft(4, "bad");
        bad.amount = MoneyCents::ZERO;

        assert!(matches!(
            backend.import(vec![draft(3, "ok"), bad]).await,
            Err(BackendError::Validation(_))
        ));
        assert!(backend.list().await.unwrap().is_empty());
        assert_eq!(backend.import(vec![draft(3, "ok")]).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_category_selection_means_all() {
        let mut backend = MockBackend::new(Duration::ZERO);
        backend
            .sign_up("Asha", "asha@example.com", "secret1")
            .await
            .unwrap();
        let profile = backend
            .update_profile(ProfileUpdate::default().selected_categories(Vec::new()))
            .await
            .unwrap();
        assert_eq!(profile.selected_categories.len(), CATEGORIES.len());

        assert!(matches!(
            backend
                .update_profile(ProfileUpdate::default().monthly_budget(MoneyCents::new(-1)))
                .await,
            Err(BackendError::Validation(_))
        ));
    }
}
