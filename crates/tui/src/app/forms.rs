//! Input state of every screen, plus the checks run before anything is
//! sent to the backend.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use engine::{
    CATEGORIES, MIN_PASSWORD_LEN, MoneyCents, ProfileUpdate, Transaction, TransactionDraft,
    TransactionFilter, TransactionKind, UserProfile,
};
use uuid::Uuid;

/// Quick picks on the onboarding budget step, in rupees.
pub const BUDGET_SUGGESTIONS: [i64; 3] = [20_000, 35_000, 50_000];

const TOAST_TTL: Duration = Duration::from_secs(3);
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_TTL
    }
}

/// Cycles `focus` through `order`, forwards or backwards.
fn cycle<T: Copy + PartialEq>(order: &[T], focus: T, forward: bool) -> T {
    let at = order.iter().position(|f| *f == focus).unwrap_or(0);
    let len = order.len();
    let next = if forward { (at + 1) % len } else { (at + len - 1) % len };
    order[next]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub message: Option<String>,
}

impl LoginForm {
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn move_focus(&mut self, forward: bool) {
        self.focus = cycle(&[LoginField::Email, LoginField::Password], self.focus, forward);
    }

    pub fn credentials(&self) -> Result<(String, String), &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Please fill in all fields");
        }
        Ok((email.to_string(), self.password.clone()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignupField {
    #[default]
    Name,
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: SignupField,
    pub message: Option<String>,
}

impl SignupForm {
    const ORDER: [SignupField; 3] = [SignupField::Name, SignupField::Email, SignupField::Password];

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            SignupField::Name => &mut self.name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
        }
    }

    pub fn move_focus(&mut self, forward: bool) {
        self.focus = cycle(&Self::ORDER, self.focus, forward);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty()
        {
            return Err("Please fill in all fields".to_string());
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ForgotForm {
    pub email: String,
    pub message: Option<String>,
    /// The simulated reset mail went out.
    pub sent: bool,
}

impl ForgotForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("Please enter your email");
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct OnboardingForm {
    pub budget: String,
    pub message: Option<String>,
    /// Highlighted row on the categories step.
    pub cursor: usize,
    pub selected: Vec<&'static str>,
    suggestion: Option<usize>,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            budget: String::new(),
            message: None,
            cursor: 0,
            selected: CATEGORIES.iter().map(|c| c.id).collect(),
            suggestion: None,
        }
    }
}

impl OnboardingForm {
    pub fn budget(&self) -> Result<MoneyCents, &'static str> {
        match self.budget.parse::<MoneyCents>() {
            Ok(amount) if amount.is_positive() => Ok(amount),
            _ => Err("Please enter a valid budget amount"),
        }
    }

    /// Fills the budget with the next quick pick.
    pub fn next_suggestion(&mut self) {
        let next = self
            .suggestion
            .map_or(0, |at| (at + 1) % BUDGET_SUGGESTIONS.len());
        self.suggestion = Some(next);
        self.budget = BUDGET_SUGGESTIONS[next].to_string();
    }

    pub fn move_cursor(&mut self, down: bool) {
        let last = CATEGORIES.len() - 1;
        self.cursor = if down {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    pub fn toggle(&mut self) {
        let Some(category) = CATEGORIES.get(self.cursor) else {
            return;
        };
        if let Some(at) = self.selected.iter().position(|id| *id == category.id) {
            self.selected.remove(at);
        } else {
            self.selected.push(category.id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in category order.
    pub fn selected_ids(&self) -> Vec<String> {
        CATEGORIES
            .iter()
            .filter(|c| self.is_selected(c.id))
            .map(|c| c.id.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryField {
    Kind,
    #[default]
    Amount,
    Category,
    Description,
    Date,
}

/// The add/edit transaction form.
#[derive(Debug, Clone)]
pub struct EntryForm {
    /// `Some` when editing an existing record.
    pub editing: Option<Uuid>,
    pub kind: TransactionKind,
    pub amount: String,
    /// Index into [`CATEGORIES`].
    pub category: Option<usize>,
    pub description: String,
    pub date: String,
    pub focus: EntryField,
    pub message: Option<String>,
}

impl EntryForm {
    const ORDER: [EntryField; 5] = [
        EntryField::Kind,
        EntryField::Amount,
        EntryField::Category,
        EntryField::Description,
        EntryField::Date,
    ];

    pub fn new(today: NaiveDate) -> Self {
        Self {
            editing: None,
            kind: TransactionKind::Expense,
            amount: String::new(),
            category: None,
            description: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            focus: EntryField::Amount,
            message: None,
        }
    }

    pub fn edit(tx: &Transaction) -> Self {
        Self {
            editing: Some(tx.id),
            kind: tx.kind,
            amount: tx.amount.major_string(),
            category: CATEGORIES.iter().position(|c| c.id == tx.category),
            description: tx.description.clone(),
            date: tx.date.format(DATE_FORMAT).to_string(),
            focus: EntryField::Amount,
            message: None,
        }
    }

    pub fn move_focus(&mut self, forward: bool) {
        self.focus = cycle(&Self::ORDER, self.focus, forward);
    }

    /// The text field under focus; `None` for the pickers.
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            EntryField::Amount => Some(&mut self.amount),
            EntryField::Description => Some(&mut self.description),
            EntryField::Date => Some(&mut self.date),
            EntryField::Kind | EntryField::Category => None,
        }
    }

    /// Left/right on a picker.
    pub fn step(&mut self, forward: bool) {
        match self.focus {
            EntryField::Kind => {
                self.kind = match self.kind {
                    TransactionKind::Expense => TransactionKind::Income,
                    TransactionKind::Income => TransactionKind::Expense,
                };
            }
            EntryField::Category => {
                let len = CATEGORIES.len();
                self.category = Some(match self.category {
                    None if forward => 0,
                    None => len - 1,
                    Some(at) if forward => (at + 1) % len,
                    Some(at) => (at + len - 1) % len,
                });
            }
            _ => {}
        }
    }

    pub fn draft(&self) -> Result<TransactionDraft, &'static str> {
        let amount = match self.amount.parse::<MoneyCents>() {
            Ok(amount) if amount.is_positive() => amount,
            _ => return Err("Please enter a valid amount"),
        };
        let category = self
            .category
            .and_then(|at| CATEGORIES.get(at))
            .ok_or("Please select a category")?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Please enter a description");
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| "Please enter a valid date")?;

        Ok(TransactionDraft {
            kind: self.kind,
            amount,
            category: category.id.to_string(),
            description: description.to_string(),
            date,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpensesMode {
    #[default]
    List,
    Search,
    Entry,
    ConfirmDelete,
}

#[derive(Debug)]
pub struct ExpensesState {
    pub mode: ExpensesMode,
    pub filter: TransactionFilter,
    pub selected: usize,
    pub entry: EntryForm,
}

impl ExpensesState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: ExpensesMode::List,
            filter: TransactionFilter::default(),
            selected: 0,
            entry: EntryForm::new(today),
        }
    }

    /// None, then each category in order, then None again.
    pub fn cycle_category(&mut self) {
        let at = self
            .filter
            .category
            .as_deref()
            .and_then(|id| CATEGORIES.iter().position(|c| c.id == id));
        self.filter.category = match at {
            None => CATEGORIES.first().map(|c| c.id.to_string()),
            Some(at) => CATEGORIES.get(at + 1).map(|c| c.id.to_string()),
        };
        self.selected = 0;
    }

    pub fn cycle_kind(&mut self) {
        self.filter.kind = match self.filter.kind {
            None => Some(TransactionKind::Expense),
            Some(TransactionKind::Expense) => Some(TransactionKind::Income),
            Some(TransactionKind::Income) => None,
        };
        self.selected = 0;
    }

    pub fn reset_filters(&mut self) {
        self.filter = TransactionFilter::default();
        self.selected = 0;
    }

    pub fn move_selection(&mut self, down: bool, visible: usize) {
        if visible == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if down {
            (self.selected + 1).min(visible - 1)
        } else {
            self.selected.saturating_sub(1).min(visible - 1)
        };
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsField {
    #[default]
    Name,
    Budget,
}

#[derive(Debug, Default)]
pub struct SettingsForm {
    pub name: String,
    pub budget: String,
    /// `Some` while the profile fields are being edited.
    pub editing: Option<SettingsField>,
    pub confirm_clear: bool,
}

impl SettingsForm {
    pub fn load(&mut self, profile: &UserProfile) {
        self.name = profile.name.clone();
        self.budget = profile.monthly_budget.major_string();
    }

    pub fn field_mut(&mut self) -> Option<&mut String> {
        match self.editing? {
            SettingsField::Name => Some(&mut self.name),
            SettingsField::Budget => Some(&mut self.budget),
        }
    }

    pub fn move_focus(&mut self) {
        self.editing = self.editing.map(|field| match field {
            SettingsField::Name => SettingsField::Budget,
            SettingsField::Budget => SettingsField::Name,
        });
    }

    pub fn update(&self) -> Result<ProfileUpdate, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required");
        }
        let budget = match self.budget.parse::<MoneyCents>() {
            Ok(amount) if !amount.is_negative() => amount,
            _ => return Err("Please enter a valid budget"),
        };
        Ok(ProfileUpdate::default().name(name).monthly_budget(budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn login_needs_both_fields() {
        let mut form = LoginForm {
            email: "demo@financeflow.com".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(form.credentials(), Err("Please fill in all fields"));
        form.move_focus(true);
        form.field_mut().push_str("demo123");
        assert_eq!(
            form.credentials(),
            Ok(("demo@financeflow.com".to_string(), "demo123".to_string()))
        );
    }

    #[test]
    fn signup_checks_email_and_password_length() {
        let mut form = SignupForm {
            name: "Asha".to_string(),
            email: "asha".to_string(),
            password: "12345".to_string(),
            ..SignupForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid email");
        form.email = "asha@example.com".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Password must be at least 6 characters"
        );
        form.password.push('6');
        assert!(form.validate().is_ok());
    }

    #[test]
    fn onboarding_budget_must_be_positive() {
        let mut form = OnboardingForm::default();
        assert_eq!(form.budget(), Err("Please enter a valid budget amount"));
        form.budget = "0".to_string();
        assert!(form.budget().is_err());
        form.next_suggestion();
        assert_eq!(form.budget(), Ok(MoneyCents::from_major(20_000)));
        form.next_suggestion();
        form.next_suggestion();
        form.next_suggestion();
        assert_eq!(form.budget, "20000");
    }

    #[test]
    fn category_toggle_keeps_enumeration_order() {
        let mut form = OnboardingForm::default();
        assert_eq!(form.selected_ids().len(), CATEGORIES.len());

        form.toggle();
        assert!(!form.is_selected("food"));
        form.move_cursor(true);
        form.toggle();
        assert!(form.selected_ids().iter().all(|id| id != "transport"));

        form.move_cursor(false);
        form.toggle();
        assert_eq!(form.selected_ids()[0], "food");
    }

    #[test]
    fn entry_form_messages_follow_field_order() {
        let mut form = EntryForm::new(today());
        assert_eq!(form.draft(), Err("Please enter a valid amount"));
        form.amount = "-5".to_string();
        assert_eq!(form.draft(), Err("Please enter a valid amount"));
        form.amount = "45.50".to_string();
        assert_eq!(form.draft(), Err("Please select a category"));
        form.focus = EntryField::Category;
        form.step(true);
        assert_eq!(form.draft(), Err("Please enter a description"));
        form.description = "  Lunch ".to_string();

        let draft = form.draft().unwrap();
        assert_eq!(draft.amount, MoneyCents::new(4_550));
        assert_eq!(draft.category, "food");
        assert_eq!(draft.description, "Lunch");
        assert_eq!(draft.date, today());
    }

    #[test]
    fn editing_prefills_from_the_transaction() {
        let tx = Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Income,
            amount: MoneyCents::from_major(1_200),
            category: "savings".to_string(),
            description: "Bonus".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        };
        let form = EntryForm::edit(&tx);
        assert_eq!(form.editing, Some(tx.id));
        assert_eq!(form.amount, "1200");
        assert_eq!(form.date, "2026-09-30");
        assert_eq!(form.draft().unwrap(), tx.draft());
    }

    #[test]
    fn category_filter_cycles_back_to_all() {
        let mut state = ExpensesState::new(today());
        state.cycle_category();
        assert_eq!(state.filter.category.as_deref(), Some("food"));
        for _ in 1..CATEGORIES.len() {
            state.cycle_category();
        }
        assert_eq!(state.filter.category.as_deref(), Some("other"));
        state.cycle_category();
        assert!(state.filter.category.is_none());
    }

    #[test]
    fn settings_validation() {
        let mut form = SettingsForm {
            name: " ".to_string(),
            budget: "100".to_string(),
            ..SettingsForm::default()
        };
        assert_eq!(form.update().unwrap_err(), "Name is required");
        form.name = "Asha".to_string();
        form.budget = "-1".to_string();
        assert_eq!(form.update().unwrap_err(), "Please enter a valid budget");
        form.budget = "0".to_string();
        let update = form.update().unwrap();
        assert_eq!(update.monthly_budget, Some(MoneyCents::ZERO));
        assert_eq!(update.name.as_deref(), Some("Asha"));
    }
}
