use std::{
    fs::{self, File},
    io::BufWriter,
    path::PathBuf,
    time::{Duration, Instant},
};

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use crossterm::event::{self, Event};
use engine::{
    MoneyCents, ProfileUpdate, Transaction, TransactionDraft, TransactionPatch, export,
};
use rand::{SeedableRng, rngs::StdRng};
use uuid::Uuid;

use crate::{
    backend::{
        AnyBackend, BackendError, DEMO_EMAIL, DEMO_PASSWORD, HttpBackend, MockBackend,
    },
    config::{self, AppConfig},
    error::{AppError, Result},
    local_state::{LocalState, ThemeMode},
    session::{Action, Screen, Session},
    store::Store,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

mod forms;

pub use forms::{
    BUDGET_SUGGESTIONS, EntryField, EntryForm, ExpensesMode, ExpensesState, ForgotForm,
    LoginField, LoginForm, OnboardingForm, SettingsField, SettingsForm, SignupField,
    SignupForm, Toast, ToastLevel,
};

const TICK_RATE: Duration = Duration::from_millis(200);

/// Everything the screens draw besides the transaction list.
#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub today: NaiveDate,
    pub theme: ThemeMode,
    pub toast: Option<Toast>,
    /// Label of the backend call in flight.
    pub pending: Option<&'static str>,
    /// Running against the in-memory backend.
    pub offline: bool,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub forgot: ForgotForm,
    pub onboarding: OnboardingForm,
    pub expenses: ExpensesState,
    pub settings: SettingsForm,
}

impl AppState {
    /// Letters typed now land in a text field rather than act as shortcuts.
    pub fn is_typing(&self) -> bool {
        match self.session.screen() {
            Screen::Login | Screen::Signup | Screen::ForgotPassword => true,
            Screen::OnboardingBudget => true,
            Screen::Expenses => matches!(
                self.expenses.mode,
                ExpensesMode::Search | ExpensesMode::Entry
            ),
            Screen::Settings => self.settings.editing.is_some(),
            _ => false,
        }
    }
}

/// Work that needs the backend. Produced by key handling, run by
/// [`App::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SignIn { email: String, password: String },
    SignUp { name: String, email: String, password: String },
    Restore(String),
    ResetPassword,
    CompleteOnboarding { budget: MoneyCents, categories: Vec<String> },
    Refresh,
    SaveEntry { editing: Option<Uuid>, draft: TransactionDraft },
    Delete(Uuid),
    SaveProfile(ProfileUpdate),
    ClearData,
    SignOut,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn { .. } => "Signing in...",
            Self::SignUp { .. } => "Creating account...",
            Self::Restore(_) => "Restoring session...",
            Self::ResetPassword => "Sending reset link...",
            Self::CompleteOnboarding { .. } => "Setting up your account...",
            Self::Refresh => "Refreshing...",
            Self::SaveEntry { .. } => "Saving...",
            Self::Delete(_) => "Deleting...",
            Self::SaveProfile(_) => "Saving profile...",
            Self::ClearData => "Clearing data...",
            Self::SignOut => "Signing out...",
        }
    }
}

pub struct App {
    config: AppConfig,
    tz: Tz,
    store: Store<AnyBackend>,
    local: LocalState,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let backend = if config.mock {
            AnyBackend::Mock(MockBackend::new(config.mock_latency()))
        } else {
            AnyBackend::Http(HttpBackend::new(&config.base_url)?)
        };
        let local = LocalState::load(&config.state_path)?;
        Self::with_backend(config, backend, local)
    }

    pub fn with_backend(config: AppConfig, backend: AnyBackend, local: LocalState) -> Result<Self> {
        let tz = config.tz()?;
        let today = config::today(tz);
        let email = local
            .last_email
            .clone()
            .unwrap_or_else(|| config.email.clone());
        let state = AppState {
            session: Session::new(),
            today,
            theme: local.theme,
            toast: None,
            pending: None,
            offline: matches!(backend, AnyBackend::Mock(_)),
            login: LoginForm {
                email,
                ..LoginForm::default()
            },
            signup: SignupForm::default(),
            forgot: ForgotForm::default(),
            onboarding: OnboardingForm::default(),
            expenses: ExpensesState::new(today),
            settings: SettingsForm::default(),
        };

        Ok(Self {
            config,
            tz,
            store: Store::new(backend),
            local,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::AppTerminal) -> Result<()> {
        if let Some(token) = self.local.session_token.clone() {
            self.run_command(terminal, Command::Restore(token)).await?;
        }

        while !self.should_quit {
            self.tick(Instant::now());
            self.draw(terminal)?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(command) = self.handle_key(map_key(key)) {
                        self.run_command(terminal, command).await?;
                    }
                }
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut ui::AppTerminal) -> Result<()> {
        terminal
            .draw(|frame| ui::render(frame, &self.state, self.store.ledger()))
            .map_err(|err| AppError::Terminal(err.to_string()))?;
        Ok(())
    }

    /// Shows the pending label while `command` runs, then drops keys typed
    /// in the meantime.
    async fn run_command(&mut self, terminal: &mut ui::AppTerminal, command: Command) -> Result<()> {
        self.state.pending = Some(command.label());
        self.draw(terminal)?;
        let result = self.execute(command).await;
        self.state.pending = None;
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        result
    }

    fn tick(&mut self, now: Instant) {
        self.state.today = config::today(self.tz);
        if self.state.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.state.toast = None;
        }
    }

    pub fn handle_key(&mut self, action: AppAction) -> Option<Command> {
        if action == AppAction::Quit {
            self.should_quit = true;
            return None;
        }
        if action == AppAction::Ctrl('l') && self.state.session.user().is_some() {
            return Some(Command::SignOut);
        }

        match self.state.session.screen() {
            Screen::Login => self.login_key(action),
            Screen::Signup => self.signup_key(action),
            Screen::ForgotPassword => self.forgot_key(action),
            Screen::OnboardingWelcome => self.welcome_key(action),
            Screen::OnboardingBudget => self.budget_key(action),
            Screen::OnboardingCategories => self.categories_key(action),
            Screen::Dashboard | Screen::Analytics => self.main_key(action),
            Screen::Expenses => self.expenses_key(action),
            Screen::Settings => self.settings_key(action),
        }
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(err) = self.state.session.apply(action) {
            tracing::debug!("{err}");
        }
    }

    fn navigate(&mut self, target: Screen) {
        self.dispatch(Action::Navigate(target));
        match self.state.session.screen() {
            Screen::Settings => {
                if let Some(profile) = self.state.session.user() {
                    self.state.settings.load(profile);
                }
            }
            Screen::Login => self.state.login.message = None,
            Screen::Signup => self.state.signup.message = None,
            Screen::ForgotPassword => self.state.forgot = ForgotForm::default(),
            _ => {}
        }
    }

    fn login_key(&mut self, action: AppAction) -> Option<Command> {
        let form = &mut self.state.login;
        match action {
            AppAction::Input(_) | AppAction::Backspace => edit(form.field_mut(), action),
            AppAction::NextField | AppAction::Down => form.move_focus(true),
            AppAction::PrevField | AppAction::Up => form.move_focus(false),
            AppAction::Submit => match form.credentials() {
                Ok((email, password)) => {
                    form.message = None;
                    return Some(Command::SignIn { email, password });
                }
                Err(message) => form.message = Some(message.to_string()),
            },
            AppAction::Ctrl('d') => {
                form.email = DEMO_EMAIL.to_string();
                form.password = DEMO_PASSWORD.to_string();
                form.message = None;
                return Some(Command::SignIn {
                    email: DEMO_EMAIL.to_string(),
                    password: DEMO_PASSWORD.to_string(),
                });
            }
            AppAction::Ctrl('n') => self.navigate(Screen::Signup),
            AppAction::Ctrl('f') => self.navigate(Screen::ForgotPassword),
            _ => {}
        }
        None
    }

    fn signup_key(&mut self, action: AppAction) -> Option<Command> {
        let form = &mut self.state.signup;
        match action {
            AppAction::Input(_) | AppAction::Backspace => edit(form.field_mut(), action),
            AppAction::NextField | AppAction::Down => form.move_focus(true),
            AppAction::PrevField | AppAction::Up => form.move_focus(false),
            AppAction::Submit => match form.validate() {
                Ok(()) => {
                    form.message = None;
                    return Some(Command::SignUp {
                        name: form.name.trim().to_string(),
                        email: form.email.trim().to_string(),
                        password: form.password.clone(),
                    });
                }
                Err(message) => form.message = Some(message),
            },
            AppAction::Cancel => self.navigate(Screen::Login),
            _ => {}
        }
        None
    }

    fn forgot_key(&mut self, action: AppAction) -> Option<Command> {
        let form = &mut self.state.forgot;
        match action {
            AppAction::Input(_) | AppAction::Backspace if !form.sent => edit(&mut form.email, action),
            AppAction::Submit if form.sent => self.navigate(Screen::Login),
            AppAction::Submit => match form.validate() {
                Ok(()) => {
                    form.message = None;
                    return Some(Command::ResetPassword);
                }
                Err(message) => form.message = Some(message.to_string()),
            },
            AppAction::Cancel => self.navigate(Screen::Login),
            _ => {}
        }
        None
    }

    fn welcome_key(&mut self, action: AppAction) -> Option<Command> {
        if matches!(action, AppAction::Submit | AppAction::Right) {
            self.dispatch(Action::OnboardingNext);
        }
        None
    }

    fn budget_key(&mut self, action: AppAction) -> Option<Command> {
        let form = &mut self.state.onboarding;
        match action {
            AppAction::Input(ch) if ch.is_ascii_digit() || ch == '.' || ch == ',' => {
                form.budget.push(ch);
            }
            AppAction::Backspace => {
                form.budget.pop();
            }
            AppAction::NextField => form.next_suggestion(),
            AppAction::Submit => match form.budget() {
                Ok(_) => {
                    form.message = None;
                    self.dispatch(Action::OnboardingNext);
                }
                Err(message) => form.message = Some(message.to_string()),
            },
            AppAction::Cancel | AppAction::Left => self.dispatch(Action::OnboardingBack),
            _ => {}
        }
        None
    }

    fn categories_key(&mut self, action: AppAction) -> Option<Command> {
        let form = &mut self.state.onboarding;
        match action {
            AppAction::Up => form.move_cursor(false),
            AppAction::Down => form.move_cursor(true),
            AppAction::Input(' ') => form.toggle(),
            AppAction::Submit => match form.budget() {
                Ok(budget) => {
                    return Some(Command::CompleteOnboarding {
                        budget,
                        categories: form.selected_ids(),
                    });
                }
                Err(message) => {
                    form.message = Some(message.to_string());
                    self.dispatch(Action::OnboardingBack);
                }
            },
            AppAction::Cancel | AppAction::Left => self.dispatch(Action::OnboardingBack),
            _ => {}
        }
        None
    }

    /// Shortcuts shared by the main screens.
    fn main_key(&mut self, action: AppAction) -> Option<Command> {
        match action {
            AppAction::Input('d') => self.navigate(Screen::Dashboard),
            AppAction::Input('e') => self.navigate(Screen::Expenses),
            AppAction::Input('a') => self.navigate(Screen::Analytics),
            AppAction::Input('s') => self.navigate(Screen::Settings),
            AppAction::Input('n') => {
                self.navigate(Screen::Expenses);
                if self.state.session.screen() == Screen::Expenses {
                    self.state.expenses.entry = EntryForm::new(self.state.today);
                    self.state.expenses.mode = ExpensesMode::Entry;
                }
            }
            AppAction::Input('r') => return Some(Command::Refresh),
            AppAction::Input('q') => self.should_quit = true,
            _ => {}
        }
        None
    }

    fn visible_count(&self) -> usize {
        self.store.ledger().filtered(&self.state.expenses.filter).len()
    }

    fn selected_transaction(&self) -> Option<Transaction> {
        self.store
            .ledger()
            .filtered(&self.state.expenses.filter)
            .get(self.state.expenses.selected)
            .map(|tx| (*tx).clone())
    }

    fn expenses_key(&mut self, action: AppAction) -> Option<Command> {
        match self.state.expenses.mode {
            ExpensesMode::List => self.expense_list_key(action),
            ExpensesMode::Search => {
                let expenses = &mut self.state.expenses;
                match action {
                    AppAction::Input(_) | AppAction::Backspace => {
                        edit(&mut expenses.filter.search, action);
                        expenses.selected = 0;
                    }
                    AppAction::Submit | AppAction::Cancel => expenses.mode = ExpensesMode::List,
                    _ => {}
                }
                None
            }
            ExpensesMode::Entry => self.entry_key(action),
            ExpensesMode::ConfirmDelete => {
                match action {
                    AppAction::Input('y') | AppAction::Submit => {
                        self.state.expenses.mode = ExpensesMode::List;
                        return self.selected_transaction().map(|tx| Command::Delete(tx.id));
                    }
                    AppAction::Input('n') | AppAction::Cancel => {
                        self.state.expenses.mode = ExpensesMode::List;
                    }
                    _ => {}
                }
                None
            }
        }
    }

    fn expense_list_key(&mut self, action: AppAction) -> Option<Command> {
        let visible = self.visible_count();
        match action {
            AppAction::Up => self.state.expenses.move_selection(false, visible),
            AppAction::Down => self.state.expenses.move_selection(true, visible),
            AppAction::Input('/') => self.state.expenses.mode = ExpensesMode::Search,
            AppAction::Input('c') => self.state.expenses.cycle_category(),
            AppAction::Input('t') => self.state.expenses.cycle_kind(),
            AppAction::Input('f') => self.state.expenses.reset_filters(),
            AppAction::Input('x') if visible > 0 => {
                self.state.expenses.mode = ExpensesMode::ConfirmDelete;
            }
            AppAction::Input('v') => self.export_csv(),
            AppAction::Submit => {
                if let Some(tx) = self.selected_transaction() {
                    self.state.expenses.entry = EntryForm::edit(&tx);
                    self.state.expenses.mode = ExpensesMode::Entry;
                }
            }
            _ => return self.main_key(action),
        }
        None
    }

    fn entry_key(&mut self, action: AppAction) -> Option<Command> {
        let entry = &mut self.state.expenses.entry;
        match action {
            AppAction::Cancel => self.state.expenses.mode = ExpensesMode::List,
            AppAction::NextField | AppAction::Down => entry.move_focus(true),
            AppAction::PrevField | AppAction::Up => entry.move_focus(false),
            AppAction::Left => entry.step(false),
            AppAction::Right => entry.step(true),
            AppAction::Input(' ')
                if matches!(entry.focus, EntryField::Kind | EntryField::Category) =>
            {
                entry.step(true);
            }
            AppAction::Input(_) | AppAction::Backspace => {
                if let Some(field) = entry.text_mut() {
                    edit(field, action);
                }
            }
            AppAction::Submit => match entry.draft() {
                Ok(draft) => {
                    entry.message = None;
                    return Some(Command::SaveEntry {
                        editing: entry.editing,
                        draft,
                    });
                }
                Err(message) => entry.message = Some(message.to_string()),
            },
            _ => {}
        }
        None
    }

    fn settings_key(&mut self, action: AppAction) -> Option<Command> {
        if self.state.settings.editing.is_some() {
            let form = &mut self.state.settings;
            match action {
                AppAction::Cancel => {
                    form.editing = None;
                    if let Some(profile) = self.state.session.user() {
                        form.load(profile);
                    }
                }
                AppAction::NextField | AppAction::PrevField | AppAction::Up | AppAction::Down => {
                    form.move_focus();
                }
                AppAction::Input(_) | AppAction::Backspace => {
                    if let Some(field) = form.field_mut() {
                        edit(field, action);
                    }
                }
                AppAction::Submit => match form.update() {
                    Ok(update) => return Some(Command::SaveProfile(update)),
                    Err(message) => self.state.toast = Some(Toast::error(message)),
                },
                _ => {}
            }
            return None;
        }

        if self.state.settings.confirm_clear {
            match action {
                AppAction::Input('y') | AppAction::Submit => {
                    self.state.settings.confirm_clear = false;
                    return Some(Command::ClearData);
                }
                AppAction::Input('n') | AppAction::Cancel => {
                    self.state.settings.confirm_clear = false;
                }
                _ => {}
            }
            return None;
        }

        match action {
            AppAction::Submit => self.state.settings.editing = Some(SettingsField::Name),
            AppAction::Input('t') => self.toggle_theme(),
            AppAction::Input('j') => self.export_json(),
            AppAction::Input('x') => self.state.settings.confirm_clear = true,
            AppAction::Input('o') => return Some(Command::SignOut),
            _ => return self.main_key(action),
        }
        None
    }

    pub async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SignIn { email, password } => {
                match self.store.sign_in(&email, &password).await {
                    Ok(session) => {
                        self.signed_in(session);
                        self.load_ledger().await;
                    }
                    Err(BackendError::Unauthorized) => {
                        self.state.login.message = Some("Invalid credentials".to_string());
                    }
                    Err(err) => self.state.login.message = Some(describe(&err)),
                }
            }
            Command::SignUp {
                name,
                email,
                password,
            } => match self.store.sign_up(&name, &email, &password).await {
                Ok(session) => self.signed_in(session),
                Err(BackendError::Conflict(_)) => {
                    self.state.signup.message =
                        Some("An account with this email already exists".to_string());
                }
                Err(err) => self.state.signup.message = Some(describe(&err)),
            },
            Command::Restore(token) => match self.store.restore(&token).await {
                Ok(session) => {
                    self.signed_in(session);
                    self.load_ledger().await;
                }
                Err(err) => {
                    tracing::info!("stored session not restored: {err}");
                    self.local.forget_session();
                    self.save_local();
                }
            },
            Command::ResetPassword => {
                tokio::time::sleep(self.config.mock_latency()).await;
                self.state.forgot.sent = true;
                self.state.forgot.message =
                    Some("Check your email for reset instructions".to_string());
            }
            Command::CompleteOnboarding { budget, categories } => {
                let mut rng = StdRng::from_entropy();
                let today = self.state.today;
                match self
                    .store
                    .complete_onboarding(budget, categories, today, &mut rng)
                    .await
                {
                    Ok(profile) => {
                        self.state.settings.load(&profile);
                        self.dispatch(Action::OnboardingCompleted(profile));
                    }
                    Err(err) => self.fail(err),
                }
            }
            Command::Refresh => match self.store.refresh().await {
                Ok(()) => self.state.toast = Some(Toast::new(ToastLevel::Info, "Up to date")),
                Err(err) => self.fail(err),
            },
            Command::SaveEntry { editing, draft } => {
                let (result, done) = match editing {
                    None => (self.store.add(draft).await, "Transaction added successfully"),
                    Some(id) => (
                        self.store.update(id, full_patch(draft)).await,
                        "Transaction updated successfully",
                    ),
                };
                match result {
                    Ok(_) => {
                        self.state.expenses.mode = ExpensesMode::List;
                        self.state.toast = Some(Toast::success(done));
                    }
                    Err(BackendError::Validation(message)) => {
                        self.state.expenses.entry.message = Some(message);
                    }
                    Err(err) => self.fail(err),
                }
            }
            Command::Delete(id) => match self.store.delete(id).await {
                Ok(()) => {
                    let last = self.visible_count().saturating_sub(1);
                    self.state.expenses.selected = self.state.expenses.selected.min(last);
                    self.state.toast = Some(Toast::success("Transaction deleted"));
                }
                Err(err) => self.fail(err),
            },
            Command::SaveProfile(update) => match self.store.update_profile(update).await {
                Ok(profile) => {
                    self.state.settings.editing = None;
                    self.state.settings.load(&profile);
                    self.dispatch(Action::ProfileUpdated(profile));
                    self.state.toast = Some(Toast::success("Profile updated successfully"));
                }
                Err(err) => self.fail(err),
            },
            Command::ClearData => match self.store.clear_all().await {
                Ok(removed) => {
                    self.state.expenses.selected = 0;
                    self.state.toast =
                        Some(Toast::success(format!("Cleared {removed} transactions")));
                }
                Err(err) => self.fail(err),
            },
            Command::SignOut => {
                if let Err(err) = self.store.sign_out().await {
                    tracing::warn!("sign out failed on the backend: {err}");
                }
                self.signed_out();
            }
        }
        Ok(())
    }

    fn signed_in(&mut self, session: engine::Session) {
        tracing::info!(user = %session.profile.id, "signed in");
        self.local
            .remember_session(&session.profile.email, &session.token);

        let today = self.state.today;
        self.state.login.password.clear();
        self.state.login.message = None;
        self.state.signup = SignupForm::default();
        self.state.onboarding = OnboardingForm::default();
        self.state.expenses = ExpensesState::new(today);
        self.state.settings = SettingsForm::default();
        self.state.settings.load(&session.profile);
        self.dispatch(Action::Authenticated(session.profile));
        self.save_local();
    }

    /// First fetch after a session is adopted. A failure keeps the session
    /// and is reported like any other backend error.
    async fn load_ledger(&mut self) {
        if let Err(err) = self.store.refresh().await {
            self.fail(err);
        }
    }

    fn signed_out(&mut self) {
        self.store.forget();
        self.local.forget_session();

        let today = self.state.today;
        self.state.login = LoginForm {
            email: self.local.last_email.clone().unwrap_or_default(),
            ..LoginForm::default()
        };
        self.state.signup = SignupForm::default();
        self.state.onboarding = OnboardingForm::default();
        self.state.expenses = ExpensesState::new(today);
        self.state.settings = SettingsForm::default();
        self.dispatch(Action::SignedOut);
        self.save_local();
    }

    /// Surfaces a failed backend call. An invalidated session signs out.
    fn fail(&mut self, err: BackendError) {
        if matches!(err, BackendError::Unauthorized) && self.state.session.user().is_some() {
            self.signed_out();
            self.state.toast = Some(Toast::error("Session expired, please sign in again"));
            return;
        }
        self.state.toast = Some(Toast::error(describe(&err)));
    }

    /// Local state is a convenience; losing a write never blocks the UI.
    fn save_local(&self) {
        if let Err(err) = self.local.save(&self.config.state_path) {
            tracing::warn!(path = %self.config.state_path, "local state not saved: {err}");
        }
    }

    fn toggle_theme(&mut self) {
        self.local.theme = self.local.theme.toggled();
        self.state.theme = self.local.theme;
        self.save_local();
    }

    fn export_path(&self, file_name: &str) -> Result<PathBuf> {
        let dir = PathBuf::from(&self.config.export_dir);
        fs::create_dir_all(&dir)?;
        Ok(dir.join(file_name))
    }

    fn export_csv(&mut self) {
        let rows: Vec<Transaction> = self
            .store
            .ledger()
            .filtered(&self.state.expenses.filter)
            .into_iter()
            .cloned()
            .collect();
        let result = self
            .export_path(&export::csv_file_name(self.state.today))
            .and_then(|path| {
                export::write_csv(BufWriter::new(File::create(&path)?), &rows)?;
                Ok(path)
            });
        self.report_export(result, "Exported to CSV");
    }

    fn export_json(&mut self) {
        let result = self
            .export_path(&export::json_file_name(self.state.today))
            .and_then(|path| {
                export::write_json(
                    BufWriter::new(File::create(&path)?),
                    self.state.session.user(),
                    self.store.ledger().transactions(),
                    Utc::now(),
                )?;
                Ok(path)
            });
        self.report_export(result, "Data exported successfully");
    }

    fn report_export(&mut self, result: Result<PathBuf>, done: &str) {
        self.state.toast = Some(match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "export written");
                Toast::success(done)
            }
            Err(err) => Toast::error(format!("Export failed: {err}")),
        });
    }
}

/// Applies typing keys to a text field.
fn edit(field: &mut String, action: AppAction) {
    match action {
        AppAction::Input(ch) => field.push(ch),
        AppAction::Backspace => {
            field.pop();
        }
        _ => {}
    }
}

fn full_patch(draft: TransactionDraft) -> TransactionPatch {
    TransactionPatch {
        kind: Some(draft.kind),
        amount: Some(draft.amount),
        category: Some(draft.category),
        description: Some(draft.description),
        date: Some(draft.date),
    }
}

fn describe(err: &BackendError) -> String {
    match err {
        BackendError::Unauthorized => "Session expired, please sign in again".to_string(),
        BackendError::NotFound => "Transaction not found".to_string(),
        BackendError::Conflict(message) => format!("Already exists: {message}"),
        BackendError::Validation(message) => message.clone(),
        BackendError::Server(message) => format!("Server error: {message}"),
        BackendError::Transport(_) => "Server unreachable".to_string(),
    }
}

#[cfg(test)]
mod tests;
