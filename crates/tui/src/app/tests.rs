use std::{path::PathBuf, time::Duration};

use engine::{MoneyCents, export};

use super::*;
use crate::backend::Backend;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("financeflow_app_{}_{name}", std::process::id()))
}

fn app(name: &str) -> App {
    let dir = scratch(name);
    let _ = fs::remove_dir_all(&dir);
    let config = AppConfig {
        state_path: dir.join("state.json").display().to_string(),
        export_dir: dir.join("exports").display().to_string(),
        mock: true,
        mock_latency_ms: 0,
        ..AppConfig::default()
    };
    let backend = AnyBackend::Mock(MockBackend::new(Duration::ZERO));
    App::with_backend(config, backend, LocalState::default()).unwrap()
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        assert_eq!(app.handle_key(AppAction::Input(ch)), None);
    }
}

async fn press(app: &mut App, action: AppAction) {
    if let Some(command) = app.handle_key(action) {
        app.execute(command).await.unwrap();
    }
}

async fn demo(name: &str) -> App {
    let mut app = app(name);
    press(&mut app, AppAction::Ctrl('d')).await;
    assert_eq!(app.state.session.screen(), Screen::Dashboard);
    app
}

#[tokio::test]
async fn demo_login_lands_on_dashboard_and_remembers_the_session() {
    let app = demo("demo_login").await;

    let user = app.state.session.user().unwrap();
    assert_eq!(user.email, DEMO_EMAIL);
    assert!(app.state.login.password.is_empty());

    let saved = LocalState::load(&app.config.state_path).unwrap();
    assert_eq!(saved.last_email.as_deref(), Some(DEMO_EMAIL));
    assert!(saved.session_token.is_some());
}

#[tokio::test]
async fn wrong_password_stays_on_login() {
    let mut app = app("wrong_password");
    type_text(&mut app, DEMO_EMAIL);
    assert_eq!(app.handle_key(AppAction::Submit), None);
    assert_eq!(
        app.state.login.message.as_deref(),
        Some("Please fill in all fields")
    );

    app.handle_key(AppAction::NextField);
    type_text(&mut app, "nope-nope");
    press(&mut app, AppAction::Submit).await;

    assert_eq!(app.state.session.screen(), Screen::Login);
    assert_eq!(app.state.login.message.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn new_account_walks_through_onboarding() {
    let mut app = app("onboarding");
    app.handle_key(AppAction::Ctrl('n'));
    assert_eq!(app.state.session.screen(), Screen::Signup);

    type_text(&mut app, "Asha");
    app.handle_key(AppAction::NextField);
    type_text(&mut app, "asha@example.com");
    app.handle_key(AppAction::NextField);
    type_text(&mut app, "secret1");
    press(&mut app, AppAction::Submit).await;
    assert_eq!(app.state.session.screen(), Screen::OnboardingWelcome);

    // Shortcuts must not leave onboarding.
    app.handle_key(AppAction::Input('d'));
    assert_eq!(app.state.session.screen(), Screen::OnboardingWelcome);

    app.handle_key(AppAction::Submit);
    assert_eq!(app.state.session.screen(), Screen::OnboardingBudget);
    app.handle_key(AppAction::Submit);
    assert_eq!(
        app.state.onboarding.message.as_deref(),
        Some("Please enter a valid budget amount")
    );
    app.handle_key(AppAction::NextField);
    app.handle_key(AppAction::Submit);
    assert_eq!(app.state.session.screen(), Screen::OnboardingCategories);

    app.handle_key(AppAction::Input(' '));
    let command = app.handle_key(AppAction::Submit).unwrap();
    let Command::CompleteOnboarding { budget, categories } = &command else {
        panic!("unexpected command {command:?}");
    };
    assert_eq!(*budget, MoneyCents::from_major(20_000));
    assert!(!categories.iter().any(|id| id == "food"));

    app.execute(command).await.unwrap();
    assert_eq!(app.state.session.screen(), Screen::Dashboard);
    let user = app.state.session.user().unwrap();
    assert!(user.onboarding_complete);
    assert_eq!(user.monthly_budget, MoneyCents::from_major(20_000));
    assert!(!app.store.ledger().transactions().is_empty());
}

#[tokio::test]
async fn add_then_delete_a_transaction() {
    let mut app = demo("add_delete").await;
    let before = app.store.ledger().transactions().len();

    app.handle_key(AppAction::Input('n'));
    assert_eq!(app.state.session.screen(), Screen::Expenses);
    assert_eq!(app.state.expenses.mode, ExpensesMode::Entry);

    type_text(&mut app, "250");
    app.handle_key(AppAction::NextField);
    app.handle_key(AppAction::Right);
    app.handle_key(AppAction::NextField);
    type_text(&mut app, "Masala chai");
    press(&mut app, AppAction::Submit).await;

    assert_eq!(app.state.expenses.mode, ExpensesMode::List);
    assert_eq!(app.store.ledger().transactions().len(), before + 1);
    let added = &app.store.ledger().transactions()[0];
    assert_eq!(added.description, "Masala chai");
    assert_eq!(added.category, "food");
    assert_eq!(added.amount, MoneyCents::from_major(250));
    assert_eq!(
        app.state.toast.as_ref().map(|t| t.message.as_str()),
        Some("Transaction added successfully")
    );

    type_text(&mut app, "/chai");
    app.handle_key(AppAction::Submit);
    app.handle_key(AppAction::Input('x'));
    assert_eq!(app.state.expenses.mode, ExpensesMode::ConfirmDelete);
    press(&mut app, AppAction::Input('y')).await;
    assert_eq!(app.store.ledger().transactions().len(), before);
}

#[tokio::test]
async fn entry_errors_keep_the_form_open() {
    let mut app = demo("entry_errors").await;
    app.handle_key(AppAction::Input('n'));
    assert_eq!(app.handle_key(AppAction::Submit), None);
    assert_eq!(app.state.expenses.mode, ExpensesMode::Entry);
    assert_eq!(
        app.state.expenses.entry.message.as_deref(),
        Some("Please enter a valid amount")
    );

    app.handle_key(AppAction::Cancel);
    assert_eq!(app.state.expenses.mode, ExpensesMode::List);
}

#[tokio::test]
async fn search_text_does_not_trigger_shortcuts() {
    let mut app = demo("search").await;
    app.handle_key(AppAction::Input('e'));
    app.handle_key(AppAction::Input('/'));
    type_text(&mut app, "dsaq");

    assert_eq!(app.state.session.screen(), Screen::Expenses);
    assert_eq!(app.state.expenses.filter.search, "dsaq");
    assert!(!app.should_quit);
}

#[tokio::test]
async fn csv_export_lands_in_the_export_dir() {
    let mut app = demo("export").await;
    app.handle_key(AppAction::Input('e'));
    app.handle_key(AppAction::Input('v'));

    let path = PathBuf::from(&app.config.export_dir).join(export::csv_file_name(app.state.today));
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("\"Date\",\"Type\""));
    assert_eq!(
        app.state.toast.as_ref().map(|t| t.message.as_str()),
        Some("Exported to CSV")
    );
}

#[tokio::test]
async fn settings_rename_and_sign_out() {
    let mut app = demo("settings").await;
    app.handle_key(AppAction::Input('s'));
    assert_eq!(app.state.session.screen(), Screen::Settings);

    app.handle_key(AppAction::Submit);
    assert_eq!(app.state.settings.editing, Some(SettingsField::Name));
    for _ in 0..40 {
        app.handle_key(AppAction::Backspace);
    }
    type_text(&mut app, "Demo Two");
    press(&mut app, AppAction::Submit).await;

    assert_eq!(app.state.settings.editing, None);
    assert_eq!(app.state.session.user().unwrap().name, "Demo Two");

    press(&mut app, AppAction::Input('o')).await;
    assert_eq!(app.state.session.screen(), Screen::Login);
    assert!(app.state.session.user().is_none());
    assert!(app.store.ledger().transactions().is_empty());
    assert_eq!(app.state.login.email, DEMO_EMAIL);

    let saved = LocalState::load(&app.config.state_path).unwrap();
    assert!(saved.session_token.is_none());
}

#[tokio::test]
async fn stale_token_is_forgotten() {
    let mut app = app("stale_token");
    app.local.remember_session(DEMO_EMAIL, "not-a-token");
    app.execute(Command::Restore("not-a-token".to_string()))
        .await
        .unwrap();

    assert_eq!(app.state.session.screen(), Screen::Login);
    assert!(app.local.session_token.is_none());
}

fn mock(app: &mut App) -> &mut MockBackend {
    match app.store.backend_mut() {
        AnyBackend::Mock(mock) => mock,
        AnyBackend::Http(_) => panic!("test apps run on the mock"),
    }
}

/// Points the state file below a regular file so every save fails.
fn break_state_path(app: &mut App, name: &str) {
    let dir = scratch(name);
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("blocker");
    fs::write(&blocker, "").unwrap();
    app.config.state_path = blocker.join("state.json").display().to_string();
}

#[tokio::test]
async fn unwritable_state_file_never_blocks_sign_in_or_out() {
    let mut app = app("unwritable_state");
    break_state_path(&mut app, "unwritable_state");

    press(&mut app, AppAction::Ctrl('d')).await;
    assert_eq!(app.state.session.screen(), Screen::Dashboard);
    assert!(app.state.session.user().is_some());

    app.execute(Command::SignOut).await.unwrap();
    assert_eq!(app.state.session.screen(), Screen::Login);
    assert!(app.state.session.user().is_none());
    assert!(app.store.ledger().transactions().is_empty());
}

#[tokio::test]
async fn revoked_session_signs_out_with_a_toast() {
    let mut app = demo("revoked_session").await;
    app.handle_key(AppAction::Input('n'));
    type_text(&mut app, "250");
    app.handle_key(AppAction::NextField);
    app.handle_key(AppAction::Right);
    app.handle_key(AppAction::NextField);
    type_text(&mut app, "Snacks");
    press(&mut app, AppAction::Submit).await;
    assert_eq!(app.store.ledger().transactions().len(), 1);

    mock(&mut app).sign_out().await.unwrap();
    press(&mut app, AppAction::Input('r')).await;

    assert_eq!(app.state.session.screen(), Screen::Login);
    assert!(app.state.session.user().is_none());
    assert!(app.store.ledger().transactions().is_empty());
    let toast = app.state.toast.as_ref().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Session expired, please sign in again");
    assert!(app.local.session_token.is_none());
}

#[tokio::test]
async fn failed_first_fetch_keeps_the_session() {
    let mut app = app("failed_fetch");
    mock(&mut app).set_outage(true);

    press(&mut app, AppAction::Ctrl('d')).await;
    assert_eq!(app.state.session.screen(), Screen::Dashboard);
    assert!(app.local.session_token.is_some());
    let toast = app.state.toast.as_ref().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);

    mock(&mut app).set_outage(false);
    press(&mut app, AppAction::Input('r')).await;
    assert_eq!(app.state.toast.as_ref().unwrap().level, ToastLevel::Info);
}
