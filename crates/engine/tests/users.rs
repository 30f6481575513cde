use sea_orm::Database;

use engine::{CATEGORIES, Engine, EngineError, MoneyCents, ProfileUpdate, SignUpCmd};
use migration::MigratorTrait;

async fn engine() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

#[tokio::test]
async fn sign_up_starts_onboarding() {
    let engine = engine().await;
    let session = engine
        .sign_up(SignUpCmd::new(" Riya ", "Riya@Example.com", "secret1"))
        .await
        .unwrap();

    assert!(!session.token.is_empty());
    assert_eq!(session.profile.name, "Riya");
    assert_eq!(session.profile.email, "riya@example.com");
    assert!(!session.profile.onboarding_complete);
    assert_eq!(session.profile.monthly_budget, MoneyCents::ZERO);
    assert!(session.profile.selected_categories.is_empty());
}

#[tokio::test]
async fn sign_up_validates_input() {
    let engine = engine().await;
    for cmd in [
        SignUpCmd::new("", "a@b.c", "secret1"),
        SignUpCmd::new("A", "not-an-email", "secret1"),
        SignUpCmd::new("A", "a@b.c", "12345"),
    ] {
        assert!(matches!(
            engine.sign_up(cmd).await,
            Err(EngineError::InvalidInput(_))
        ));
    }
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let engine = engine().await;
    engine
        .sign_up(SignUpCmd::new("A", "a@b.c", "secret1"))
        .await
        .unwrap();
    let err = engine
        .sign_up(SignUpCmd::new("B", "A@B.C", "secret2"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("a@b.c".to_string()));
}

#[tokio::test]
async fn sign_in_checks_password_and_sessions_resolve() {
    let engine = engine().await;
    engine
        .sign_up(SignUpCmd::new("A", "a@b.c", "secret1"))
        .await
        .unwrap();

    assert!(matches!(
        engine.sign_in("a@b.c", "wrong-password").await,
        Err(EngineError::Unauthorized(_))
    ));
    assert!(matches!(
        engine.sign_in("nobody@b.c", "secret1").await,
        Err(EngineError::Unauthorized(_))
    ));

    let session = engine.sign_in(" A@b.c ", "secret1").await.unwrap();
    let resolved = engine.session(&session.token).await.unwrap();
    assert_eq!(resolved, session);

    engine.sign_out(&session.token).await.unwrap();
    assert!(matches!(
        engine.session(&session.token).await,
        Err(EngineError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn onboarding_state_survives_sign_in() {
    let engine = engine().await;
    let session = engine
        .sign_up(SignUpCmd::new("A", "a@b.c", "secret1"))
        .await
        .unwrap();
    let id = session.profile.id;

    engine
        .update_profile(
            id,
            ProfileUpdate::default()
                .monthly_budget(MoneyCents::from_major(35_000))
                .selected_categories(Vec::new())
                .onboarding_complete(true),
        )
        .await
        .unwrap();
    engine.sign_out(&session.token).await.unwrap();

    let again = engine.sign_in("a@b.c", "secret1").await.unwrap();
    assert!(again.profile.onboarding_complete);
    assert_eq!(again.profile.monthly_budget, MoneyCents::from_major(35_000));
    assert_eq!(again.profile.selected_categories.len(), CATEGORIES.len());
}

#[tokio::test]
async fn profile_update_validates() {
    let engine = engine().await;
    let id = engine
        .sign_up(SignUpCmd::new("A", "a@b.c", "secret1"))
        .await
        .unwrap()
        .profile
        .id;

    assert!(engine
        .update_profile(id, ProfileUpdate::default().name("   "))
        .await
        .is_err());
    assert!(engine
        .update_profile(id, ProfileUpdate::default().monthly_budget(MoneyCents::new(-100)))
        .await
        .is_err());
    assert!(engine
        .update_profile(id, ProfileUpdate::default().monthly_budget(MoneyCents::new(i64::MAX)))
        .await
        .is_err());

    let profile = engine
        .update_profile(
            id,
            ProfileUpdate::default()
                .name("Asha")
                .selected_categories(vec!["food".to_string(), "travel".to_string()]),
        )
        .await
        .unwrap();
    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.selected_categories, vec!["food", "travel"]);
    assert_eq!(engine.profile(id).await.unwrap(), profile);
}
