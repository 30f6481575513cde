use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    CATEGORIES, EngineError, MAX_AMOUNT, MoneyCents, ProfileUpdate, ResultEngine, Session, SignUpCmd,
    UserProfile, sessions, users,
    util::{
        hash_password, new_salt, normalize_email, normalize_required_name, validate_password,
        verify_password,
    },
};

use super::{Engine, with_tx};

const INVALID_CREDENTIALS: &str = "invalid credentials";

impl Engine {
    /// Create an account and open a session for it.
    ///
    /// New accounts start with no budget, no selected categories and
    /// onboarding pending.
    pub async fn sign_up(&self, cmd: SignUpCmd) -> ResultEngine<Session> {
        let name = normalize_required_name(&cmd.name)?;
        let email = normalize_email(&cmd.email)?;
        validate_password(&cmd.password)?;

        with_tx!(self, |db_tx| {
            let taken = users::Entity::find()
                .filter(users::Column::Email.eq(email.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if taken {
                return Err(EngineError::ExistingKey(email));
            }

            let salt = new_salt();
            let model = users::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4().to_string()),
                email: ActiveValue::Set(email),
                name: ActiveValue::Set(name),
                password_hash: ActiveValue::Set(hash_password(&salt, &cmd.password)),
                password_salt: ActiveValue::Set(salt),
                monthly_budget_minor: ActiveValue::Set(0),
                selected_categories: ActiveValue::Set("[]".to_string()),
                onboarding_complete: ActiveValue::Set(false),
            }
            .insert(&db_tx)
            .await?;
            tracing::info!(user_id = %model.id, "account created");

            self.open_session(&db_tx, model).await
        })
    }

    /// Check credentials and open a session.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    pub async fn sign_in(&self, email: &str, password: &str) -> ResultEngine<Session> {
        let email = email.trim().to_lowercase();
        with_tx!(self, |db_tx| {
            let model = users::Entity::find()
                .filter(users::Column::Email.eq(email))
                .one(&db_tx)
                .await?
                .filter(|model| verify_password(&model.password_salt, password, &model.password_hash))
                .ok_or_else(|| EngineError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

            self.open_session(&db_tx, model).await
        })
    }

    /// Revoke `token`. Unknown tokens are ignored.
    pub async fn sign_out(&self, token: &str) -> ResultEngine<()> {
        sessions::Entity::delete_by_id(token.to_string())
            .exec(&self.database)
            .await?;
        Ok(())
    }

    /// Resolve a bearer token to its session.
    pub async fn session(&self, token: &str) -> ResultEngine<Session> {
        let (_, user) = sessions::Entity::find_by_id(token.to_string())
            .find_also_related(users::Entity)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::Unauthorized("unknown session".to_string()))?;
        let user = user.ok_or_else(|| EngineError::Unauthorized("unknown session".to_string()))?;

        Ok(Session {
            token: token.to_string(),
            profile: UserProfile::try_from(user)?,
        })
    }

    pub async fn profile(&self, user_id: Uuid) -> ResultEngine<UserProfile> {
        let model = self.require_user(&self.database, user_id).await?;
        UserProfile::try_from(model)
    }

    /// Apply `update` to the user's profile and return the stored result.
    ///
    /// The name must stay non-blank and the budget non-negative. An empty
    /// category selection is stored as every known category.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> ResultEngine<UserProfile> {
        with_tx!(self, |db_tx| {
            let model = self.require_user(&db_tx, user_id).await?;
            let mut active: users::ActiveModel = model.into();

            if let Some(name) = update.name.as_deref() {
                active.name = ActiveValue::Set(normalize_required_name(name)?);
            }
            if let Some(budget) = update.monthly_budget {
                active.monthly_budget_minor = ActiveValue::Set(validate_budget(budget)?.cents());
            }
            if let Some(ids) = update.selected_categories {
                let ids = if ids.is_empty() {
                    CATEGORIES.iter().map(|c| c.id.to_string()).collect()
                } else {
                    ids
                };
                active.selected_categories =
                    ActiveValue::Set(users::encode_categories(&ids)?);
            }
            if let Some(complete) = update.onboarding_complete {
                active.onboarding_complete = ActiveValue::Set(complete);
            }

            let model = active.update(&db_tx).await?;
            UserProfile::try_from(model)
        })
    }

    async fn open_session(
        &self,
        db: &DatabaseTransaction,
        user: users::Model,
    ) -> ResultEngine<Session> {
        let token = Uuid::new_v4().simple().to_string();
        sessions::ActiveModel {
            token: ActiveValue::Set(token.clone()),
            user_id: ActiveValue::Set(user.id.clone()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(db)
        .await?;

        Ok(Session {
            token,
            profile: UserProfile::try_from(user)?,
        })
    }

    pub(super) async fn require_user<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
    ) -> ResultEngine<users::Model> {
        users::Entity::find_by_id(user_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("user not exists".to_string()))
    }
}

fn validate_budget(budget: MoneyCents) -> ResultEngine<MoneyCents> {
    if budget.is_negative() {
        return Err(EngineError::InvalidAmount(
            "budget must not be negative".to_string(),
        ));
    }
    if budget.exceeds_limit() {
        return Err(EngineError::InvalidAmount(format!(
            "budget must be at most {MAX_AMOUNT}"
        )));
    }
    Ok(budget)
}
