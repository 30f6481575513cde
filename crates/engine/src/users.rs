//! Users table and the profile view exposed to callers.
//!
//! Credentials never leave this module: `UserProfile` carries only what the
//! client is allowed to see.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine, util::parse_uuid};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub monthly_budget: MoneyCents,
    pub selected_categories: Vec<String>,
    pub onboarding_complete: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub password_salt: String,
    pub monthly_budget_minor: i64,
    /// JSON array of category ids.
    pub selected_categories: String,
    pub onboarding_complete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for UserProfile {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let selected_categories: Vec<String> = serde_json::from_str(&model.selected_categories)
            .map_err(|err| EngineError::InvalidInput(format!("corrupted categories: {err}")))?;
        Ok(Self {
            id: parse_uuid(&model.id, "user")?,
            name: model.name,
            email: model.email,
            monthly_budget: MoneyCents::new(model.monthly_budget_minor),
            selected_categories,
            onboarding_complete: model.onboarding_complete,
        })
    }
}

pub(crate) fn encode_categories(ids: &[String]) -> ResultEngine<String> {
    serde_json::to_string(ids)
        .map_err(|err| EngineError::InvalidInput(format!("invalid categories: {err}")))
}
