//! Transaction primitives.
//!
//! A `Transaction` is a single income or expense record owned by one user.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine, money::MAX_AMOUNT, util::parse_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Formats `amount` with the sign this kind implies (`+₹…` / `-₹…`).
    pub fn signed(self, amount: MoneyCents) -> String {
        match self {
            Self::Income => format!("+{amount}"),
            Self::Expense => format!("-{amount}"),
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(EngineError::InvalidInput(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "amount_minor")]
    pub amount: MoneyCents,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Drops the id, e.g. to compare content after a round trip.
    #[must_use]
    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date,
        }
    }
}

/// A transaction without id, as submitted for insertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: MoneyCents,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Checks the entry-form rules and trims text fields.
    pub fn validated(mut self) -> ResultEngine<Self> {
        if !self.amount.is_positive() {
            return Err(EngineError::InvalidAmount("amount must be > 0".to_string()));
        }
        if self.amount.exceeds_limit() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be at most {MAX_AMOUNT}"
            )));
        }
        self.category = self.category.trim().to_string();
        if self.category.is_empty() {
            return Err(EngineError::InvalidInput("category is required".to_string()));
        }
        self.description = self.description.trim().to_string();
        if self.description.is_empty() {
            return Err(EngineError::InvalidInput(
                "description is required".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<MoneyCents>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }

    /// Applies the patch to a copy of `tx` and validates the result.
    pub fn apply(&self, tx: &Transaction) -> ResultEngine<Transaction> {
        let draft = TransactionDraft {
            kind: self.kind.unwrap_or(tx.kind),
            amount: self.amount.unwrap_or(tx.amount),
            category: self.category.clone().unwrap_or_else(|| tx.category.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| tx.description.clone()),
            date: self.date.unwrap_or(tx.date),
        }
        .validated()?;

        Ok(Transaction {
            id: tx.id,
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub amount_minor: i64,
    pub category: String,
    pub description: String,
    pub date: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub(crate) fn from_draft(user_id: &str, id: Uuid, draft: &TransactionDraft) -> Self {
        Self {
            id: ActiveValue::Set(id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            kind: ActiveValue::Set(draft.kind.as_str().to_string()),
            amount_minor: ActiveValue::Set(draft.amount.cents()),
            category: ActiveValue::Set(draft.category.clone()),
            description: ActiveValue::Set(draft.description.clone()),
            date: ActiveValue::Set(draft.date),
            created_at: ActiveValue::Set(Utc::now()),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "transaction")?,
            kind: TransactionKind::try_from(model.kind.as_str())?,
            amount: MoneyCents::new(model.amount_minor),
            category: model.category,
            description: model.description,
            date: model.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            kind: TransactionKind::Expense,
            amount: MoneyCents::from_major(250),
            category: "food".to_string(),
            description: "  Lunch ".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
        }
    }

    #[test]
    fn validated_trims_description() {
        let draft = draft().validated().unwrap();
        assert_eq!(draft.description, "Lunch");
    }

    #[test]
    fn validated_rejects_non_positive_amount() {
        let mut zero = draft();
        zero.amount = MoneyCents::ZERO;
        assert!(matches!(zero.validated(), Err(EngineError::InvalidAmount(_))));
    }

    #[test]
    fn validated_rejects_amount_over_the_limit() {
        let mut huge = draft();
        huge.amount = MoneyCents::new(MAX_AMOUNT.cents() + 1);
        assert!(matches!(huge.validated(), Err(EngineError::InvalidAmount(_))));

        let mut at_limit = draft();
        at_limit.amount = MAX_AMOUNT;
        assert!(at_limit.validated().is_ok());

        let tx = Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            amount: MoneyCents::from_major(10),
            category: "food".to_string(),
            description: "Tea".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        };
        let patch = TransactionPatch {
            amount: Some(MoneyCents::new(i64::MAX / 100)),
            ..Default::default()
        };
        assert!(matches!(patch.apply(&tx), Err(EngineError::InvalidAmount(_))));
    }

    #[test]
    fn validated_rejects_blank_fields() {
        let mut blank = draft();
        blank.description = "   ".to_string();
        assert!(matches!(blank.validated(), Err(EngineError::InvalidInput(_))));

        let mut blank = draft();
        blank.category = String::new();
        assert!(matches!(blank.validated(), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let tx = Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            amount: MoneyCents::from_major(10),
            category: "transport".to_string(),
            description: "Bus".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        };
        let patch = TransactionPatch {
            amount: Some(MoneyCents::from_major(12)),
            ..Default::default()
        };
        let updated = patch.apply(&tx).unwrap();
        assert_eq!(updated.id, tx.id);
        assert_eq!(updated.amount, MoneyCents::from_major(12));
        assert_eq!(updated.description, "Bus");
    }

    #[test]
    fn signed_prefix_follows_kind() {
        let amount = MoneyCents::from_major(1_500);
        assert_eq!(TransactionKind::Income.signed(amount), "+₹1,500");
        assert_eq!(TransactionKind::Expense.signed(amount), "-₹1,500");
    }
}
