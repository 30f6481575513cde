use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, Transaction, TransactionDraft, TransactionPatch, transactions,
};

use super::{Engine, with_tx};

impl Engine {
    /// All transactions of the user, newest first.
    ///
    /// Records sharing a date keep insertion order, newest insert first.
    pub async fn list_transactions(&self, user_id: Uuid) -> ResultEngine<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.database)
            .await?;
        models.into_iter().map(Transaction::try_from).collect()
    }

    pub async fn transaction(&self, tx_id: Uuid, user_id: Uuid) -> ResultEngine<Transaction> {
        let model = self.require_transaction(&self.database, tx_id, user_id).await?;
        Transaction::try_from(model)
    }

    /// Validate and store a new transaction, returning it with its id.
    pub async fn insert_transaction(
        &self,
        user_id: Uuid,
        draft: TransactionDraft,
    ) -> ResultEngine<Transaction> {
        let draft = draft.validated()?;
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            let model = transactions::ActiveModel::from_draft(
                &user_id.to_string(),
                Uuid::new_v4(),
                &draft,
            )
            .insert(&db_tx)
            .await?;
            Transaction::try_from(model)
        })
    }

    /// Store many drafts at once. Either all are stored or none.
    pub async fn import_transactions(
        &self,
        user_id: Uuid,
        drafts: Vec<TransactionDraft>,
    ) -> ResultEngine<usize> {
        let drafts = drafts
            .into_iter()
            .map(TransactionDraft::validated)
            .collect::<ResultEngine<Vec<_>>>()?;
        let count = drafts.len();
        if count == 0 {
            return Ok(0);
        }

        let owner = user_id.to_string();
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            let models = drafts
                .iter()
                .map(|draft| transactions::ActiveModel::from_draft(&owner, Uuid::new_v4(), draft));
            transactions::Entity::insert_many(models).exec(&db_tx).await?;
            tracing::info!(%user_id, count, "transactions imported");
            Ok(count)
        })
    }

    /// Apply `patch` to an owned transaction. An empty patch is a no-op.
    pub async fn update_transaction(
        &self,
        tx_id: Uuid,
        user_id: Uuid,
        patch: TransactionPatch,
    ) -> ResultEngine<Transaction> {
        with_tx!(self, |db_tx| {
            let model = self.require_transaction(&db_tx, tx_id, user_id).await?;
            let current = Transaction::try_from(model.clone())?;
            if patch.is_empty() {
                return Ok(current);
            }
            let updated = patch.apply(&current)?;

            let mut active: transactions::ActiveModel = model.into();
            active.kind = ActiveValue::Set(updated.kind.as_str().to_string());
            active.amount_minor = ActiveValue::Set(updated.amount.cents());
            active.category = ActiveValue::Set(updated.category.clone());
            active.description = ActiveValue::Set(updated.description.clone());
            active.date = ActiveValue::Set(updated.date);
            active.update(&db_tx).await?;
            Ok(updated)
        })
    }

    pub async fn delete_transaction(&self, tx_id: Uuid, user_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = self.require_transaction(&db_tx, tx_id, user_id).await?;
            transactions::Entity::delete_by_id(model.id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    /// Remove every transaction of the user; returns how many were removed.
    pub async fn clear_transactions(&self, user_id: Uuid) -> ResultEngine<u64> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::UserId.eq(user_id.to_string()))
            .exec(&self.database)
            .await?;
        tracing::info!(%user_id, removed = result.rows_affected, "transactions cleared");
        Ok(result.rows_affected)
    }

    async fn require_transaction<C: ConnectionTrait>(
        &self,
        db: &C,
        tx_id: Uuid,
        user_id: Uuid,
    ) -> ResultEngine<transactions::Model> {
        transactions::Entity::find_by_id(tx_id.to_string())
            .filter(transactions::Column::UserId.eq(user_id.to_string()))
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("transaction not exists".to_string()))
    }
}
