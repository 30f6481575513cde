use crate::{MoneyCents, Transaction, TransactionKind};

/// Expense-list filters. Every criterion left at its default matches all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description.
    pub search: String,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.search.trim().to_lowercase();
        (needle.is_empty() || tx.description.to_lowercase().contains(&needle))
            && self
                .category
                .as_deref()
                .is_none_or(|category| tx.category == category)
            && self.kind.is_none_or(|kind| tx.kind == kind)
    }

    /// Matching transactions, newest date first. Equal dates keep input order.
    pub fn apply<'a>(&self, txs: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut matched: Vec<_> = txs.iter().filter(|tx| self.matches(tx)).collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.category.is_some() || self.kind.is_some()
    }
}

/// Sum of the expenses among `txs`, as shown under the filtered list.
pub fn filtered_expense_total(txs: &[&Transaction]) -> MoneyCents {
    txs.iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
        .map(|tx| tx.amount)
        .sum()
}
