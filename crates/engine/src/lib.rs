//! Storage and figures for a personal finance tracker.
//!
//! [`Engine`] owns the database (users, sessions, transactions). The pure
//! modules ([`stats`], [`filter`], [`export`], [`sample`]) work on plain
//! transaction slices and never touch storage.

pub use categories::{CATEGORIES, Category, UNKNOWN_CATEGORY, category, category_ids};
pub use commands::{MIN_PASSWORD_LEN, ProfileUpdate, SignUpCmd};
pub use error::EngineError;
pub use filter::{TransactionFilter, filtered_expense_total};
pub use money::{CURRENCY_SYMBOL, MAX_AMOUNT, MoneyCents};
pub use ops::{Engine, EngineBuilder};
pub use sessions::Session;
pub use transactions::{Transaction, TransactionDraft, TransactionKind, TransactionPatch};
pub use users::UserProfile;

mod categories;
mod commands;
mod error;
pub mod export;
mod filter;
mod money;
mod ops;
pub mod sample;
mod sessions;
pub mod stats;
mod transactions;
mod users;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
