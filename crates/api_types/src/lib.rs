//! JSON bodies exchanged between the server and its clients.
//!
//! Amounts travel as integer minor units (`*_minor`), dates as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod auth {
    use super::*;
    use crate::profile::ProfileView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SignIn {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SignUp {
        pub name: String,
        pub email: String,
        pub password: String,
    }

    /// Returned by sign-in, sign-up and `GET /auth/session`.
    ///
    /// `token` goes in `Authorization: Bearer <token>` on later requests.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SessionResponse {
        pub token: String,
        pub profile: ProfileView,
    }
}

pub mod profile {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProfileView {
        pub id: Uuid,
        pub name: String,
        pub email: String,
        pub monthly_budget_minor: i64,
        pub selected_categories: Vec<String>,
        pub onboarding_complete: bool,
    }

    /// Absent fields are left untouched.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ProfileUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub monthly_budget_minor: Option<i64>,
        /// An empty list selects every category.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub selected_categories: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub onboarding_complete: Option<bool>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Expense,
        Income,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub kind: TransactionKind,
        /// Always > 0; `kind` gives the direction.
        pub amount_minor: i64,
        /// Category id; ids outside the known set are kept verbatim.
        pub category: String,
        pub description: String,
        pub date: NaiveDate,
    }

    /// Newest first.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub kind: TransactionKind,
        pub amount_minor: i64,
        pub category: String,
        pub description: String,
        pub date: NaiveDate,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub kind: Option<TransactionKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub amount_minor: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<NaiveDate>,
    }

    /// Bulk insert; all records are stored or none.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionImport {
        pub transactions: Vec<TransactionNew>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ImportResponse {
        pub imported: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ClearResponse {
        pub removed: u64,
    }
}
