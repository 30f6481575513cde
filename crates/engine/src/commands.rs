//! Command structs for engine operations.
//!
//! These types group parameters for account and profile writes, keeping call
//! sites readable and avoiding long argument lists.

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// Minimum accepted password length at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Create an account.
#[derive(Clone, Debug)]
pub struct SignUpCmd {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpCmd {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub monthly_budget: Option<MoneyCents>,
    pub selected_categories: Option<Vec<String>>,
    pub onboarding_complete: Option<bool>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn monthly_budget(mut self, budget: MoneyCents) -> Self {
        self.monthly_budget = Some(budget);
        self
    }

    #[must_use]
    pub fn selected_categories(mut self, ids: Vec<String>) -> Self {
        self.selected_categories = Some(ids);
        self
    }

    #[must_use]
    pub fn onboarding_complete(mut self, complete: bool) -> Self {
        self.onboarding_complete = Some(complete);
        self
    }
}
