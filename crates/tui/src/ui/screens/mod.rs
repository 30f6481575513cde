pub mod analytics;
pub mod dashboard;
pub mod expenses;
pub mod forgot;
pub mod login;
pub mod onboarding;
pub mod settings;
pub mod signup;
