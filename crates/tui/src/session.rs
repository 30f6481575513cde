//! Which screen is active, decided from authentication and onboarding
//! status.
//!
//! [`Session::apply`] is the only way to move between screens. Requests the
//! current state does not allow are rejected and change nothing.

use engine::UserProfile;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    ForgotPassword,
    OnboardingWelcome,
    OnboardingBudget,
    OnboardingCategories,
    Dashboard,
    Expenses,
    Analytics,
    Settings,
}

impl Screen {
    /// Reachable with the main navigation once onboarding is done.
    pub const MAIN: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Expenses,
        Screen::Analytics,
        Screen::Settings,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot-password",
            Self::OnboardingWelcome => "onboarding-welcome",
            Self::OnboardingBudget => "onboarding-budget",
            Self::OnboardingCategories => "onboarding-categories",
            Self::Dashboard => "dashboard",
            Self::Expenses => "expenses",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Signup => "Create account",
            Self::ForgotPassword => "Reset password",
            Self::OnboardingWelcome => "Welcome",
            Self::OnboardingBudget => "Monthly budget",
            Self::OnboardingCategories => "Categories",
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    pub fn is_auth(self) -> bool {
        matches!(self, Self::Login | Self::Signup | Self::ForgotPassword)
    }

    pub fn is_onboarding(self) -> bool {
        matches!(
            self,
            Self::OnboardingWelcome | Self::OnboardingBudget | Self::OnboardingCategories
        )
    }

    pub fn is_main(self) -> bool {
        Self::MAIN.contains(&self)
    }

    /// 1-based step number while onboarding.
    pub fn onboarding_step(self) -> Option<usize> {
        match self {
            Self::OnboardingWelcome => Some(1),
            Self::OnboardingBudget => Some(2),
            Self::OnboardingCategories => Some(3),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Sign-in, sign-up or a restored session succeeded.
    Authenticated(UserProfile),
    OnboardingNext,
    OnboardingBack,
    /// The stored profile after budget and categories were saved.
    OnboardingCompleted(UserProfile),
    /// Explicit sign-out or an invalidated session.
    SignedOut,
    Navigate(Screen),
    ProfileUpdated(UserProfile),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{action} not allowed on {from}")]
pub struct Rejected {
    pub from: &'static str,
    pub action: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    screen: Screen,
    user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn apply(&mut self, action: Action) -> Result<(), Rejected> {
        let from = self.screen.id();
        let reject = |action: &'static str| Rejected { from, action };

        let (screen, user) = match action {
            Action::Authenticated(profile) => {
                if !self.screen.is_auth() {
                    return Err(reject("authenticated"));
                }
                let screen = if profile.onboarding_complete {
                    Screen::Dashboard
                } else {
                    Screen::OnboardingWelcome
                };
                (screen, Some(profile))
            }
            Action::OnboardingNext => {
                let next = match self.screen {
                    Screen::OnboardingWelcome => Screen::OnboardingBudget,
                    Screen::OnboardingBudget => Screen::OnboardingCategories,
                    _ => return Err(reject("onboarding next")),
                };
                (next, self.user.take())
            }
            Action::OnboardingBack => {
                let back = match self.screen {
                    Screen::OnboardingBudget => Screen::OnboardingWelcome,
                    Screen::OnboardingCategories => Screen::OnboardingBudget,
                    _ => return Err(reject("onboarding back")),
                };
                (back, self.user.take())
            }
            Action::OnboardingCompleted(mut profile) => {
                if self.screen != Screen::OnboardingCategories {
                    return Err(reject("onboarding completed"));
                }
                profile.onboarding_complete = true;
                (Screen::Dashboard, Some(profile))
            }
            Action::SignedOut => (Screen::Login, None),
            Action::Navigate(target) => {
                let allowed = match &self.user {
                    None => self.screen.is_auth() && target.is_auth(),
                    Some(user) => {
                        user.onboarding_complete && self.screen.is_main() && target.is_main()
                    }
                };
                if !allowed {
                    return Err(reject("navigate"));
                }
                (target, self.user.take())
            }
            Action::ProfileUpdated(profile) => {
                if self.user.is_none() {
                    return Err(reject("profile update"));
                }
                (self.screen, Some(profile))
            }
        };

        if screen != self.screen {
            tracing::debug!(from, to = screen.id(), "screen changed");
        }
        self.screen = screen;
        self.user = user;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use engine::MoneyCents;
    use uuid::Uuid;

    use super::*;

    fn profile(onboarding_complete: bool) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            monthly_budget: MoneyCents::ZERO,
            selected_categories: Vec::new(),
            onboarding_complete,
        }
    }

    fn signed_in(onboarding_complete: bool) -> Session {
        let mut session = Session::new();
        session
            .apply(Action::Authenticated(profile(onboarding_complete)))
            .unwrap();
        session
    }

    #[test]
    fn starts_on_login() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Login);
        assert!(session.user().is_none());
    }

    #[test]
    fn authenticated_lands_by_onboarding_status() {
        assert_eq!(signed_in(true).screen(), Screen::Dashboard);
        assert_eq!(signed_in(false).screen(), Screen::OnboardingWelcome);
    }

    #[test]
    fn onboarding_is_sequential() {
        let mut session = signed_in(false);
        assert!(session.apply(Action::OnboardingBack).is_err());
        assert!(
            session
                .apply(Action::OnboardingCompleted(profile(false)))
                .is_err()
        );
        assert_eq!(session.screen(), Screen::OnboardingWelcome);

        session.apply(Action::OnboardingNext).unwrap();
        assert_eq!(session.screen(), Screen::OnboardingBudget);
        session.apply(Action::OnboardingBack).unwrap();
        assert_eq!(session.screen(), Screen::OnboardingWelcome);
        session.apply(Action::OnboardingNext).unwrap();
        session.apply(Action::OnboardingNext).unwrap();
        assert_eq!(session.screen(), Screen::OnboardingCategories);
        assert!(session.apply(Action::OnboardingNext).is_err());

        session
            .apply(Action::OnboardingCompleted(profile(false)))
            .unwrap();
        assert_eq!(session.screen(), Screen::Dashboard);
        assert!(session.user().unwrap().onboarding_complete);
    }

    #[test]
    fn main_navigation_needs_completed_onboarding() {
        let mut session = signed_in(false);
        let err = session.apply(Action::Navigate(Screen::Dashboard)).unwrap_err();
        assert_eq!(err.from, "onboarding-welcome");
        assert_eq!(session.screen(), Screen::OnboardingWelcome);

        let mut session = signed_in(true);
        for target in Screen::MAIN {
            session.apply(Action::Navigate(target)).unwrap();
            assert_eq!(session.screen(), target);
        }
        assert!(session.apply(Action::Navigate(Screen::Login)).is_err());
        assert!(
            session
                .apply(Action::Navigate(Screen::OnboardingBudget))
                .is_err()
        );
        assert_eq!(session.screen(), Screen::Settings);
    }

    #[test]
    fn auth_screens_only_while_signed_out() {
        let mut session = Session::new();
        session.apply(Action::Navigate(Screen::Signup)).unwrap();
        session.apply(Action::Navigate(Screen::ForgotPassword)).unwrap();
        session.apply(Action::Navigate(Screen::Login)).unwrap();
        assert!(session.apply(Action::Navigate(Screen::Dashboard)).is_err());
        assert!(session.apply(Action::OnboardingNext).is_err());
        assert!(session.apply(Action::ProfileUpdated(profile(true))).is_err());
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn sign_out_from_anywhere_clears_the_user() {
        let mut dashboard = signed_in(true);
        let mut settings = signed_in(true);
        settings.apply(Action::Navigate(Screen::Settings)).unwrap();
        let mut onboarding = signed_in(false);
        onboarding.apply(Action::OnboardingNext).unwrap();

        for session in [&mut dashboard, &mut settings, &mut onboarding] {
            session.apply(Action::SignedOut).unwrap();
            assert_eq!(*session, Session::new());
        }
    }

    #[test]
    fn profile_update_keeps_the_screen() {
        let mut session = signed_in(true);
        session.apply(Action::Navigate(Screen::Settings)).unwrap();
        let mut updated = profile(true);
        updated.name = "Asha K".to_string();
        session.apply(Action::ProfileUpdated(updated)).unwrap();
        assert_eq!(session.screen(), Screen::Settings);
        assert_eq!(session.user().unwrap().name, "Asha K");
    }

    #[test]
    fn second_authentication_is_rejected() {
        let mut session = signed_in(true);
        assert!(session.apply(Action::Authenticated(profile(false))).is_err());
        assert_eq!(session.screen(), Screen::Dashboard);
    }
}
