//! Screens, actions and fields of the onboarding flow.

use crate::error::ParseNameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every navigable destination in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    Auth,
    EmailInput,
    CodeVerification,
    LoginPhone,
    Password,
    ProfileSettings,
    Settings,
    ChatList,
    Registration,
}

impl ScreenId {
    pub fn all() -> &'static [ScreenId] {
        &[
            ScreenId::Auth,
            ScreenId::Registration,
            ScreenId::EmailInput,
            ScreenId::CodeVerification,
            ScreenId::LoginPhone,
            ScreenId::Password,
            ScreenId::ProfileSettings,
            ScreenId::Settings,
            ScreenId::ChatList,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Auth => "Sign In",
            ScreenId::EmailInput => "Email",
            ScreenId::CodeVerification => "Verification Code",
            ScreenId::LoginPhone => "Login & Phone",
            ScreenId::Password => "Password",
            ScreenId::ProfileSettings => "Profile",
            ScreenId::Settings => "Settings",
            ScreenId::ChatList => "Chats",
            ScreenId::Registration => "Registration",
        }
    }

    /// Stable name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Auth => "auth",
            ScreenId::EmailInput => "email-input",
            ScreenId::CodeVerification => "code-verification",
            ScreenId::LoginPhone => "login-phone",
            ScreenId::Password => "password",
            ScreenId::ProfileSettings => "profile-settings",
            ScreenId::Settings => "settings",
            ScreenId::ChatList => "chat-list",
            ScreenId::Registration => "registration",
        }
    }

    /// Fields the screen exposes for editing, in display order.
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            ScreenId::EmailInput => &[FieldId::Email],
            ScreenId::CodeVerification => &[FieldId::Code],
            ScreenId::LoginPhone => &[FieldId::Login, FieldId::Phone],
            ScreenId::Password => &[FieldId::Password, FieldId::PasswordRepeat],
            ScreenId::ProfileSettings => &[FieldId::Nickname, FieldId::ProfilePhone],
            _ => &[],
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScreenId {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::all()
            .iter()
            .copied()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| ParseNameError {
                kind: "screen",
                value: s.to_string(),
            })
    }
}

/// Which flow opened the verification screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationOrigin {
    FromRegistration,
    FromLogin,
}

impl fmt::Display for NavigationOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationOrigin::FromRegistration => write!(f, "from-registration"),
            NavigationOrigin::FromLogin => write!(f, "from-login"),
        }
    }
}

/// One frame of the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub screen: ScreenId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<NavigationOrigin>,
}

impl NavigationEntry {
    pub fn new(screen: ScreenId, origin: Option<NavigationOrigin>) -> Self {
        Self { screen, origin }
    }

    pub fn root(screen: ScreenId) -> Self {
        Self::new(screen, None)
    }
}

impl fmt::Display for NavigationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Some(origin) => write!(f, "{} ({})", self.screen, origin),
            None => write!(f, "{}", self.screen),
        }
    }
}

/// Taps and bottom-navigation selections the user can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserAction {
    RegisterLink,
    LoginButton,
    Next,
    Verify,
    Register,
    AuthLink,
    NavChats,
    NavProfile,
    NavSettings,
}

impl UserAction {
    pub fn all() -> &'static [UserAction] {
        &[
            UserAction::RegisterLink,
            UserAction::LoginButton,
            UserAction::Next,
            UserAction::Verify,
            UserAction::Register,
            UserAction::AuthLink,
            UserAction::NavChats,
            UserAction::NavProfile,
            UserAction::NavSettings,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UserAction::RegisterLink => "register-link",
            UserAction::LoginButton => "login",
            UserAction::Next => "next",
            UserAction::Verify => "verify",
            UserAction::Register => "register",
            UserAction::AuthLink => "auth-link",
            UserAction::NavChats => "nav-chats",
            UserAction::NavProfile => "nav-profile",
            UserAction::NavSettings => "nav-settings",
        }
    }

    /// Button caption shown by the terminal UI.
    pub fn label(&self) -> &'static str {
        match self {
            UserAction::RegisterLink => "No account? Register",
            UserAction::LoginButton => "Log in",
            UserAction::Next => "Next",
            UserAction::Verify => "Verify",
            UserAction::Register => "Register",
            UserAction::AuthLink => "Already registered? Sign in",
            UserAction::NavChats => "Chats",
            UserAction::NavProfile => "Profile",
            UserAction::NavSettings => "Settings",
        }
    }

    pub fn is_bottom_nav(&self) -> bool {
        matches!(
            self,
            UserAction::NavChats | UserAction::NavProfile | UserAction::NavSettings
        )
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UserAction {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserAction::all()
            .iter()
            .copied()
            .find(|action| action.name() == s)
            .ok_or_else(|| ParseNameError {
                kind: "action",
                value: s.to_string(),
            })
    }
}

/// Editable text fields a render collaborator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    Email,
    Code,
    Login,
    Phone,
    Password,
    PasswordRepeat,
    Nickname,
    ProfilePhone,
}

impl FieldId {
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::Email,
            FieldId::Code,
            FieldId::Login,
            FieldId::Phone,
            FieldId::Password,
            FieldId::PasswordRepeat,
            FieldId::Nickname,
            FieldId::ProfilePhone,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Code => "code",
            FieldId::Login => "login",
            FieldId::Phone => "phone",
            FieldId::Password => "password",
            FieldId::PasswordRepeat => "password-repeat",
            FieldId::Nickname => "nickname",
            FieldId::ProfilePhone => "profile-phone",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::Email => "Email",
            FieldId::Code => "4-digit code",
            FieldId::Login => "Login",
            FieldId::Phone => "Phone number",
            FieldId::Password => "Password",
            FieldId::PasswordRepeat => "Repeat password",
            FieldId::Nickname => "Nickname",
            FieldId::ProfilePhone => "Phone number",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, FieldId::Password | FieldId::PasswordRepeat)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FieldId {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::all()
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseNameError {
                kind: "field",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_names_round_trip_through_from_str() {
        for screen in ScreenId::all() {
            assert_eq!(screen.name().parse::<ScreenId>(), Ok(*screen));
        }
        assert!("inbox".parse::<ScreenId>().is_err());
    }

    #[test]
    fn action_parse_reports_unknown_name() {
        let err = "tap".parse::<UserAction>().unwrap_err();
        assert_eq!(err.kind, "action");
        assert_eq!(err.value, "tap");
        assert_eq!("login".parse::<UserAction>(), Ok(UserAction::LoginButton));
    }

    #[test]
    fn only_form_screens_expose_fields() {
        assert!(ScreenId::Auth.fields().is_empty());
        assert!(ScreenId::ChatList.fields().is_empty());
        assert_eq!(
            ScreenId::ProfileSettings.fields(),
            &[FieldId::Nickname, FieldId::ProfilePhone]
        );
    }

    #[test]
    fn entry_display_includes_origin() {
        let entry = NavigationEntry::new(
            ScreenId::CodeVerification,
            Some(NavigationOrigin::FromLogin),
        );
        assert_eq!(entry.to_string(), "code-verification (from-login)");
        assert_eq!(NavigationEntry::root(ScreenId::Auth).to_string(), "auth");
    }
}
