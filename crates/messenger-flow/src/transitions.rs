//! The fixed navigation graph of the onboarding flow.
//!
//! Each row maps (screen, action, origin) to a target entry and the way the
//! navigation stack changes. Lookup is first-match in table order.

use crate::screen::{NavigationEntry, NavigationOrigin, ScreenId, UserAction};

/// Which origin tags a row accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginRule {
    Any,
    Is(NavigationOrigin),
    Absent,
}

impl OriginRule {
    fn accepts(&self, origin: Option<NavigationOrigin>) -> bool {
        match self {
            OriginRule::Any => true,
            OriginRule::Is(expected) => origin == Some(*expected),
            OriginRule::Absent => origin.is_none(),
        }
    }
}

/// How a transition changes the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Record the target on top of the current entry.
    Push,
    /// Swap the current entry for the target; back skips the replaced screen.
    Replace,
    /// Already there; nothing changes.
    Stay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    pub action: UserAction,
    pub when: OriginRule,
    pub to: ScreenId,
    pub carry: Option<NavigationOrigin>,
    pub mode: NavMode,
}

impl Transition {
    pub fn target(&self) -> NavigationEntry {
        NavigationEntry::new(self.to, self.carry)
    }
}

const fn row(
    from: ScreenId,
    action: UserAction,
    when: OriginRule,
    to: ScreenId,
    carry: Option<NavigationOrigin>,
    mode: NavMode,
) -> Transition {
    Transition {
        from,
        action,
        when,
        to,
        carry,
        mode,
    }
}

pub const TRANSITIONS: &[Transition] = &[
    row(
        ScreenId::Auth,
        UserAction::RegisterLink,
        OriginRule::Any,
        ScreenId::EmailInput,
        None,
        NavMode::Push,
    ),
    row(
        ScreenId::Auth,
        UserAction::LoginButton,
        OriginRule::Any,
        ScreenId::CodeVerification,
        Some(NavigationOrigin::FromLogin),
        NavMode::Push,
    ),
    row(
        ScreenId::EmailInput,
        UserAction::Next,
        OriginRule::Any,
        ScreenId::CodeVerification,
        Some(NavigationOrigin::FromRegistration),
        NavMode::Push,
    ),
    row(
        ScreenId::CodeVerification,
        UserAction::Verify,
        OriginRule::Is(NavigationOrigin::FromRegistration),
        ScreenId::LoginPhone,
        None,
        NavMode::Replace,
    ),
    row(
        ScreenId::CodeVerification,
        UserAction::Verify,
        OriginRule::Is(NavigationOrigin::FromLogin),
        ScreenId::ProfileSettings,
        None,
        NavMode::Replace,
    ),
    // No origin falls back to the registration path.
    row(
        ScreenId::CodeVerification,
        UserAction::Verify,
        OriginRule::Absent,
        ScreenId::LoginPhone,
        None,
        NavMode::Replace,
    ),
    row(
        ScreenId::LoginPhone,
        UserAction::Next,
        OriginRule::Any,
        ScreenId::Password,
        None,
        NavMode::Push,
    ),
    row(
        ScreenId::Password,
        UserAction::Register,
        OriginRule::Any,
        ScreenId::ProfileSettings,
        None,
        NavMode::Replace,
    ),
    row(
        ScreenId::ProfileSettings,
        UserAction::NavProfile,
        OriginRule::Any,
        ScreenId::ProfileSettings,
        None,
        NavMode::Stay,
    ),
    row(
        ScreenId::ProfileSettings,
        UserAction::NavSettings,
        OriginRule::Any,
        ScreenId::Settings,
        None,
        NavMode::Push,
    ),
    row(
        ScreenId::Registration,
        UserAction::AuthLink,
        OriginRule::Any,
        ScreenId::Auth,
        None,
        NavMode::Push,
    ),
    row(
        ScreenId::ChatList,
        UserAction::NavChats,
        OriginRule::Any,
        ScreenId::ChatList,
        None,
        NavMode::Stay,
    ),
    row(
        ScreenId::ChatList,
        UserAction::NavProfile,
        OriginRule::Any,
        ScreenId::ProfileSettings,
        None,
        NavMode::Push,
    ),
    row(
        ScreenId::ChatList,
        UserAction::NavSettings,
        OriginRule::Any,
        ScreenId::Settings,
        None,
        NavMode::Push,
    ),
];

/// Find the transition for `action` taken on `entry`.
pub fn resolve(entry: &NavigationEntry, action: UserAction) -> Option<&'static Transition> {
    TRANSITIONS.iter().find(|t| {
        t.from == entry.screen && t.action == action && t.when.accepts(entry.origin)
    })
}

/// Actions that lead somewhere from `entry`, in table order without duplicates.
pub fn actions_for(entry: &NavigationEntry) -> Vec<UserAction> {
    let mut actions = Vec::new();
    for t in TRANSITIONS {
        if t.from == entry.screen && t.when.accepts(entry.origin) && !actions.contains(&t.action) {
            actions.push(t.action);
        }
    }
    actions
}
