//! Flow controller: navigator + render collaborator + backend.
//!
//! Every screen change goes through here so the stack, the rendered view and
//! the profile tracker never disagree. Data a screen needs (profile, chats)
//! is fetched before the stack changes, so a failing backend leaves the user
//! where they were.

use crate::backend::{ClientBackend, RegistrationDraft};
use crate::chat::ChatItem;
use crate::error::{EmptyStackError, FlowError, FlowResult, NavError};
use crate::navigator::Navigator;
use crate::profile::{DirtyTracker, Profile, ProfileSnapshot};
use crate::render::{Renderer, ViewHandle};
use crate::screen::{FieldId, NavigationEntry, NavigationOrigin, ScreenId, UserAction};
use crate::transitions::NavMode;

/// What a dispatched action did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pushed(NavigationEntry),
    Replaced(NavigationEntry),
    Stayed(ScreenId),
}

impl Outcome {
    pub fn screen(&self) -> ScreenId {
        match self {
            Outcome::Pushed(entry) | Outcome::Replaced(entry) => entry.screen,
            Outcome::Stayed(screen) => *screen,
        }
    }
}

/// Data fetched for a screen before it is shown.
enum Content {
    Plain,
    Profile(Profile),
    Chats(Vec<ChatItem>),
}

impl Content {
    fn empty(screen: ScreenId) -> Self {
        match screen {
            ScreenId::ProfileSettings => Content::Profile(Profile {
                nickname: String::new(),
                phone: String::new(),
            }),
            ScreenId::ChatList => Content::Chats(Vec::new()),
            _ => Content::Plain,
        }
    }
}

pub struct Flow<R: Renderer> {
    navigator: Navigator,
    renderer: R,
    backend: Box<dyn ClientBackend>,
    view: Option<ViewHandle>,
    tracker: DirtyTracker,
    draft: RegistrationDraft,
}

impl<R: Renderer> Flow<R> {
    pub fn new(renderer: R, backend: Box<dyn ClientBackend>) -> Self {
        Self {
            navigator: Navigator::new(),
            renderer,
            backend,
            view: None,
            tracker: DirtyTracker::default(),
            draft: RegistrationDraft::default(),
        }
    }

    /// Reset the stack to `root` and show it.
    pub fn start(&mut self, root: ScreenId) -> FlowResult<ViewHandle> {
        let content = self.prepare(root)?;
        self.navigator = Navigator::with_root(root);
        self.draft = RegistrationDraft::default();
        log::info!("🚪 flow started at {}", root);
        Ok(self.mount(NavigationEntry::root(root), content))
    }

    pub fn push(
        &mut self,
        target: ScreenId,
        origin: Option<NavigationOrigin>,
    ) -> FlowResult<ViewHandle> {
        let content = self.prepare(target)?;
        self.navigator.push(target, origin);
        Ok(self.mount(NavigationEntry::new(target, origin), content))
    }

    pub fn dispatch(&mut self, action: UserAction) -> FlowResult<Outcome> {
        let current = self.navigator.current()?;
        let transition = self.navigator.resolve(action)?;
        log::info!("▶ {} on {}", action, current);

        // Nothing may fail after a hook has been accepted.
        let target = transition.target();
        let content = match transition.mode {
            NavMode::Stay => None,
            NavMode::Push | NavMode::Replace => Some(self.prepare(target.screen)?),
        };
        self.run_hook(current.screen, action)?;

        match (transition.mode, content) {
            (NavMode::Push, Some(content)) => {
                self.navigator.push(target.screen, target.origin);
                self.mount(target, content);
                Ok(Outcome::Pushed(target))
            }
            (NavMode::Replace, Some(content)) => {
                self.navigator.replace(target.screen, target.origin);
                self.mount(target, content);
                Ok(Outcome::Replaced(target))
            }
            (NavMode::Stay, _) | (_, None) => Ok(Outcome::Stayed(current.screen)),
        }
    }

    /// Return to the previous screen. At the root this fails with
    /// `EmptyStackError` and the caller decides whether to exit.
    ///
    /// If the screen below cannot load its data it is shown empty, so back
    /// always leaves the current screen.
    pub fn back(&mut self) -> FlowResult<NavigationEntry> {
        let history = self.navigator.history();
        if history.len() <= 1 {
            return Err(EmptyStackError.into());
        }
        let below = history[history.len() - 2];
        let content = self.prepare(below.screen).unwrap_or_else(|err| {
            log::warn!("{} shown without data: {}", below.screen, err);
            Content::empty(below.screen)
        });
        let popped = self.navigator.pop()?;
        self.mount(below, content);
        Ok(popped)
    }

    /// Re-evaluate the save button after a profile field changed.
    pub fn field_changed(&mut self) -> FlowResult<bool> {
        let view = self.require_screen(ScreenId::ProfileSettings)?;
        let nickname = self.renderer.read_field(view, FieldId::Nickname);
        let phone = self.renderer.read_field(view, FieldId::ProfilePhone);
        let dirty = self.tracker.on_field_changed(&nickname, &phone);
        self.renderer.set_save_visible(view, dirty);
        Ok(dirty)
    }

    pub fn photo_changed(&mut self) -> FlowResult<bool> {
        let view = self.require_screen(ScreenId::ProfileSettings)?;
        let dirty = self.tracker.on_photo_changed();
        self.renderer.set_save_visible(view, dirty);
        Ok(dirty)
    }

    /// Persist the profile fields. On failure the screen stays dirty.
    pub fn save_profile(&mut self) -> FlowResult<()> {
        let view = self.require_screen(ScreenId::ProfileSettings)?;
        let profile = Profile {
            nickname: self.renderer.read_field(view, FieldId::Nickname),
            phone: self.renderer.read_field(view, FieldId::ProfilePhone),
        };
        self.backend.save_profile(&profile).map_err(|err| {
            log::warn!("profile save failed: {}", err);
            err
        })?;
        let dirty = self.tracker.commit(&profile.nickname, &profile.phone);
        self.renderer.set_save_visible(view, dirty);
        Ok(())
    }

    pub fn current_screen(&self) -> FlowResult<ScreenId> {
        Ok(self.navigator.current_screen()?)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn view(&self) -> Option<ViewHandle> {
        self.view
    }

    pub fn tracker(&self) -> &DirtyTracker {
        &self.tracker
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    fn require_screen(&self, expected: ScreenId) -> FlowResult<ViewHandle> {
        let actual = self.navigator.current_screen()?;
        if actual != expected {
            return Err(FlowError::WrongScreen { expected, actual });
        }
        self.view.ok_or(FlowError::Nav(NavError::NotInitialized))
    }

    fn read(&self, field: FieldId) -> String {
        self.view
            .map(|view| self.renderer.read_field(view, field))
            .unwrap_or_default()
    }

    fn run_hook(&mut self, screen: ScreenId, action: UserAction) -> FlowResult<()> {
        let result = match (screen, action) {
            (ScreenId::EmailInput, UserAction::Next) => {
                self.draft.email = self.read(FieldId::Email);
                Ok(())
            }
            (ScreenId::CodeVerification, UserAction::Verify) => {
                let code = self.read(FieldId::Code);
                self.backend.verify_code(&code)
            }
            (ScreenId::LoginPhone, UserAction::Next) => {
                self.draft.login = self.read(FieldId::Login);
                self.draft.phone = self.read(FieldId::Phone);
                Ok(())
            }
            (ScreenId::Password, UserAction::Register) => {
                self.draft.password = self.read(FieldId::Password);
                self.backend.register(&self.draft)
            }
            _ => Ok(()),
        };
        result.map_err(|err| {
            log::warn!("{} on {} rejected: {}", action, screen, err);
            FlowError::Backend(err)
        })
    }

    fn prepare(&self, screen: ScreenId) -> FlowResult<Content> {
        let content = match screen {
            ScreenId::ProfileSettings => Content::Profile(self.backend.load_profile()?),
            ScreenId::ChatList => Content::Chats(self.backend.chats()?),
            _ => Content::Plain,
        };
        Ok(content)
    }

    fn mount(&mut self, entry: NavigationEntry, content: Content) -> ViewHandle {
        let view = self.renderer.render(entry.screen, entry.origin);
        match content {
            Content::Plain => {}
            Content::Profile(profile) => {
                self.renderer
                    .set_field(view, FieldId::Nickname, &profile.nickname);
                self.renderer
                    .set_field(view, FieldId::ProfilePhone, &profile.phone);
                self.tracker.initialize(ProfileSnapshot::from(&profile));
                self.renderer.set_save_visible(view, false);
            }
            Content::Chats(chats) => self.renderer.show_chats(view, &chats),
        }
        self.view = Some(view);
        view
    }
}
