//! Messenger onboarding flow.
//!
//! Screen identifiers, the fixed transition table, the navigation stack and
//! the profile save-button logic, independent of any UI toolkit. A UI plugs
//! in through [`render::Renderer`]; services plug in through the traits in
//! [`backend`].

pub mod backend;
pub mod chat;
pub mod error;
pub mod flow;
pub mod navigator;
pub mod profile;
pub mod render;
pub mod screen;
pub mod transitions;

pub use backend::{ClientBackend, FakeBackend, PlaceholderBackend, RegistrationDraft};
pub use chat::ChatItem;
pub use error::{BackendError, EmptyStackError, FlowError, FlowResult, NavError};
pub use flow::{Flow, Outcome};
pub use navigator::Navigator;
pub use profile::{DirtyTracker, Profile, ProfileSnapshot};
pub use render::{HeadlessRenderer, Renderer, ViewHandle};
pub use screen::{FieldId, NavigationEntry, NavigationOrigin, ScreenId, UserAction};
