//! The seam between the flow and whatever draws the screens.

use crate::chat::ChatItem;
use crate::screen::{FieldId, NavigationOrigin, ScreenId};
use std::collections::HashMap;

/// Identifies one rendered instance of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub u64);

/// UI collaborator driven by `Flow`.
///
/// `render` replaces whatever view was shown before; handles of replaced
/// views are stale and may be ignored by the other methods.
pub trait Renderer {
    fn render(&mut self, screen: ScreenId, origin: Option<NavigationOrigin>) -> ViewHandle;

    /// Current text of a field; empty when the view has no such field.
    fn read_field(&self, view: ViewHandle, field: FieldId) -> String;

    fn set_field(&mut self, view: ViewHandle, field: FieldId, value: &str);

    fn set_save_visible(&mut self, view: ViewHandle, visible: bool);

    fn show_chats(&mut self, view: ViewHandle, chats: &[ChatItem]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessView {
    pub handle: ViewHandle,
    pub screen: ScreenId,
    pub origin: Option<NavigationOrigin>,
    pub fields: HashMap<FieldId, String>,
    pub save_visible: bool,
    pub chats: Vec<ChatItem>,
}

/// Renderer without a display: keeps the current view in memory and the
/// list of screens rendered so far.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_handle: u64,
    view: Option<HeadlessView>,
    rendered: Vec<ScreenId>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&HeadlessView> {
        self.view.as_ref()
    }

    /// Screens in the order they were rendered.
    pub fn rendered(&self) -> &[ScreenId] {
        &self.rendered
    }

    /// Simulate typing into the current view.
    pub fn type_into(&mut self, field: FieldId, value: &str) {
        if let Some(view) = self.view.as_mut() {
            view.fields.insert(field, value.to_string());
        }
    }

    pub fn save_visible(&self) -> bool {
        self.view.as_ref().map(|v| v.save_visible).unwrap_or(false)
    }

    fn view_mut(&mut self, handle: ViewHandle) -> Option<&mut HeadlessView> {
        self.view.as_mut().filter(|view| view.handle == handle)
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, screen: ScreenId, origin: Option<NavigationOrigin>) -> ViewHandle {
        self.next_handle += 1;
        let handle = ViewHandle(self.next_handle);
        let fields = screen
            .fields()
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        self.view = Some(HeadlessView {
            handle,
            screen,
            origin,
            fields,
            save_visible: false,
            chats: Vec::new(),
        });
        self.rendered.push(screen);
        handle
    }

    fn read_field(&self, view: ViewHandle, field: FieldId) -> String {
        self.view
            .as_ref()
            .filter(|v| v.handle == view)
            .and_then(|v| v.fields.get(&field).cloned())
            .unwrap_or_default()
    }

    fn set_field(&mut self, view: ViewHandle, field: FieldId, value: &str) {
        if let Some(v) = self.view_mut(view) {
            v.fields.insert(field, value.to_string());
        }
    }

    fn set_save_visible(&mut self, view: ViewHandle, visible: bool) {
        if let Some(v) = self.view_mut(view) {
            v.save_visible = visible;
        }
    }

    fn show_chats(&mut self, view: ViewHandle, chats: &[ChatItem]) {
        if let Some(v) = self.view_mut(view) {
            v.chats = chats.to_vec();
        }
    }
}
