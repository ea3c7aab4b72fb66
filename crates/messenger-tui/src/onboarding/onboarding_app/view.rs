use crate::input::InputField;
use messenger_flow::transitions;
use messenger_flow::{
    ChatItem, FieldId, NavigationEntry, NavigationOrigin, Renderer, ScreenId, UserAction,
    ViewHandle,
};

/// What pressing Enter on a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Navigate(UserAction),
    ChangePhoto,
    Save,
}

impl ButtonAction {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonAction::Navigate(action) => action.label(),
            ButtonAction::ChangePhoto => "Change photo",
            ButtonAction::Save => "Save",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Field { id: FieldId, input: InputField },
    Button(ButtonAction),
}

/// The screen currently inflated in the terminal.
#[derive(Debug, Clone)]
pub struct ScreenView {
    pub handle: ViewHandle,
    pub screen: ScreenId,
    pub origin: Option<NavigationOrigin>,
    pub controls: Vec<Control>,
    pub focus: usize,
    pub save_visible: bool,
    pub chats: Vec<ChatItem>,
}

impl ScreenView {
    fn inflate(handle: ViewHandle, screen: ScreenId, origin: Option<NavigationOrigin>) -> Self {
        let mut controls: Vec<Control> = screen
            .fields()
            .iter()
            .map(|id| Control::Field {
                id: *id,
                input: InputField::new(id.placeholder()).masked(id.is_secret()),
            })
            .collect();
        if screen == ScreenId::ProfileSettings {
            controls.push(Control::Button(ButtonAction::ChangePhoto));
            controls.push(Control::Button(ButtonAction::Save));
        }
        let entry = NavigationEntry::new(screen, origin);
        controls.extend(
            transitions::actions_for(&entry)
                .into_iter()
                .map(|action| Control::Button(ButtonAction::Navigate(action))),
        );
        Self {
            handle,
            screen,
            origin,
            controls,
            focus: 0,
            save_visible: false,
            chats: Vec::new(),
        }
    }

    /// The save button only takes focus while it is shown.
    pub fn is_focusable(&self, index: usize) -> bool {
        match self.controls.get(index) {
            Some(Control::Button(ButtonAction::Save)) => self.save_visible,
            Some(_) => true,
            None => false,
        }
    }

    pub fn focused(&self) -> Option<&Control> {
        self.controls.get(self.focus)
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut InputField> {
        match self.controls.get_mut(self.focus) {
            Some(Control::Field { input, .. }) => Some(input),
            _ => None,
        }
    }

    /// Move focus by `delta`, wrapping and skipping hidden controls.
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.controls.len();
        if len == 0 {
            self.focus = 0;
            return;
        }
        let mut next = self.focus;
        for _ in 0..len {
            next = (next as isize + delta).rem_euclid(len as isize) as usize;
            if self.is_focusable(next) {
                self.focus = next;
                return;
            }
        }
    }

    fn field(&self, id: FieldId) -> Option<&InputField> {
        self.controls.iter().find_map(|control| match control {
            Control::Field { id: field, input } if *field == id => Some(input),
            _ => None,
        })
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut InputField> {
        self.controls.iter_mut().find_map(|control| match control {
            Control::Field { id: field, input } if *field == id => Some(input),
            _ => None,
        })
    }

    fn ensure_focus_valid(&mut self) {
        if !self.is_focusable(self.focus) {
            self.move_focus(-1);
        }
    }
}

/// `Renderer` that keeps one inflated `ScreenView` for the draw loop.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    next_handle: u64,
    view: Option<ScreenView>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&ScreenView> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut ScreenView> {
        self.view.as_mut()
    }

    fn live(&mut self, handle: ViewHandle) -> Option<&mut ScreenView> {
        self.view.as_mut().filter(|view| view.handle == handle)
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, screen: ScreenId, origin: Option<NavigationOrigin>) -> ViewHandle {
        self.next_handle += 1;
        let handle = ViewHandle(self.next_handle);
        log::debug!("inflate {} as view {}", screen, self.next_handle);
        self.view = Some(ScreenView::inflate(handle, screen, origin));
        handle
    }

    fn read_field(&self, view: ViewHandle, field: FieldId) -> String {
        self.view
            .as_ref()
            .filter(|v| v.handle == view)
            .and_then(|v| v.field(field))
            .map(|input| input.value().to_string())
            .unwrap_or_default()
    }

    fn set_field(&mut self, view: ViewHandle, field: FieldId, value: &str) {
        if let Some(input) = self.live(view).and_then(|v| v.field_mut(field)) {
            input.set_value(value);
        }
    }

    fn set_save_visible(&mut self, view: ViewHandle, visible: bool) {
        if let Some(v) = self.live(view) {
            v.save_visible = visible;
            v.ensure_focus_valid();
        }
    }

    fn show_chats(&mut self, view: ViewHandle, chats: &[ChatItem]) {
        if let Some(v) = self.live(view) {
            v.chats = chats.to_vec();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_view_has_fields_then_buttons() {
        let mut renderer = TerminalRenderer::new();
        renderer.render(ScreenId::ProfileSettings, None);
        let view = renderer.view().expect("view");
        let labels: Vec<String> = view
            .controls
            .iter()
            .map(|c| match c {
                Control::Field { id, .. } => id.name().to_string(),
                Control::Button(b) => b.label().to_string(),
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "nickname",
                "profile-phone",
                "Change photo",
                "Save",
                "Profile",
                "Settings"
            ]
        );
    }

    #[test]
    fn hidden_save_is_skipped_by_focus() {
        let mut renderer = TerminalRenderer::new();
        let handle = renderer.render(ScreenId::ProfileSettings, None);
        let view = renderer.view_mut().expect("view");
        view.focus = 2;
        view.move_focus(1);
        assert_eq!(view.focus, 4);

        renderer.set_save_visible(handle, true);
        let view = renderer.view_mut().expect("view");
        view.focus = 2;
        view.move_focus(1);
        assert_eq!(view.focus, 3);
    }

    #[test]
    fn hiding_save_moves_focus_off_it() {
        let mut renderer = TerminalRenderer::new();
        let handle = renderer.render(ScreenId::ProfileSettings, None);
        renderer.set_save_visible(handle, true);
        if let Some(view) = renderer.view_mut() {
            view.focus = 3;
        }
        renderer.set_save_visible(handle, false);
        assert_eq!(renderer.view().map(|v| v.focus), Some(2));
    }

    #[test]
    fn verification_view_offers_verify_only() {
        let mut renderer = TerminalRenderer::new();
        renderer.render(
            ScreenId::CodeVerification,
            Some(NavigationOrigin::FromLogin),
        );
        let view = renderer.view().expect("view");
        assert_eq!(view.controls.len(), 2);
        assert_eq!(
            view.controls[1],
            Control::Button(ButtonAction::Navigate(UserAction::Verify))
        );
    }
}
