//! Stack machine behind back navigation.

use crate::error::{EmptyStackError, NavError, NavResult};
use crate::screen::{NavigationEntry, NavigationOrigin, ScreenId, UserAction};
use crate::transitions::{self, Transition};

/// History of visited screens. The bottom entry is the root and is never popped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<NavigationEntry>,
}

impl Navigator {
    /// An uninitialized navigator; the first push becomes the root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: ScreenId) -> Self {
        Self {
            stack: vec![NavigationEntry::root(root)],
        }
    }

    pub fn push(&mut self, target: ScreenId, origin: Option<NavigationOrigin>) {
        let entry = NavigationEntry::new(target, origin);
        log::info!("🧭 push {} (depth {})", entry, self.stack.len() + 1);
        self.stack.push(entry);
    }

    /// Swap the top entry for `target`. On an empty navigator this behaves like `push`.
    pub fn replace(&mut self, target: ScreenId, origin: Option<NavigationOrigin>) {
        let entry = NavigationEntry::new(target, origin);
        match self.stack.last_mut() {
            Some(top) => {
                log::info!("🧭 replace {} -> {}", top, entry);
                *top = entry;
            }
            None => self.push(target, origin),
        }
    }

    pub fn pop(&mut self) -> Result<NavigationEntry, EmptyStackError> {
        if self.stack.len() <= 1 {
            log::debug!("pop refused at root");
            return Err(EmptyStackError);
        }
        let popped = self.stack.pop().ok_or(EmptyStackError)?;
        log::info!("🧭 pop {} (depth {})", popped, self.stack.len());
        Ok(popped)
    }

    pub fn current_screen(&self) -> NavResult<ScreenId> {
        self.current().map(|entry| entry.screen)
    }

    pub fn current(&self) -> NavResult<NavigationEntry> {
        self.stack.last().copied().ok_or(NavError::NotInitialized)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_initialized(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Entries from root to top.
    pub fn history(&self) -> &[NavigationEntry] {
        &self.stack
    }

    /// Look up the row for `action` on the current entry without changing anything.
    pub fn resolve(&self, action: UserAction) -> NavResult<&'static Transition> {
        let current = self.current()?;
        transitions::resolve(&current, action).ok_or(NavError::NoTransition {
            screen: current.screen,
            action,
        })
    }
}
