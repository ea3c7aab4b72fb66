//! Errors for navigation, backends and the flow controller.

use crate::screen::{ScreenId, UserAction};
use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;
pub type FlowResult<T> = Result<T, FlowError>;

/// Returned by `Navigator::pop` when only the root entry is left.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Navigation stack is at its root")]
pub struct EmptyStackError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error(transparent)]
    EmptyStack(#[from] EmptyStackError),

    #[error("Navigator has not been initialized")]
    NotInitialized,

    #[error("No transition for '{action}' on {screen}")]
    NoTransition { screen: ScreenId, action: UserAction },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Rejected by backend: {0}")]
    Rejected(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    Nav(#[from] NavError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Operation requires {expected}, current screen is {actual}")]
    WrongScreen {
        expected: ScreenId,
        actual: ScreenId,
    },
}

impl FlowError {
    /// True when a back action hit the root and the platform should decide what happens next.
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, FlowError::Nav(NavError::EmptyStack(_)))
    }
}

impl From<EmptyStackError> for FlowError {
    fn from(err: EmptyStackError) -> Self {
        FlowError::Nav(NavError::EmptyStack(err))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} name: {value}")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}
