use messenger_flow::{FieldId, ScreenId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown step '{0}'. Use an action name, back, photo, save or field=value")]
    UnknownStep(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("{field} is not on the {screen} screen")]
    FieldNotOnScreen { field: FieldId, screen: ScreenId },
}
