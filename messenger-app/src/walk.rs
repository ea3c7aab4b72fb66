//! Headless replay of the onboarding screens.
//!
//! Drives a `Flow` with the in-memory renderer so flows can be scripted and
//! checked from the command line without a terminal.

use crate::config::AppConfig;
use crate::errors::AppError;
use messenger_flow::{
    FieldId, Flow, FlowError, HeadlessRenderer, NavigationEntry, ScreenId, UserAction,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Action(UserAction),
    Back,
    Photo,
    Save,
    Set { field: FieldId, value: String },
}

impl FromStr for Step {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((name, value)) = s.split_once('=') {
            let field = name
                .parse::<FieldId>()
                .map_err(|_| AppError::UnknownField(name.to_string()))?;
            return Ok(Step::Set {
                field,
                value: value.to_string(),
            });
        }
        match s {
            "back" => Ok(Step::Back),
            "photo" => Ok(Step::Photo),
            "save" => Ok(Step::Save),
            other => other
                .parse::<UserAction>()
                .map(Step::Action)
                .map_err(|_| AppError::UnknownStep(other.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Action(action) => write!(f, "{}", action),
            Step::Back => write!(f, "back"),
            Step::Photo => write!(f, "photo"),
            Step::Save => write!(f, "save"),
            Step::Set { field, value } => write!(f, "{}={}", field, value),
        }
    }
}

pub fn parse_steps<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Step>, AppError> {
    steps.iter().map(|s| s.as_ref().parse()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailEntry {
    pub step: String,
    pub screen: ScreenId,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub start: ScreenId,
    pub trail: Vec<TrailEntry>,
    pub history: Vec<NavigationEntry>,
    /// `back` was issued on the root; steps after it were not run.
    pub root_reached: bool,
}

impl WalkReport {
    pub fn final_screen(&self) -> ScreenId {
        self.history
            .last()
            .map(|entry| entry.screen)
            .unwrap_or(self.start)
    }

    pub fn errors(&self) -> usize {
        self.trail.iter().filter(|t| t.error.is_some()).count()
    }
}

/// Replay `steps` from `start`. Failed steps are recorded in the trail and
/// the walk continues from the unchanged screen.
pub fn walk(config: &AppConfig, start: ScreenId, steps: &[Step]) -> anyhow::Result<WalkReport> {
    let mut flow = Flow::new(HeadlessRenderer::new(), Box::new(config.backend()));
    flow.start(start)?;

    let mut trail = Vec::with_capacity(steps.len());
    let mut root_reached = false;
    for step in steps {
        let error = match apply(&mut flow, step) {
            Ok(()) => None,
            Err(StepError::Flow(err)) if err.is_empty_stack() => {
                log::info!("🚶 back on root, walk ends");
                root_reached = true;
                None
            }
            Err(err) => {
                log::warn!("🚶 step {} failed: {}", step, err);
                Some(err.to_string())
            }
        };

        let screen = flow.current_screen()?;
        let save_visible =
            (screen == ScreenId::ProfileSettings).then(|| flow.renderer().save_visible());
        trail.push(TrailEntry {
            step: step.to_string(),
            screen,
            depth: flow.navigator().depth(),
            save_visible,
            error,
        });
        if root_reached {
            break;
        }
    }

    Ok(WalkReport {
        start,
        trail,
        history: flow.navigator().history().to_vec(),
        root_reached,
    })
}

enum StepError {
    Flow(FlowError),
    App(AppError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Flow(err) => write!(f, "{}", err),
            StepError::App(err) => write!(f, "{}", err),
        }
    }
}

impl From<FlowError> for StepError {
    fn from(err: FlowError) -> Self {
        StepError::Flow(err)
    }
}

fn apply(flow: &mut Flow<HeadlessRenderer>, step: &Step) -> Result<(), StepError> {
    match step {
        Step::Action(action) => {
            flow.dispatch(*action)?;
        }
        Step::Back => {
            flow.back()?;
        }
        Step::Photo => {
            flow.photo_changed()?;
        }
        Step::Save => flow.save_profile()?,
        Step::Set { field, value } => {
            let screen = flow.current_screen()?;
            if !screen.fields().contains(field) {
                return Err(StepError::App(AppError::FieldNotOnScreen {
                    field: *field,
                    screen,
                }));
            }
            flow.renderer_mut().type_into(*field, value);
            if screen == ScreenId::ProfileSettings {
                flow.field_changed()?;
            }
        }
    }
    Ok(())
}

/// Human-readable trail, one line per step.
pub fn render_text(report: &WalkReport) -> String {
    let mut lines = vec![format!("start: {}", report.start)];
    for (index, entry) in report.trail.iter().enumerate() {
        let mut line = format!(
            "{:>2}. {} -> {} [depth {}]",
            index + 1,
            entry.step,
            entry.screen,
            entry.depth
        );
        if let Some(visible) = entry.save_visible {
            line.push_str(if visible { " save shown" } else { " save hidden" });
        }
        if let Some(err) = &entry.error {
            line.push_str(&format!(" ! {}", err));
        }
        lines.push(line);
    }
    if report.root_reached {
        lines.push("root reached".to_string());
    }
    let history = report
        .history
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join(" > ");
    lines.push(format!("history: {}", history));
    lines.join("\n") + "\n"
}
