//! Dialog backend answering from predefined responses
//!
//! Responses are keyed by dialog title. Useful for automation, testing, or
//! CI/CD environments where no terminal is attached.

use super::interface::{Control, DialogBackend, DialogConfig};
use super::pane::{ControlValue, Outcome, Pane};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Predefined answer for one dialog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptedResponse {
    #[serde(default = "default_confirm")]
    pub confirm: bool,
    /// Answers matched positionally to the dialog controls
    #[serde(default)]
    pub answers: Vec<ControlValue>,
    /// File dropped onto the dialog, if it offers a drop target
    #[serde(default)]
    pub drop: Option<PathBuf>,
}

fn default_confirm() -> bool {
    true
}

impl ScriptedResponse {
    pub fn confirm(answers: Vec<ControlValue>) -> Self {
        Self { confirm: true, answers, drop: None }
    }

    pub fn cancel() -> Self {
        Self { confirm: false, answers: Vec::new(), drop: None }
    }

    pub fn with_drop(mut self, path: impl Into<PathBuf>) -> Self {
        self.drop = Some(path.into());
        self
    }
}

/// Backend that gives predefined responses and records every dialog shown
#[derive(Debug)]
pub struct ScriptedBackend {
    responses: HashMap<String, ScriptedResponse>,
    default_confirm: bool,
    shown: Mutex<Vec<DialogConfig>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_confirm: true,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Parses a JSON object of dialog title to response
    pub fn from_json(content: &str) -> Result<Self> {
        let responses: HashMap<String, ScriptedResponse> = serde_json::from_str(content)?;
        Ok(Self { responses, ..Self::new() })
    }

    pub fn with_response(mut self, title: &str, response: ScriptedResponse) -> Self {
        self.responses.insert(title.to_string(), response);
        self
    }

    /// Confirm the dialog titled `title` with the given answers
    pub fn confirming(self, title: &str, answers: Vec<ControlValue>) -> Self {
        self.with_response(title, ScriptedResponse::confirm(answers))
    }

    /// Cancel the dialog titled `title`
    pub fn cancelling(self, title: &str) -> Self {
        self.with_response(title, ScriptedResponse::cancel())
    }

    /// Whether dialogs without a scripted response are confirmed
    pub fn with_default_confirm(mut self, confirm: bool) -> Self {
        self.default_confirm = confirm;
        self
    }

    /// Dialogs presented so far, oldest first
    pub fn shown(&self) -> Vec<DialogConfig> {
        self.shown.lock().map(|shown| shown.clone()).unwrap_or_default()
    }

    fn resolve_value(
        &self,
        control: &Control,
        answer: Option<&ControlValue>,
    ) -> Result<ControlValue> {
        let invalid = |reason: String| Error::InvalidAnswer {
            control: control.title().to_string(),
            reason,
        };

        match (control, answer) {
            (Control::ComboBox { choices, .. }, None) => choices
                .first()
                .cloned()
                .map(ControlValue::Text)
                .ok_or_else(|| invalid("combo box has no choices".to_string())),
            (Control::ComboBox { choices, .. }, Some(ControlValue::Text(label))) => {
                if choices.contains(label) {
                    Ok(ControlValue::Text(label.clone()))
                } else {
                    Err(invalid(format!("'{label}' is not one of the choices")))
                }
            }
            (Control::TextField { default, .. }, None) => {
                Ok(ControlValue::Text(default.clone().unwrap_or_default()))
            }
            (Control::PasswordField { .. }, None) => Ok(ControlValue::Text(String::new())),
            (Control::CheckBox { default, .. }, None) => Ok(ControlValue::Flag(*default)),
            (
                Control::TextField { .. } | Control::PasswordField { .. },
                Some(ControlValue::Text(text)),
            ) => Ok(ControlValue::Text(text.clone())),
            (Control::CheckBox { .. }, Some(ControlValue::Flag(flag))) => {
                Ok(ControlValue::Flag(*flag))
            }
            (control, Some(_)) => {
                Err(invalid(format!("answer does not fit a {}", control.kind())))
            }
        }
    }

    fn resolve_drop(
        &self,
        config: &DialogConfig,
        response: &ScriptedResponse,
    ) -> Result<Option<PathBuf>> {
        match &response.drop {
            Some(path) if !config.accepts_drop => Err(Error::InvalidAnswer {
                control: config.title.clone(),
                reason: format!("dialog has no drop target for '{}'", path.display()),
            }),
            Some(path) if !path.is_file() => Err(Error::InvalidAnswer {
                control: config.title.clone(),
                reason: format!("'{}' is not a file", path.display()),
            }),
            drop => Ok(drop.clone()),
        }
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogBackend for ScriptedBackend {
    fn show(&self, config: &DialogConfig) -> Result<Pane> {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(config.clone());
        }

        let response = self.responses.get(&config.title).cloned().unwrap_or_else(|| {
            debug!("No scripted response for '{}', using defaults", config.title);
            ScriptedResponse {
                confirm: self.default_confirm,
                answers: Vec::new(),
                drop: None,
            }
        });

        if response.answers.len() > config.controls.len() {
            return Err(Error::InvalidAnswer {
                control: config.title.clone(),
                reason: format!(
                    "{} answers given for {} controls",
                    response.answers.len(),
                    config.controls.len()
                ),
            });
        }

        let values = config
            .controls
            .iter()
            .enumerate()
            .map(|(index, control)| self.resolve_value(control, response.answers.get(index)))
            .collect::<Result<Vec<_>>>()?;
        let dropped_file = self.resolve_drop(config, &response)?;

        let outcome = if response.confirm { Outcome::Confirmed } else { Outcome::Cancelled };
        debug!("Scripted dialog '{}' resolved as {:?}", config.title, outcome);
        Ok(Pane::new(config, outcome, values, dropped_file))
    }
}
