//! Dialoguer-based implementation of the dialog backend
//!
//! A modal dialog becomes a sequence of terminal prompts: a header line with
//! the title, one prompt per control and a final OK / Cancel confirmation.
//! Pressing Escape on a choice or on the final confirmation cancels.

use super::interface::{Control, DialogBackend, DialogConfig};
use super::pane::{ControlValue, Outcome, Pane};
use crate::{
    constants::{CONFIRM_PROMPT_SUFFIX, DROP_PROMPT, FUZZY_SELECT_THRESHOLD},
    error::Result,
};
use ::dialoguer::{Confirm, FuzzySelect, Input, Password, Select};
use log::debug;
use std::path::{Path, PathBuf};

/// Terminal implementation of [`DialogBackend`]
pub struct DialoguerBackend;

impl DialoguerBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogBackend for DialoguerBackend {
    fn show(&self, config: &DialogConfig) -> Result<Pane> {
        eprintln!("== {} ==", config.title);
        if let Some(image) = &config.image {
            eprintln!("[image: {}]", image.display());
        }

        let mut values = Vec::with_capacity(config.controls.len());
        for control in &config.controls {
            match self.prompt_control(control)? {
                Some(value) => values.push(value),
                None => {
                    debug!("Dialog '{}' cancelled at '{}'", config.title, control.title());
                    return Ok(Pane::new(config, Outcome::Cancelled, values, None));
                }
            }
        }

        let dropped_file =
            if config.accepts_drop { self.prompt_drop_target()? } else { None };

        let confirmed = Confirm::new()
            .with_prompt(format!("{} {}", config.title, CONFIRM_PROMPT_SUFFIX))
            .default(true)
            .interact_opt()?
            .unwrap_or(false);

        let outcome = if confirmed { Outcome::Confirmed } else { Outcome::Cancelled };
        Ok(Pane::new(config, outcome, values, dropped_file))
    }
}

impl DialoguerBackend {
    /// Prompts for a single control; `None` means the user escaped out
    fn prompt_control(&self, control: &Control) -> Result<Option<ControlValue>> {
        let value = match control {
            Control::ComboBox { title, choices } => {
                let selection = if choices.len() > FUZZY_SELECT_THRESHOLD {
                    FuzzySelect::new()
                        .with_prompt(title)
                        .items(choices)
                        .default(0)
                        .interact_opt()?
                } else {
                    Select::new().with_prompt(title).items(choices).default(0).interact_opt()?
                };
                match selection {
                    Some(index) => ControlValue::Text(choices[index].clone()),
                    None => return Ok(None),
                }
            }
            Control::TextField { title, default } => {
                let mut input = Input::<String>::new().with_prompt(title).allow_empty(true);
                if let Some(default) = default {
                    input = input.default(default.clone());
                }
                ControlValue::Text(input.interact_text()?)
            }
            Control::PasswordField { title } => ControlValue::Text(
                Password::new().with_prompt(title).allow_empty_password(true).interact()?,
            ),
            Control::CheckBox { title, default } => ControlValue::Flag(
                Confirm::new().with_prompt(title).default(*default).interact()?,
            ),
        };
        Ok(Some(value))
    }

    /// Asks for a file path standing in for a drag and drop gesture
    fn prompt_drop_target(&self) -> Result<Option<PathBuf>> {
        let raw: String = Input::new()
            .with_prompt(DROP_PROMPT)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                let trimmed = input.trim();
                if trimmed.is_empty() || Path::new(trimmed).is_file() {
                    Ok(())
                } else {
                    Err(format!("'{trimmed}' is not a file"))
                }
            })
            .interact_text()?;

        let trimmed = raw.trim();
        Ok(if trimmed.is_empty() { None } else { Some(PathBuf::from(trimmed)) })
    }
}
