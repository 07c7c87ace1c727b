//! Pure interfaces for dialogs without external dependencies

use super::pane::Pane;
use crate::error::Result;
use std::path::PathBuf;

/// An interactive form control embedded in a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Single choice out of a list of labels
    ComboBox { title: String, choices: Vec<String> },
    /// Free text input
    TextField { title: String, default: Option<String> },
    /// Hidden text input
    PasswordField { title: String },
    /// Yes / no toggle
    CheckBox { title: String, default: bool },
}

impl Control {
    pub fn combo_box<I, S>(title: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Control::ComboBox {
            title: title.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn text_field(title: impl Into<String>) -> Self {
        Control::TextField { title: title.into(), default: None }
    }

    pub fn text_field_with_default(
        title: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Control::TextField { title: title.into(), default: Some(default.into()) }
    }

    pub fn password_field(title: impl Into<String>) -> Self {
        Control::PasswordField { title: title.into() }
    }

    pub fn check_box(title: impl Into<String>, default: bool) -> Self {
        Control::CheckBox { title: title.into(), default }
    }

    pub fn title(&self) -> &str {
        match self {
            Control::ComboBox { title, .. }
            | Control::TextField { title, .. }
            | Control::PasswordField { title }
            | Control::CheckBox { title, .. } => title,
        }
    }

    /// Short name of the control kind, used in log and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Control::ComboBox { .. } => "combo box",
            Control::TextField { .. } => "text field",
            Control::PasswordField { .. } => "password field",
            Control::CheckBox { .. } => "check box",
        }
    }
}

/// Everything a backend needs to present one OK / Cancel dialog
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    pub title: String,
    pub controls: Vec<Control>,
    pub image: Option<PathBuf>,
    /// Whether the dialog offers a file drop target
    pub accepts_drop: bool,
}

impl DialogConfig {
    pub fn new(title: impl Into<String>, controls: Vec<Control>) -> Self {
        Self { title: title.into(), controls, image: None, accepts_drop: false }
    }
}

/// Abstract interface for presenting a modal dialog.
///
/// `show` blocks until the user confirms or cancels.
pub trait DialogBackend {
    fn show(&self, config: &DialogConfig) -> Result<Pane>;
}

impl<B: DialogBackend + ?Sized> DialogBackend for Box<B> {
    fn show(&self, config: &DialogConfig) -> Result<Pane> {
        (**self).show(config)
    }
}

impl<B: DialogBackend + ?Sized> DialogBackend for &B {
    fn show(&self, config: &DialogConfig) -> Result<Pane> {
        (**self).show(config)
    }
}
