//! The completed dialog handed back by a backend

use super::interface::{Control, DialogConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// How the user left the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Confirmed,
    Cancelled,
}

/// Value held by a single control once the dialog is resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Text(String),
    Flag(bool),
}

impl ControlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Text(text) => Some(text),
            ControlValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ControlValue::Flag(flag) => Some(*flag),
            ControlValue::Text(_) => None,
        }
    }
}

/// A resolved dialog: its outcome plus one value per answered control.
///
/// Controls are queried by kind and position, so `combo_box_text(0)` is the
/// value of the first combo box no matter where it sits among the others.
/// A cancelled dialog may hold fewer values than controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    title: String,
    outcome: Outcome,
    controls: Vec<Control>,
    values: Vec<ControlValue>,
    dropped_file: Option<PathBuf>,
}

impl Pane {
    pub fn new(
        config: &DialogConfig,
        outcome: Outcome,
        values: Vec<ControlValue>,
        dropped_file: Option<PathBuf>,
    ) -> Self {
        Self {
            title: config.title.clone(),
            outcome,
            controls: config.controls.clone(),
            values,
            dropped_file,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn said_yes(&self) -> bool {
        self.outcome == Outcome::Confirmed
    }

    pub fn did_cancel(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn combo_box_text(&self, index: usize) -> Option<&str> {
        self.nth_value(index, |c| matches!(c, Control::ComboBox { .. }))
            .and_then(ControlValue::as_text)
    }

    pub fn text_field_text(&self, index: usize) -> Option<&str> {
        self.nth_value(index, |c| matches!(c, Control::TextField { .. }))
            .and_then(ControlValue::as_text)
    }

    pub fn password_text(&self, index: usize) -> Option<&str> {
        self.nth_value(index, |c| matches!(c, Control::PasswordField { .. }))
            .and_then(ControlValue::as_text)
    }

    pub fn check_box_value(&self, index: usize) -> Option<bool> {
        self.nth_value(index, |c| matches!(c, Control::CheckBox { .. }))
            .and_then(ControlValue::as_flag)
    }

    /// Value of the first control carrying `title`
    pub fn value_of(&self, title: &str) -> Option<&ControlValue> {
        self.controls
            .iter()
            .zip(&self.values)
            .find(|(control, _)| control.title() == title)
            .map(|(_, value)| value)
    }

    pub fn dropped_file(&self) -> Option<&Path> {
        self.dropped_file.as_deref()
    }

    /// JSON object of control title to value; passwords are left out.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (control, value) in self.controls.iter().zip(&self.values) {
            if matches!(control, Control::PasswordField { .. }) {
                continue;
            }
            let value = match value {
                ControlValue::Text(text) => Value::String(text.clone()),
                ControlValue::Flag(flag) => Value::Bool(*flag),
            };
            map.insert(control.title().to_string(), value);
        }
        if let Some(path) = &self.dropped_file {
            map.insert(
                "dropped_file".to_string(),
                Value::String(path.display().to_string()),
            );
        }
        Value::Object(map)
    }

    fn nth_value<F>(&self, index: usize, is_kind: F) -> Option<&ControlValue>
    where
        F: Fn(&Control) -> bool,
    {
        self.controls
            .iter()
            .zip(&self.values)
            .filter(|(control, _)| is_kind(*control))
            .nth(index)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form_config() -> DialogConfig {
        DialogConfig::new(
            "Account",
            vec![
                Control::text_field("Name"),
                Control::combo_box("Plan", ["free", "pro"]),
                Control::password_field("Password"),
                Control::text_field("Email"),
                Control::check_box("Newsletter", false),
            ],
        )
    }

    fn form_values() -> Vec<ControlValue> {
        vec![
            ControlValue::Text("Ada".to_string()),
            ControlValue::Text("pro".to_string()),
            ControlValue::Text("hunter2".to_string()),
            ControlValue::Text("ada@example.com".to_string()),
            ControlValue::Flag(true),
        ]
    }

    #[test]
    fn queries_controls_by_kind_and_position() {
        let pane = Pane::new(&form_config(), Outcome::Confirmed, form_values(), None);

        assert!(pane.said_yes());
        assert!(!pane.did_cancel());
        assert_eq!(pane.combo_box_text(0), Some("pro"));
        assert_eq!(pane.text_field_text(0), Some("Ada"));
        assert_eq!(pane.text_field_text(1), Some("ada@example.com"));
        assert_eq!(pane.text_field_text(2), None);
        assert_eq!(pane.password_text(0), Some("hunter2"));
        assert_eq!(pane.check_box_value(0), Some(true));
        assert_eq!(pane.value_of("Plan"), Some(&ControlValue::Text("pro".to_string())));
    }

    #[test]
    fn cancelled_pane_may_be_partial() {
        let pane = Pane::new(
            &form_config(),
            Outcome::Cancelled,
            vec![ControlValue::Text("Ada".to_string())],
            None,
        );

        assert!(pane.did_cancel());
        assert_eq!(pane.text_field_text(0), Some("Ada"));
        assert_eq!(pane.combo_box_text(0), None);
        assert_eq!(pane.check_box_value(0), None);
    }

    #[test]
    fn json_export_skips_passwords() {
        let pane = Pane::new(
            &form_config(),
            Outcome::Confirmed,
            form_values(),
            Some(PathBuf::from("notes.txt")),
        );

        assert_eq!(
            pane.to_json(),
            json!({
                "Name": "Ada",
                "Plan": "pro",
                "Email": "ada@example.com",
                "Newsletter": true,
                "dropped_file": "notes.txt",
            })
        );
    }

    #[test]
    fn outcome_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Outcome::Cancelled).unwrap(), json!("cancelled"));
    }
}
