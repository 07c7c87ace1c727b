use super::{Bubble, BubbleType};
use crate::{
    dialog::Pane,
    error::{Error, Result},
};
use indexmap::IndexMap;
use log::debug;

/// Bubble presenting a single-choice list. Never supports popping.
#[derive(Debug)]
pub struct SelectorBubble<T> {
    pane: Pane,
    references: IndexMap<String, Option<T>>,
    blown: bool,
}

impl<T> SelectorBubble<T> {
    pub(crate) fn new(pane: Pane, references: IndexMap<String, Option<T>>) -> Self {
        Self { pane, references, blown: false }
    }

    /// Label the user picked, if the dialog was confirmed
    pub fn selected_label(&self) -> Option<&str> {
        if self.pane.said_yes() {
            self.pane.combo_box_text(0)
        } else {
            None
        }
    }

    /// Labels offered to the user, in presentation order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(String::as_str)
    }

    pub fn pane(&self) -> &Pane {
        &self.pane
    }
}

impl<T> Bubble<T> for SelectorBubble<T> {
    fn pop(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation {
            operation: "pop",
            bubble: BubbleType::Selector.to_string(),
        })
    }

    fn supports_pop(&self) -> bool {
        false
    }

    fn bubble_type(&self) -> BubbleType {
        BubbleType::Selector
    }

    fn is_confirmed(&self) -> bool {
        self.pane.said_yes()
    }

    fn blow(&mut self, consumer: Box<dyn FnOnce(T) + '_>) -> Result<()> {
        if self.blown {
            return Err(Error::AlreadyBlown);
        }
        self.blown = true;

        if !self.pane.said_yes() {
            debug!("Selector '{}' was cancelled", self.pane.title());
            return Ok(());
        }

        let label = self.pane.combo_box_text(0).unwrap_or_default();
        let value = self.references.get_mut(label).and_then(Option::take).ok_or_else(|| {
            Error::InvalidAnswer {
                control: self.pane.title().to_string(),
                reason: format!("'{label}' is not one of the choices"),
            }
        })?;
        consumer(value);
        Ok(())
    }
}
