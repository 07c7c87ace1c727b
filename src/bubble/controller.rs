use super::{Bubble, BubbleType};
use crate::{
    dialog::Pane,
    error::{Error, Result},
};
use log::debug;
use std::fmt;
use std::path::Path;

/// Called with the dialog when a controller bubble is popped
pub type PopHandler = Box<dyn FnMut(&Pane)>;

/// Called with the file dropped onto a controller dialog
pub type DropHandler = Box<dyn FnMut(&Path)>;

/// Bubble presenting an arbitrary form of controls.
///
/// Blowing it hands a copy of the completed [`Pane`] to the consumer, so the
/// caller can query individual control values.
pub struct ControllerBubble {
    pane: Pane,
    on_pop: Option<PopHandler>,
    blown: bool,
}

impl ControllerBubble {
    pub(crate) fn new(pane: Pane, on_pop: Option<PopHandler>) -> Self {
        Self { pane, on_pop, blown: false }
    }

    pub fn pane(&self) -> &Pane {
        &self.pane
    }
}

impl fmt::Debug for ControllerBubble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerBubble")
            .field("pane", &self.pane)
            .field("supports_pop", &self.on_pop.is_some())
            .field("blown", &self.blown)
            .finish()
    }
}

impl Bubble<Pane> for ControllerBubble {
    /// Runs the pop handler; a no-op when none was given.
    fn pop(&mut self) -> Result<()> {
        match self.on_pop.as_mut() {
            Some(on_pop) => on_pop(&self.pane),
            None => debug!("Controller '{}' has no pop handler", self.pane.title()),
        }
        Ok(())
    }

    fn supports_pop(&self) -> bool {
        self.on_pop.is_some()
    }

    fn bubble_type(&self) -> BubbleType {
        BubbleType::Controller
    }

    fn is_confirmed(&self) -> bool {
        self.pane.said_yes()
    }

    fn blow(&mut self, consumer: Box<dyn FnOnce(Pane) + '_>) -> Result<()> {
        if self.blown {
            return Err(Error::AlreadyBlown);
        }
        self.blown = true;

        if self.pane.said_yes() {
            consumer(self.pane.clone());
        }
        Ok(())
    }
}
