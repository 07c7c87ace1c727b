//! Bubbles display some idea to an end user.
//!
//! A bubble can be *popped*, which removes it from the screen, and *blown*,
//! which means the user is done with it. Blowing a selector hands over the
//! selected object; blowing a controller hands over the completed [`Pane`].
//!
//! [`Pane`]: crate::dialog::Pane

pub mod controller;
pub mod selector;

pub use controller::{ControllerBubble, DropHandler, PopHandler};
pub use selector::SelectorBubble;

use crate::error::Result;
use std::fmt::Display;

/// Which construction path produced a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BubbleType {
    Selector,
    Controller,
}

impl Display for BubbleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BubbleType::Selector => "selector",
            BubbleType::Controller => "controller",
        };
        write!(f, "{s}")
    }
}

/// A pending or completed modal interaction resolving to a `T`.
///
/// The dialog behind a bubble is already resolved when the bubble is handed
/// out, so every operation here is synchronous.
pub trait Bubble<T> {
    /// Deletes the bubble from the screen.
    fn pop(&mut self) -> Result<()>;

    /// Whether the bubble supports popping.
    fn supports_pop(&self) -> bool;

    fn bubble_type(&self) -> BubbleType;

    /// Whether the user confirmed the dialog.
    fn is_confirmed(&self) -> bool;

    /// Calls `consumer` with the result if the user confirmed the dialog.
    ///
    /// Single-fire: the first call consumes the result, any later call fails
    /// with [`Error::AlreadyBlown`] without calling `consumer`. A cancelled
    /// bubble never calls `consumer`.
    ///
    /// [`Error::AlreadyBlown`]: crate::error::Error::AlreadyBlown
    fn blow(&mut self, consumer: Box<dyn FnOnce(T) + '_>) -> Result<()>;

    /// Unboxed form of [`Bubble::blow`].
    fn on_blow<F>(&mut self, consumer: F) -> Result<()>
    where
        F: FnOnce(T),
        Self: Sized,
    {
        self.blow(Box::new(consumer))
    }
}
