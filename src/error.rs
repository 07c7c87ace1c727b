use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse answers. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// When the terminal dialog could not be drawn or read.
    #[error("Dialog failed. Original error: {0}")]
    DialogError(#[from] dialoguer::Error),

    #[error("Cannot build a selector from an empty collection.")]
    EmptyCollection,

    #[error("Required argument '{0}' is missing.")]
    MissingArgument(&'static str),

    /// Raised by `pop` on bubbles that cannot be dismissed.
    #[error("Operation '{operation}' is not supported by {bubble} bubbles.")]
    UnsupportedOperation { operation: &'static str, bubble: String },

    #[error("Bubble has already been blown.")]
    AlreadyBlown,

    #[error("No bubble factory has been installed.")]
    NotInstalled,

    #[error("A bubble factory is already installed.")]
    AlreadyInstalled,

    /// Represents an answer that does not fit the control it was given to.
    #[error("Invalid answer for '{control}': {reason}.")]
    InvalidAnswer { control: String, reason: String },
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
