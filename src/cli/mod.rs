pub mod answers;
pub mod args;
pub mod runner;

pub use answers::{build_factory, read_answers};
pub use args::{
    get_log_level_from_verbose, parse_cli, ChoiceArg, Cli, Commands, FormArgs, SelectArgs,
};
pub use runner::{run, Runner};
