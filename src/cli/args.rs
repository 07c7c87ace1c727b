use crate::constants::verbosity;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Present modal selector and form dialogs from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Scripted answers as JSON string or `-` to read from stdin.
    #[arg(short, long, global = true)]
    pub answers: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Pick one item out of a list.
    Select(SelectArgs),
    /// Fill in a form and print its values as JSON.
    Form(FormArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct SelectArgs {
    /// Items to choose from.
    #[arg(value_name = "ITEM", required = true)]
    pub items: Vec<String>,

    /// Dialog title.
    #[arg(long)]
    pub title: Option<String>,

    /// Title of the choice list.
    #[arg(long = "combo-title")]
    pub combo_title: Option<String>,
}

/// Form controls are laid out as choices, fields, secrets, then flags.
#[derive(clap::Args, Debug, Clone)]
pub struct FormArgs {
    /// Dialog title.
    #[arg(long)]
    pub title: String,

    /// Choice list as `NAME=a,b,c`.
    #[arg(long = "choice", value_parser = parse_choice)]
    pub choices: Vec<ChoiceArg>,

    /// Text field name.
    #[arg(long = "field")]
    pub fields: Vec<String>,

    /// Password field name.
    #[arg(long = "secret")]
    pub secrets: Vec<String>,

    /// Check box name.
    #[arg(long = "flag")]
    pub flags: Vec<String>,

    /// Image shown above the form.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Offer a file drop target.
    #[arg(long = "accept-file")]
    pub accept_file: bool,
}

/// A `--choice NAME=a,b,c` argument
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceArg {
    pub name: String,
    pub options: Vec<String>,
}

fn parse_choice(raw: &str) -> std::result::Result<ChoiceArg, String> {
    let (name, options) =
        raw.split_once('=').ok_or_else(|| format!("expected NAME=a,b,c, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing choice name in '{raw}'"));
    }
    let options: Vec<String> = options
        .split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(String::from)
        .collect();
    if options.is_empty() {
        return Err(format!("choice '{name}' has no options"));
    }
    Ok(ChoiceArg { name: name.to_string(), options })
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
