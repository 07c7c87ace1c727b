use crate::{
    constants::STDIN_INDICATOR,
    dialog::{DialogBackend, DialoguerBackend, ScriptedBackend},
    error::Result,
    factory::SharedFactory,
};
use log::debug;

/// Reads the `--answers` argument, taking stdin for `-`.
pub fn read_answers(answers_arg: &str, reader: impl std::io::Read) -> Result<String> {
    if answers_arg == STDIN_INDICATOR {
        read_from(reader)
    } else {
        Ok(answers_arg.to_string())
    }
}

fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Builds the factory for a run: scripted when answers are given, the
/// terminal otherwise.
pub fn build_factory(answers: Option<&str>) -> Result<SharedFactory> {
    let backend: Box<dyn DialogBackend + Send + Sync> = match answers {
        Some(answers_arg) => {
            let content = read_answers(answers_arg, std::io::stdin())?;
            debug!("Using scripted answers");
            Box::new(ScriptedBackend::from_json(&content)?)
        }
        None => Box::new(DialoguerBackend::new()),
    };
    Ok(SharedFactory::new(backend))
}
