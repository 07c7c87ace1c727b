use crate::{
    bubble::Bubble,
    cli::{Commands, FormArgs, SelectArgs},
    dialog::{Control, DialogBackend},
    error::Result,
    factory::BubbleFactory,
};
use log::info;

/// Runs one CLI command against a factory
pub struct Runner<'f, B> {
    command: Commands,
    factory: &'f BubbleFactory<B>,
}

impl<'f, B: DialogBackend> Runner<'f, B> {
    pub fn new(command: Commands, factory: &'f BubbleFactory<B>) -> Self {
        Self { command, factory }
    }

    /// Shows the dialog and returns what should be printed, or `None` when
    /// the user cancelled.
    pub fn run(self) -> Result<Option<String>> {
        match &self.command {
            Commands::Select(args) => self.select(args),
            Commands::Form(args) => self.form(args),
        }
    }

    fn select(&self, args: &SelectArgs) -> Result<Option<String>> {
        let mut bubble = self.factory.selector_with(
            args.items.iter().cloned(),
            args.title.as_deref(),
            args.combo_title.as_deref(),
        )?;

        let mut chosen = None;
        bubble.on_blow(|item| chosen = Some(item))?;
        Ok(chosen)
    }

    fn form(&self, args: &FormArgs) -> Result<Option<String>> {
        let mut builder = self
            .factory
            .controller_builder(args.title.as_str())
            .controls(self.form_controls(args))
            .on_pop(|pane| info!("Form '{}' dismissed", pane.title()));

        if let Some(image) = &args.image {
            builder = builder.image(image);
        }
        if args.accept_file {
            builder = builder.on_drop(|path| info!("Received file {}", path.display()));
        }

        let mut bubble = builder.show()?;
        let mut output = None;
        bubble.on_blow(|pane| output = Some(pane.to_json()))?;

        output.map(|json| serde_json::to_string_pretty(&json)).transpose().map_err(Into::into)
    }

    fn form_controls(&self, args: &FormArgs) -> Vec<Control> {
        let choices =
            args.choices.iter().map(|choice| Control::combo_box(&choice.name, &choice.options));
        let fields = args.fields.iter().map(|field| Control::text_field(field));
        let secrets = args.secrets.iter().map(|secret| Control::password_field(secret));
        let flags = args.flags.iter().map(|flag| Control::check_box(flag, false));

        choices.chain(fields).chain(secrets).chain(flags).collect()
    }
}

/// Runs `command` against the process-wide factory.
pub fn run(command: Commands) -> Result<Option<String>> {
    let factory = crate::factory::instance()?;
    Runner::new(command, factory).run()
}
