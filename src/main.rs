use bubbles::{
    cli::{build_factory, get_log_level_from_verbose, parse_cli, run},
    constants::exit_codes,
    error::default_error_handler,
    factory,
};

fn main() {
    let cli = parse_cli();
    let lvl = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    let result = build_factory(cli.answers.as_deref())
        .and_then(factory::install)
        .and_then(|_| run(cli.command));

    match result {
        Ok(Some(output)) => println!("{output}"),
        // Cancelled by the user
        Ok(None) => std::process::exit(exit_codes::FAILURE),
        Err(err) => default_error_handler(err),
    }
}
