use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use msptools::LinalgError;
use msptools_cli::solve::input::SolveConfig;
use msptools_cli::solve::runner::run_solve;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MSPTOOLS_LOG", "error,msptools=info"))
        .init();

    let matches = Command::new("msptools")
        .version(clap::crate_version!())
        .about("Solve A*x = b from whitespace-delimited text files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("A")
                .help("Path to the coefficient matrix, one row per line")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("b")
                .help("Path to the right-hand side vector")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("x")
                .help("Path the solution vector is written to")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("method")
                .short('m')
                .long("method")
                .help(
                    "Solver to use: 'gesv' for square systems, 'gels' for least squares. \
                     Overrides the method specified in the configuration file.",
                )
                .value_parser(["gesv", "gels"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON solve configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .help("Print A, b and the solution to stdout.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let config_path: Option<&PathBuf> = matches.get_one("config");
    if let Some(path) = config_path {
        log::info!("[msptools] Using config: {:?}", path);
    }
    let config = match SolveConfig::from_arguments(config_path, &matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    };

    match run_solve(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            let status = e
                .downcast_ref::<LinalgError>()
                .map(LinalgError::status)
                .unwrap_or(1);
            log::error!("{:#} (status {})", e, status);
            std::process::exit(1)
        }
    }
}
