use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use mathvector_cli::eval::run_job;
use mathvector_cli::input::JobConfig;

const OPERATION_HELP: &str =
    "Operation to apply: render, transpose, scale, add, dot_product (dot), magnitude, normalize";

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATHVECTOR_LOG", "error,mathvector=info"))
        .init();

    let matches = Command::new("mathvector")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Row and column vector arithmetic from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("eval")
                .about("Apply an operation to vectors given on the command line")
                .arg(
                    Arg::new("operation")
                        .help(OPERATION_HELP)
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("lhs")
                        .short('a')
                        .long("lhs")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Left-hand operand as comma- or space-separated numbers, e.g. \"3,1,2\""),
                )
                .arg(
                    Arg::new("lhs_orientation")
                        .long("lhs-orientation")
                        .value_parser(["row", "column", "col"])
                        .default_value("row")
                        .help("Orientation of the left-hand operand"),
                )
                .arg(
                    Arg::new("rhs")
                        .short('b')
                        .long("rhs")
                        .allow_hyphen_values(true)
                        .help("Right-hand operand for add and dot_product"),
                )
                .arg(
                    Arg::new("rhs_orientation")
                        .long("rhs-orientation")
                        .value_parser(["row", "column", "col"])
                        .default_value("row")
                        .help("Orientation of the right-hand operand"),
                )
                .arg(
                    Arg::new("factor")
                        .short('f')
                        .long("factor")
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(f64))
                        .help("Scaling factor for the scale operation (default 1.0)"),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Evaluate a JSON job file")
                .arg(
                    Arg::new("config")
                        .help("Path to the job configuration file. Prints a template when omitted.")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("operation")
                        .short('o')
                        .long("operation")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Overrides the operation in the configuration file."),
                )
                .arg(
                    Arg::new("factor")
                        .short('f')
                        .long("factor")
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(f64))
                        .help("Overrides the scaling factor in the configuration file."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("eval", eval_matches)) => handle_eval(eval_matches),
        Some(("run", run_matches)) => handle_run(run_matches),
        _ => unreachable!(),
    }
}

fn handle_eval(matches: &ArgMatches) -> Result<()> {
    let config = JobConfig::from_eval_arguments(matches)?;
    let outcome = run_job(&config)?;
    println!("{}", outcome);
    Ok(())
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let Some(config_path) = matches.get_one::<PathBuf>("config") else {
        let template = serde_json::to_string_pretty(&JobConfig::default())?;
        eprintln!("[MathVector::Run] No config file provided; printing a template job.");
        println!("{}", template);
        return Ok(());
    };

    log::info!("[MathVector::Run] Evaluating job from config: {:?}", config_path);
    let config = JobConfig::from_arguments(config_path, matches)?;
    let outcome = run_job(&config)?;
    println!("{}", outcome);
    Ok(())
}
