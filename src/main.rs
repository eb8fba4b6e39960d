use clap::{builder::FalseyValueParser, Parser};
use std::{path::PathBuf, process};
use vcfreport::{
    report::{run, Outcome, ReportOptions},
    status::ExitStatus,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarize VCF variants as a tab-delimited gene/condition report",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Input VCF, plain text or gzip/bgzip compressed.
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Output report path.
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Exit with 3 when no variants were found and 4 on a malformed line,
    /// instead of the legacy 1 for both. Must come before the paths.
    #[arg(
        long,
        env = "VCFREPORT_DISTINCT_EXIT_CODES",
        value_parser = FalseyValueParser::new()
    )]
    distinct_exit_codes: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // anything but two paths is a silent usage error, `--help` included
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("invalid arguments: {}", e);
            process::exit(ExitStatus::Usage.code(false));
        }
    };

    let options = ReportOptions {
        input: cli.input,
        output: cli.output,
    };
    let status = match run(&options) {
        Ok(outcome) => {
            match outcome {
                Outcome::Written(count) => println!(
                    "Parsing complete. {} variants written to {}.",
                    count,
                    options.output.display()
                ),
                Outcome::Empty => println!("No variants found."),
            }
            ExitStatus::from_outcome(&outcome)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::from_error(&e)
        }
    };
    log::info!("finished with {:?}", status);
    process::exit(status.code(cli.distinct_exit_codes));
}
