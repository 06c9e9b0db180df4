use anyhow::Result;
use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::control::set_override as set_color_override;
use colored::Colorize;
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use test_cmd::discovery::discover_cases;
use test_cmd::engine::run_cases;
use test_cmd::i18n;
use test_cmd::report::render_listing;
use test_cmd::runner::CommandRunner;
use test_cmd::{t, t_args};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = t!("cli-about"))]
struct Cli {
    #[arg(value_name = "COMMAND", help = t!("cli-command"))]
    cmd: PathBuf,

    #[arg(value_name = "TESTS_DIR", help = t!("cli-tests-dir"))]
    tests_dir: PathBuf,

    #[arg(short = 'v', long = "verbose", help = t!("cli-verbose"))]
    verbose: bool,

    #[arg(long = "no-color", help = t!("cli-no-color"))]
    no_color: bool,

    #[arg(short = 'l', long = "list", help = t!("cli-list"))]
    list: bool,
}

/// Make CLI flags at the start of a line bold
fn format_flags_bold(text: &str) -> String {
    let flag_regex = match Regex::new(r"(?m)^(\s*)(--?\w[\w-]*)") {
        Ok(re) => re,
        Err(_) => return text.to_string(),
    };
    flag_regex
        .replace_all(text, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], caps[2].bold())
        })
        .to_string()
}

fn localize_clap_text(text: &str) -> String {
    let mut msg = text.to_string();
    msg = msg.replace("Usage:", &t!("cli-error-usage").bold().underline().to_string());
    msg = msg.replace("Arguments:", &t!("cli-help-arguments").bold().underline().to_string());
    msg = msg.replace("Options:", &t!("cli-help-options").bold().underline().to_string());
    msg = msg.replace("For more information, try '--help'.", &t!("cli-error-help-info"));
    msg = msg.replace("error:", &t!("cli-error-label").red().bold().to_string());
    msg = msg.replace("tip:", &t!("cli-tip-label"));
    msg = msg.replace("unexpected argument", &t!("cli-unexpected-argument"));
    msg = msg.replace(
        "the following required arguments were not provided:",
        &t!("cli-error-missing-args"),
    );
    msg = msg.replace("invalid value", &t!("cli-error-invalid-value"));
    msg = msg.replace("Print help", &t!("cli-help-print-help"));
    msg = msg.replace("Print version", &t!("cli-help-print-version"));
    format_flags_bold(&msg)
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp => {
                let help = Cli::command().render_long_help().to_string();
                println!("{}", localize_clap_text(&help));
                std::process::exit(0);
            }
            ErrorKind::DisplayVersion => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            _ => {
                eprintln!("{}", localize_clap_text(&error.to_string()));
                std::process::exit(2);
            }
        },
    }
}

fn main() -> Result<ExitCode> {
    i18n::init();
    let cli = parse_cli();

    // RUST_LOG wins; otherwise -v shows info, default only warnings and errors
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "test_cmd=info".to_string()
        } else {
            "test_cmd=warn".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    set_color_override(!cli.no_color);

    if !cli.cmd.is_file() {
        println!("{}", t_args!("error-command-missing", "path" => cli.cmd.display()));
        return Ok(ExitCode::FAILURE);
    }
    if !cli.tests_dir.is_dir() {
        println!("{}", t_args!("error-directory-missing", "path" => cli.tests_dir.display()));
        return Ok(ExitCode::FAILURE);
    }

    info!("{}", t_args!("info-command", "path" => cli.cmd.display()));
    info!("{}", t_args!("info-tests-dir", "path" => cli.tests_dir.display()));

    let cases = discover_cases(&cli.tests_dir)?;
    info!("{}", t_args!("info-discovered", "count" => cases.len()));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        write!(out, "{}", render_listing(&cases))?;
        return Ok(ExitCode::SUCCESS);
    }

    let runner = CommandRunner::new(&cli.cmd);
    let summary = run_cases(&runner, &cases, &mut out)?;
    out.flush()?;

    info!(
        "{}",
        t_args!("info-finished",
            "passed" => summary.passed,
            "failed" => summary.failed,
            "missing" => summary.missing
        )
    );

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
