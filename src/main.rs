use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use std::path::PathBuf;

use mdhtml_lib::config::{self as mdhtml_config, Config};
use mdhtml_lib::exit_codes::exit;
use mdhtml_lib::file_processor::{self, ConvertError};

const USAGE: &str = "Usage: mdhtml README.md README.html";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markdown source file followed by the HTML destination file
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(long, help = "Path to configuration file")]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(long, help = "Ignore all configuration files and use built-in defaults")]
    isolated: bool,

    /// Write a default .mdhtml.toml in the current directory and exit
    #[arg(long)]
    init: bool,

    /// Print the conversion stages in the order they run and exit
    #[arg(long)]
    list_stages: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Control colored output: auto, always, never
    #[arg(long, default_value = "auto", value_parser = ["auto", "always", "never"])]
    color: String,
}

fn init_logging(verbose: bool, config: &Config) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level_filter().unwrap_or(log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(level) = &config.global.log_level
        && config.log_level_filter().is_none()
    {
        log::warn!("Ignoring invalid log-level in configuration: {level}");
    }
}

fn report_convert_error(err: &ConvertError) -> ! {
    match err {
        ConvertError::SourceMissing { .. } => eprintln!("{err}"),
        ConvertError::ProcessingFailed { .. } => eprintln!("{}: {}", "Error".red().bold(), err),
    }
    exit::failure();
}

fn handle_init_command() -> ! {
    let path = mdhtml_config::CONFIG_FILES[0];
    match mdhtml_config::create_default_config(path) {
        Ok(()) => {
            println!("Created default configuration file: {path}");
            exit::success();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::failure();
        }
    }
}

fn handle_list_stages_command() -> ! {
    for stage in mdhtml_lib::all_stages() {
        println!("{:<16} {}", stage.name().cyan(), stage.description());
    }
    exit::success();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{e}");
            eprintln!("{USAGE}");
            exit::failure();
        }
    };

    // Set color override globally based on --color flag
    match cli.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::unset_override(),
    }

    if cli.init {
        handle_init_command();
    }
    if cli.list_stages {
        handle_list_stages_command();
    }

    let [source, destination, extra @ ..] = cli.paths.as_slice() else {
        eprintln!("{USAGE}");
        exit::failure();
    };

    // The source is checked before configuration so a missing file is always reported
    let markdown = match file_processor::read_source(source) {
        Ok(markdown) => markdown,
        Err(e) => report_convert_error(&e),
    };

    let config = match Config::load_with_discovery(cli.config.as_deref(), cli.isolated) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::failure();
        }
    };

    init_logging(cli.verbose, &config);

    if !extra.is_empty() {
        log::warn!("Ignoring {} extra argument(s)", extra.len());
    }

    // Catch panics and print a message, exit 1
    let result = std::panic::catch_unwind(|| {
        file_processor::convert_source(source, &markdown, destination, &config)
    });

    match result {
        Ok(Ok(())) => exit::success(),
        Ok(Err(e)) => report_convert_error(&e),
        Err(_) => {
            eprintln!(
                "{}: unexpected failure while converting {}",
                "Error".red().bold(),
                source.display()
            );
            exit::failure();
        }
    }
}
