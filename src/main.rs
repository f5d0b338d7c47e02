//! ipc-landgen: IPC-7351 land pattern generator for KiCad
//!
//! Reads an element description, builds the land pattern for the requested
//! package family and writes it as a `.kicad_mod` footprint.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

use ipc_landgen::config;
use ipc_landgen::{generate_footprint, PackageFamily};

/// IPC-7351 land pattern generator.
///
/// Writes `<out>/<name>.kicad_mod` and prints the written path.
#[derive(Parser, Debug)]
#[command(name = "ipc-landgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Package family, e.g. chip, soic, sot23, qfn, bga
    #[arg(short, long, value_name = "KIND")]
    kind: String,

    /// JSON file describing the element and its housing
    #[arg(short, long, value_name = "JSON")]
    element: PathBuf,

    /// Output directory (typically a `.pretty` library)
    #[arg(short, long, value_name = "DIR", default_value = "./kicad/footprints")]
    out: PathBuf,

    /// Path to the settings file
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints an error with its source chain.
fn report(err: &dyn std::error::Error) {
    eprintln!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings_path = args.settings.as_deref();
    let cfg = match config::load_tool_config(settings_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            report(&e);
            if settings_path.is_none() {
                if let Some(default_path) = config::default_settings_path() {
                    eprintln!("\nSettings are read from: {}", default_path.display());
                }
            }
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let family: PackageFamily = match args.kind.parse() {
        Ok(family) => family,
        Err(e) => {
            error!(kind = %args.kind, "unsupported package family");
            report(&e);
            return ExitCode::FAILURE;
        }
    };
    debug!(%family, element = %args.element.display(), "request");

    let result = config::load_element(&args.element)
        .map_err(Into::into)
        .and_then(|element| generate_footprint(family, &element, &cfg.pattern, &args.out));

    match result {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(get_log_level(3, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "DEBUG"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "nonsense"), Level::WARN);
        assert_eq!(get_log_level(2, false, "error"), Level::DEBUG);
    }
}
