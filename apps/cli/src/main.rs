//! # precise-round
//!
//! Rounds a measured value and its uncertainty from the command line.
//!
//! ## Usage
//! ```bash
//! # Automatic digit count (2 digits for a leading 1, else 1)
//! precise-round 123.45678 0.01234
//! # 123.457 ± 0.013
//!
//! # Explicit digit count, JSON output
//! precise-round 123.4545 0.07234 --digits 2 --json
//!
//! # Defaults from the environment
//! PRECISE_ROUND_DIGITS=2 PRECISE_ROUND_FORMAT=json precise-round 5 0.99
//! ```
//!
//! ## Flow
//! ```text
//! CliConfig::load ──► tracing init ──► parse_args ──► round ──► render
//! ```

mod config;
mod error;

use std::env;
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rounding_core::validation::parse_number;
use rounding_core::{round_measurement, DigitCount, RoundedMeasurement};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

const USAGE: &str = "\
Usage: precise-round <VALUE> <UNCERTAINTY> [OPTIONS]

Options:
  -d, --digits <N|auto>  Significant digits of the uncertainty (default: auto)
      --json             Print a JSON object
      --text             Print VALUE ± UNCERTAINTY
  -h, --help             Show this message

Environment:
  PRECISE_ROUND_DIGITS   Default for --digits
  PRECISE_ROUND_FORMAT   Default output format (text|json)
  PRECISE_ROUND_LOG      Log filter when RUST_LOG is unset (default: warn)";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Round(Invocation),
}

/// A single rounding request.
#[derive(Debug, Clone, PartialEq)]
struct Invocation {
    value: String,
    uncertainty: String,
    digits: DigitCount,
    format: OutputFormat,
}

fn main() -> ExitCode {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::from(e);
            eprintln!("error: {}", err);
            return err.exit_code();
        }
    };

    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&config, &args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            if matches!(err, CliError::Usage(_)) {
                eprintln!();
                eprintln!("{}", USAGE);
            }
            err.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses arguments, rounds, and renders the output line.
fn run(config: &CliConfig, args: &[String]) -> CliResult<String> {
    match parse_args(config, args)? {
        Command::Help => Ok(USAGE.to_string()),
        Command::Round(invocation) => {
            info!(
                value = %invocation.value,
                uncertainty = %invocation.uncertainty,
                digits = %invocation.digits,
                "Rounding measurement"
            );
            let value = parse_number("value", &invocation.value)?;
            let uncertainty = parse_number("uncertainty", &invocation.uncertainty)?;
            let rounded = round_measurement(value, uncertainty, invocation.digits)?;
            render(&rounded, invocation.format)
        }
    }
}

/// Parses command-line arguments on top of the loaded configuration.
///
/// Anything that is not a known flag is positional, so negative values such
/// as `-1.5` need no escaping.
fn parse_args(config: &CliConfig, args: &[String]) -> CliResult<Command> {
    let mut digits = config.digits;
    let mut format = config.format;
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--digits" | "-d" => {
                let raw = args
                    .get(i + 1)
                    .ok_or_else(|| CliError::Usage("--digits needs a value".to_string()))?;
                digits = raw.parse()?;
                i += 1;
            }
            "--json" => format = OutputFormat::Json,
            "--text" => format = OutputFormat::Text,
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let value = positional
        .next()
        .ok_or_else(|| CliError::Usage("missing VALUE".to_string()))?;
    let uncertainty = positional
        .next()
        .ok_or_else(|| CliError::Usage("missing UNCERTAINTY".to_string()))?;
    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("unexpected argument {:?}", extra)));
    }

    Ok(Command::Round(Invocation {
        value,
        uncertainty,
        digits,
        format,
    }))
}

fn render(rounded: &RoundedMeasurement, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("{} ± {}", rounded.value, rounded.uncertainty)),
        OutputFormat::Json => Ok(serde_json::to_string(rounded)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let config = CliConfig::default();
        let command = parse_args(&config, &args(&["-1.5", "0.2", "-d", "2", "--json"])).unwrap();
        assert_eq!(
            command,
            Command::Round(Invocation {
                value: "-1.5".to_string(),
                uncertainty: "0.2".to_string(),
                digits: DigitCount::Fixed(2),
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_parse_uses_config_defaults() {
        let config = CliConfig {
            digits: DigitCount::Fixed(3),
            format: OutputFormat::Json,
            log_level: "warn".to_string(),
        };
        match parse_args(&config, &args(&["1", "0.1", "--text"])).unwrap() {
            Command::Round(invocation) => {
                assert_eq!(invocation.digits, DigitCount::Fixed(3));
                assert_eq!(invocation.format, OutputFormat::Text);
            }
            Command::Help => panic!("expected a rounding command"),
        }
    }

    #[test]
    fn test_parse_errors() {
        let config = CliConfig::default();
        assert!(matches!(
            parse_args(&config, &args(&["1.0"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&config, &args(&["1.0", "0.1", "2.0"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&config, &args(&["1.0", "0.1", "--digits"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&config, &args(&["1.0", "0.1", "--digits", "0"])),
            Err(CliError::Rounding(_))
        ));
        assert_eq!(parse_args(&config, &args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_run_text_output() {
        let config = CliConfig::default();
        let output = run(&config, &args(&["123.45678", "0.01234"])).unwrap();
        assert_eq!(output, "123.457 ± 0.013");

        let output = run(&config, &args(&["123.456", "0"])).unwrap();
        assert_eq!(output, "123.456 ± 0");
    }

    #[test]
    fn test_run_json_output() {
        let config = CliConfig::default();
        let argv = args(&["453121123.456", "323451", "-d", "2", "--json"]);
        let output = run(&config, &argv).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["value"], "453120000");
        assert_eq!(json["uncertainty"], "330000");
        assert_eq!(json["digits"], 2);
        assert_eq!(json["decimal_exponent"], 4);
    }

    #[test]
    fn test_run_rejects_bad_input() {
        let config = CliConfig::default();
        let err = run(&config, &args(&["abc", "0.01"])).unwrap_err();
        assert_eq!(err.exit_status(), 1);

        let err = run(&config, &args(&["1.0", "-0.01"])).unwrap_err();
        assert_eq!(err.exit_status(), 1);
        assert_eq!(
            err.to_string(),
            "Invalid argument: uncertainty must be non-negative"
        );

        let err = run(&config, &args(&["1e300", "1e-10"])).unwrap_err();
        assert_eq!(err.exit_status(), 1);
        assert_eq!(
            err.to_string(),
            "Invalid argument: value cannot be represented at this precision"
        );
    }

    #[test]
    fn test_run_uses_config_digit_count() {
        let config = CliConfig {
            digits: DigitCount::Fixed(2),
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        };
        let output = run(&config, &args(&["123.45678", "5.123"])).unwrap();
        assert_eq!(output, "123.5 ± 5.2");

        let output = run(&config, &args(&["123.45678", "5.123", "-d", "auto"])).unwrap();
        assert_eq!(output, "123 ± 6");
    }
}
