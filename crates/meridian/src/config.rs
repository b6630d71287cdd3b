//! Command line configuration.

use clap::{Args, Parser, Subcommand};
use meridian_serde::Format;
use std::path::PathBuf;

/// Convert and check FHIR R4 resources in JSON and XML.
#[derive(Debug, Clone, Parser)]
#[command(name = "meridian", version)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, env = "MERIDIAN_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a resource between FHIR JSON and FHIR XML.
    Convert(ConvertArgs),
    /// Parse resources and check that they survive a JSON and an XML round trip.
    Check(CheckArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input file, or `-` for standard input.
    pub input: PathBuf,

    /// Output format (json, xml or a media type). Defaults to the other format.
    #[arg(long)]
    pub to: Option<Format>,

    /// Input format. Detected from the file extension or content when omitted.
    #[arg(long)]
    pub from: Option<Format>,

    /// Output file. Standard output when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the output.
    #[arg(long, env = "MERIDIAN_PRETTY")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Input format for every file. Detected per file when omitted.
    #[arg(long)]
    pub format: Option<Format>,
}

impl ConvertArgs {
    /// Target format: the one asked for, otherwise the opposite of `from`.
    pub fn target_format(&self, from: Format) -> Format {
        self.to.unwrap_or(match from {
            Format::Json => Format::Xml,
            Format::Xml => Format::Json,
        })
    }
}

impl Cli {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!("Unknown log level `{}`", self.log_level));
        }

        if let Command::Convert(args) = &self.command {
            if args.output.as_ref() == Some(&args.input) {
                errors.push("Output file must differ from the input file".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_arguments() {
        let cli = Cli::try_parse_from([
            "meridian",
            "convert",
            "patient.json",
            "--to",
            "application/fhir+xml",
            "-o",
            "patient.xml",
            "--pretty",
        ])
        .unwrap();
        match &cli.command {
            Command::Convert(args) => {
                assert_eq!(args.input, PathBuf::from("patient.json"));
                assert_eq!(args.to, Some(Format::Xml));
                assert_eq!(args.from, None);
                assert_eq!(args.output, Some(PathBuf::from("patient.xml")));
                assert!(args.pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, "warn");
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_target_defaults_to_other_format() {
        let cli = Cli::try_parse_from(["meridian", "convert", "in.xml"]).unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.target_format(Format::Xml), Format::Json);
        assert_eq!(args.target_format(Format::Json), Format::Xml);
    }

    #[test]
    fn test_check_requires_inputs() {
        assert!(Cli::try_parse_from(["meridian", "check"]).is_err());
        let cli =
            Cli::try_parse_from(["meridian", "check", "a.json", "b.xml", "--log-level", "debug"])
                .unwrap();
        match &cli.command {
            Command::Check(args) => assert_eq!(args.inputs.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["meridian", "convert", "x", "--to", "yaml"]).is_err());
    }

    #[test]
    fn test_validate_invalid() {
        let cli = Cli::try_parse_from([
            "meridian",
            "--log-level",
            "loud",
            "convert",
            "same.json",
            "-o",
            "same.json",
        ])
        .unwrap();
        let errors = cli.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
