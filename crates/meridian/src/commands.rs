use crate::config::{CheckArgs, Command, ConvertArgs};
use anyhow::{Context, bail};
use meridian_serde::{Format, parse_resource, write_resource};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Convert(args) => convert(args),
        Command::Check(args) => check(args),
    }
}

fn convert(args: &ConvertArgs) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let from = resolve_format(args.from, &args.input, &input)?;
    let to = args.target_format(from);

    let output = meridian_serde::convert(&input, from, to, args.pretty)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                input = %args.input.display(),
                output = %path.display(),
                media_type = to.mime_type(),
                "Converted resource"
            );
        }
        None => {
            debug!(media_type = to.mime_type(), "Writing resource to standard output");
            println!("{}", output);
        }
    }
    Ok(())
}

fn check(args: &CheckArgs) -> anyhow::Result<()> {
    let mut failures = 0;
    for path in &args.inputs {
        let result = read_input(path).and_then(|input| {
            let format = resolve_format(args.format, path, &input)?;
            check_resource(&input, format)
        });
        match result {
            Ok(report) => println!("ok    {}  {}", path.display(), report),
            Err(err) => {
                failures += 1;
                println!("FAIL  {}  {:#}", path.display(), err);
            }
        }
    }

    info!(checked = args.inputs.len(), failures, "Check finished");
    if failures > 0 {
        bail!("{} of {} resources failed", failures, args.inputs.len());
    }
    Ok(())
}

/// What `check` learned about a resource that passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub resource_type: &'static str,
    pub id: Option<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}/{}", self.resource_type, id),
            None => f.write_str(self.resource_type),
        }
    }
}

/// Parses a resource, then re-encodes it in every format and requires the
/// decoded result to equal the original model.
pub fn check_resource(input: &str, format: Format) -> anyhow::Result<CheckReport> {
    let resource = parse_resource(input, format).map_err(|err| {
        let context = if err.codec_error().is_some() {
            "Resource does not match the FHIR R4 model"
        } else {
            "Failed to parse resource"
        };
        anyhow::Error::new(err).context(context)
    })?;
    for target in [Format::Json, Format::Xml] {
        let encoded = write_resource(&resource, target, false)
            .with_context(|| format!("Failed to write {}", target))?;
        let decoded = parse_resource(&encoded, target)
            .with_context(|| format!("Failed to read back {}", target))?;
        if decoded != resource {
            bail!("{} round trip changed the resource", target);
        }
        debug!(resource_type = resource.resource_type(), %target, "Round trip ok");
    }
    Ok(CheckReport {
        resource_type: resource.resource_type(),
        id: resource.id().map(str::to_string),
    })
}

/// Explicit format first, then the file extension, then the content.
pub fn resolve_format(explicit: Option<Format>, path: &Path, input: &str) -> anyhow::Result<Format> {
    explicit
        .or_else(|| Format::from_path(path))
        .or_else(|| Format::sniff(input))
        .with_context(|| format!("Cannot detect the format of {}; use --from", path.display()))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read standard input")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use clap::Parser;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    const PATIENT: &str = r#"{"resourceType":"Patient","id":"p1","active":true,"name":[{"given":["Ann",null],"_given":[null,{"id":"g2"}]}]}"#;

    #[test]
    fn test_resolve_format() {
        let json = Path::new("patient.json");
        let unknown = Path::new("patient.txt");
        assert_eq!(resolve_format(None, json, "<Patient/>").unwrap(), Format::Json);
        assert_eq!(
            resolve_format(Some(Format::Xml), json, "").unwrap(),
            Format::Xml
        );
        assert_eq!(resolve_format(None, unknown, " <Patient/>").unwrap(), Format::Xml);
        assert!(resolve_format(None, unknown, "plain text").is_err());
    }

    #[test]
    fn test_check_resource_reports_type_and_id() {
        let report = check_resource(PATIENT, Format::Json).unwrap();
        assert_eq!(report.resource_type, "Patient");
        assert_eq!(report.id.as_deref(), Some("p1"));
        assert_eq!(report.to_string(), "Patient/p1");
    }

    #[test]
    fn test_check_resource_rejects_invalid_input() {
        let err = check_resource(
            r#"{"resourceType":"Patient","deceasedBoolean":true,"deceasedDateTime":"2020"}"#,
            Format::Json,
        )
        .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Resource does not match the FHIR R4 model"), "{}", message);
        assert!(message.contains("multiple values for polymorphic field"), "{}", message);

        let err = check_resource(r#"{"resourceType": "Patient""#, Format::Json).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse resource"), "{:#}", err);
    }

    #[test]
    fn test_convert_writes_output_file() {
        let dir = std::env::temp_dir().join(format!("meridian-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("patient.json");
        let output: PathBuf = dir.join("patient.xml");
        std::fs::write(&input, PATIENT).unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("meridian"),
            OsStr::new("convert"),
            input.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .unwrap();
        run(&cli.command).unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.contains(r#"<given id="g2"/>"#), "{}", xml);
        assert_eq!(check_resource(&xml, Format::Xml).unwrap().id.as_deref(), Some("p1"));

        let check = Cli::try_parse_from([
            OsStr::new("meridian"),
            OsStr::new("check"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();
        run(&check.command).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
