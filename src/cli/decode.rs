use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::path::PathBuf;

use biis_xml::biis::BiisDecoder;
use biis_xml::gif::Container;
use biis_xml::plugin::{BiisReader, ImportWorker, ImportWorkerConfiguration, PARAMETER_NAME};
use biis_xml::report::DecodeReport;

use super::config::{Config, OutputFormat};

/// Decode a BIIS-XML file and print the result
pub fn run(
    input: PathBuf,
    config_path: Option<PathBuf>,
    strict: bool,
    format: Option<OutputFormat>,
    compact: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = Config::load(config_path.as_deref())?;
    if let Some(ref path) = config_path {
        info!("Loaded config from {}", path.display());
    }

    let strict = strict || config.decode.strict.unwrap_or(false);
    let format = format.or(config.output.format).unwrap_or_default();
    let pretty = !compact && config.output.pretty.unwrap_or(true);
    let options = config.decode_options();
    let table = config.dispatch_table();
    let source = input.display().to_string();

    info!("Decoding {} ({} mapped paths)", source, table.len());

    if strict {
        let decoder = BiisDecoder::open_with_options(&input, options)
            .with_context(|| format!("Failed to open {}", source))?
            .with_table(table);

        match decoder.decode() {
            Ok(outcome) => {
                let report = DecodeReport::from_outcome(&source, &outcome);
                print_result(&outcome.container, &report, format, pretty)
            }
            Err(failure) => {
                if format == OutputFormat::Summary {
                    print_report(&DecodeReport::from_failure(&source, &failure));
                }
                Err(anyhow::Error::new(failure.error).context(format!("Failed to decode {}", source)))
            }
        }
    } else {
        let file = File::open(&input).with_context(|| format!("Failed to open {}", source))?;
        let configuration = ImportWorkerConfiguration::new().with_stream(PARAMETER_NAME, file);

        let mut reader = BiisReader::with_table(table).with_options(options);
        reader
            .load(configuration.into())
            .context("BIIS-XML reader rejected the configuration")?;

        if let Some(error) = reader.last_error() {
            warn!("Result is incomplete: {}", error);
        }

        let report =
            DecodeReport::from_parts(&source, reader.container(), reader.notes(), reader.last_error());
        let result = match reader.container() {
            Some(container) => print_result(container, &report, format, pretty),
            None => Ok(()),
        };
        reader.unload();
        result
    }
}

fn print_result(
    container: &Container,
    report: &DecodeReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                container.to_json_pretty()
            } else {
                container.to_json()
            }
            .context("Failed to serialize container")?;
            println!("{}", json);
        }
        OutputFormat::Summary => print_report(report),
    }
    Ok(())
}

fn print_report(report: &DecodeReport) {
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }
}
