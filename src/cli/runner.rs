use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use romanus::{ConversionRecord, ErrorCategory, OutputFormat, SessionParams, convert, normalize};

use super::args::CliArgs;
use super::errors::AppError;

const INTERNAL_FAILURE_MESSAGE: &str = "Something went wrong. Please enter a valid Roman numeral.";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_params(path: Option<&Path>) -> Result<SessionParams, AppError> {
    let Some(path) = path else {
        return Ok(SessionParams::default());
    };
    let text = fs::read_to_string(path)?;
    let params = serde_json::from_str(&text).map_err(|source| AppError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded session parameters from {:?}", path);
    Ok(params)
}

fn resolve_params(args: &CliArgs) -> Result<SessionParams, AppError> {
    let mut params = load_params(args.config.as_deref())?;
    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(prompt) = &args.prompt {
        params.prompt = prompt.clone();
    }
    if args.no_banner {
        params.banner = false;
    }
    Ok(params)
}

/// Render one outcome in the requested format.
fn write_record<W: Write>(
    out: &mut W,
    format: OutputFormat,
    record: &ConversionRecord,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
        OutputFormat::Text => match (record.value, &record.error, record.category) {
            (Some(value), _, _) => writeln!(out, "{} → {}", record.input, value)?,
            (None, _, Some(ErrorCategory::Internal)) => {
                writeln!(out, "{INTERNAL_FAILURE_MESSAGE}")?
            }
            (None, error, _) => writeln!(out, "Error: {}", error.as_deref().unwrap_or_default())?,
        },
    }
    Ok(())
}

/// Interactive prompt loop. Ends on a quit word or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    params: &SessionParams,
) -> Result<(), AppError> {
    let text_mode = params.format == OutputFormat::Text;

    if params.banner && text_mode {
        writeln!(out, "Roman Numeral → Integer Converter")?;
        writeln!(out, "================================\n")?;
        writeln!(out, "Enter a Roman numeral (e.g. IV, MCMXCIV, MMMCMXCIX)")?;
        writeln!(out, "or '{}' to quit\n", params.quit_words.join("' / '"))?;
    }

    let mut lines = input.lines();
    loop {
        if text_mode {
            write!(out, "{}", params.prompt)?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            debug!("End of input");
            break;
        };
        let line = line.trim();

        if line.is_empty() {
            if text_mode {
                writeln!(out, "Please enter something.\n")?;
            }
            continue;
        }

        if params.is_quit(line) {
            if text_mode {
                writeln!(out, "\nGoodbye!")?;
            }
            break;
        }

        let numeral = normalize(line);
        let result = convert(&numeral);
        if let Err(e) = &result {
            if e.is_internal() {
                error!("Classifier defect while converting {:?}: {}", numeral, e);
            }
        }
        write_record(out, params.format, &ConversionRecord::from_result(&numeral, &result))?;
        if text_mode {
            writeln!(out)?;
        }
    }

    Ok(())
}

fn collect_batch_inputs(args: &CliArgs) -> Result<Vec<String>, AppError> {
    let mut inputs = args.numerals.clone();
    if let Some(path) = &args.input_file {
        info!("Reading numerals from {:?}", path);
        let text = fs::read_to_string(path)?;
        inputs.extend(
            text.lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string),
        );
    }
    Ok(inputs)
}

/// Convert every input and print one outcome per line.
pub fn run_batch<W: Write>(
    inputs: &[String],
    out: &mut W,
    params: &SessionParams,
) -> Result<(), AppError> {
    let report = romanus::convert_batch(inputs);

    for record in &report.records {
        write_record(out, params.format, record)?;
    }

    if report.all_converted() {
        Ok(())
    } else {
        Err(AppError::BatchFailures {
            rejected: report.rejected,
            total: report.records.len(),
        })
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_batch() {
        let inputs = collect_batch_inputs(&args)?;
        info!("Starting batch conversion of {} numerals", inputs.len());
        run_batch(&inputs, &mut out, &params)?;
    } else {
        let stdin = io::stdin();
        run_session(stdin.lock(), &mut out, &params)?;
    }

    Ok(())
}
