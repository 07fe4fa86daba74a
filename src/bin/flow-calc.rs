use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use mfc_flow::config::{self, GasDataSource};
use mfc_flow::params::{self, ParamSpec, Resolved};
use mfc_flow::{EnvironmentInputs, FlowReport, FlowRequest, GasTable};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flow-calc")]
#[command(about = "Corrected Mass Flow Controller setpoint for a gas under ambient conditions", long_about = None)]
struct Cli {
    /// Gas name or symbol (e.g. Chlorine or Cl2)
    #[arg(short, long)]
    gas: Option<String>,
    /// Air temperature in °C [0, 30]
    #[arg(short, long)]
    temperature: Option<String>,
    /// Relative humidity in % [0, 100]
    #[arg(short = 'r', long)]
    humidity: Option<String>,
    /// Barometric pressure at sea level in mmHg
    #[arg(short, long)]
    pressure: Option<String>,
    /// Desired flow in sccm [0, 1200]
    #[arg(short, long)]
    flow: Option<String>,
    /// Gas property file (overrides GAS_DATA_PATH)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Use defaults instead of prompting for missing values
    #[arg(long)]
    no_prompt: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(config::LOG_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Ask `question` on `output` and read one line from `input`.  EOF counts
/// as an empty answer.
fn prompt<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "\n{question}\n> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Take the value from the command line or, failing that, from a prompt.
fn raw_input(given: Option<String>, question: &str, interactive: bool) -> io::Result<Option<String>> {
    match given {
        Some(v) => Ok(Some(v)),
        // stdout carries only the report
        None if interactive => prompt(question, &mut io::stdin().lock(), &mut io::stderr()),
        None => Ok(None),
    }
}

fn numeric_param(spec: &ParamSpec, given: Option<String>, interactive: bool) -> io::Result<f64> {
    let question = format!(
        "Enter the {} in {}; ex: {}",
        spec.name, spec.unit, spec.example
    );
    let raw = raw_input(given, &question, interactive)?;
    let resolved = spec.resolve(raw.as_deref());
    match &resolved {
        Resolved::Given(_) => {}
        Resolved::Defaulted(default) => {
            info!("no {} given, using default of {default} {}", spec.name, spec.unit)
        }
        Resolved::OutOfRange { value, default } => warn!(
            "{} {value} out of range {}, using default of {default} {}",
            spec.name,
            spec.range(),
            spec.unit
        ),
        Resolved::Invalid { input, default } => warn!(
            "{} {input:?} is not a number, using default of {default} {}",
            spec.name, spec.unit
        ),
    }
    Ok(resolved.value())
}

fn load_table(data: Option<PathBuf>) -> mfc_flow::Result<GasTable> {
    let (table, source) = match data {
        Some(path) => (GasTable::load(&path)?, GasDataSource::File(path)),
        None => config::load_gas_table()?,
    };
    info!("using {source} ({} gases)", table.len());
    Ok(table)
}

fn main() -> Result<(), Box<dyn Error>> {
    config::load_dotenv();
    init_logging();

    let cli = Cli::parse();
    let interactive = !cli.no_prompt;
    let table = load_table(cli.data)?;

    if interactive {
        eprintln!("\n=====================================================");
        eprintln!("\t\t FLOW CALCULATOR ");
        eprintln!("=====================================================");
    }

    let gas_input = raw_input(cli.gas, "Enter the gas name; ex: Chlorine or Cl2", interactive)?;
    let (lookup, defaulted) = params::resolve_gas(&table, gas_input.as_deref());
    if defaulted {
        info!("no gas name given, using default of {}", params::DEFAULT_GAS);
    } else if !lookup.found {
        warn!(
            "gas <{}> not found, using default properties (cp={}, cf={})",
            lookup.record.name, lookup.record.specific_heat, lookup.record.correction_factor
        );
    }

    let environment = EnvironmentInputs {
        temperature_c: numeric_param(&params::TEMPERATURE, cli.temperature, interactive)?,
        relative_humidity_pct: numeric_param(&params::HUMIDITY, cli.humidity, interactive)?,
        pressure_mmhg: numeric_param(&params::PRESSURE, cli.pressure, interactive)?,
    };
    let desired_flow = numeric_param(&params::DESIRED_FLOW, cli.flow, interactive)?;

    let request = FlowRequest::new(lookup.record, environment, desired_flow);
    let result = request.compute()?;
    let report = FlowReport {
        request,
        gas_found: lookup.found,
        result,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n----------------------------------------------------\n");
        println!("{report}");
        println!("\n=====================================================\n");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_writes_question_to_given_output() {
        let mut input = io::Cursor::new("  25.5 \n");
        let mut output = Vec::new();
        let answer = prompt("Enter the temperature", &mut input, &mut output).unwrap();
        assert_eq!(answer.as_deref(), Some("25.5"));
        assert_eq!(String::from_utf8(output).unwrap(), "\nEnter the temperature\n> ");
    }

    #[test]
    fn prompt_at_eof_is_no_answer() {
        let mut input = io::Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt("Enter the gas name", &mut input, &mut output).unwrap(), None);
    }
}
