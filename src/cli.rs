//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use crate::adapters::csv_adapter::{is_csv_path, CsvReportAdapter, CsvSnapshotAdapter};
use crate::adapters::ini_snapshot_adapter::{IniSnapshotAdapter, OutputSettings};
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::classification::{Category, Classification};
use crate::domain::config_validation::MAX_PRECISION;
use crate::domain::error::{RatioTierError, TableError, ValidationError};
use crate::domain::evaluation::EvaluationResult;
use crate::domain::indicator::{IndicatorKind, InputShape};
use crate::domain::input::NumericInput;
use crate::domain::snapshot::{evaluate_snapshot, Snapshot, SnapshotReport};
use crate::domain::table_check::check_all;
use crate::ports::report_port::ReportPort;
use crate::ports::snapshot_port::SnapshotPort;

#[derive(Parser, Debug)]
#[command(
    name = "ratiotier",
    about = "Classify financial indicators into qualitative tiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the supported indicators
    List {
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Show an indicator's definition, formula and range table
    Describe { indicator: String },
    /// Evaluate one indicator
    #[command(allow_negative_numbers = true)]
    Evaluate {
        indicator: String,
        value: String,
        /// Denominator, for ratio indicators
        denominator: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Decimal places for the metric (0 to 10)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION))]
        precision: u8,
    },
    /// Evaluate every indicator of an INI or CSV snapshot
    Batch {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Verify that every range table covers the real line exactly once
    Check,
    /// Walk through automatic, manual and failed evaluations
    Demo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::List { category } => run_list(category),
        Command::Describe { indicator } => run_describe(&indicator),
        Command::Evaluate {
            indicator,
            value,
            denominator,
            format,
            precision,
        } => run_evaluate(
            &indicator,
            &value,
            denominator.as_deref(),
            format,
            usize::from(precision),
        ),
        Command::Batch {
            input,
            output,
            format,
        } => run_batch(&input, output.as_ref(), format),
        Command::Check => run_check(),
        Command::Demo => run_demo(),
    }
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

pub fn parse_indicator(name: &str) -> Result<IndicatorKind, RatioTierError> {
    name.parse().map_err(|_| RatioTierError::UnknownIndicator {
        name: name.trim().to_string(),
    })
}

fn fail(err: RatioTierError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

fn run_list(category: Option<Category>) -> ExitCode {
    let kinds = match category {
        Some(c) => IndicatorKind::by_category(c),
        None => IndicatorKind::ALL.to_vec(),
    };
    for kind in &kinds {
        let def = kind.definition();
        let shape = match def.inputs {
            InputShape::Single { .. } => "value",
            InputShape::Ratio { .. } => "ratio",
        };
        println!(
            "{:<26} {:<24} {:<14} {}",
            def.key, def.name, def.category, shape
        );
    }
    eprintln!("{} indicators", kinds.len());
    ExitCode::SUCCESS
}

fn run_describe(name: &str) -> ExitCode {
    let kind = match parse_indicator(name) {
        Ok(k) => k,
        Err(e) => return fail(e),
    };
    let def = kind.definition();

    println!("{} ({})", def.name, def.key);
    println!("Category: {}", def.category);
    println!("Formula:  {}", def.formula);
    println!("Inputs:   {}", def.inputs.labels().join(" / "));
    println!();
    for line in def.definition.trim().lines() {
        println!("{}", line.trim());
    }
    println!();
    println!("{:<18} {:<14} Range", "Interval", "Classification");
    for rule in def.rules {
        println!(
            "{:<18} {:<14} {}",
            rule.interval(),
            rule.classification.label(),
            rule.range
        );
    }
    ExitCode::SUCCESS
}

/// Evaluate one indicator from command-line fields. The denominator, when
/// given, is passed as a second input; a count that does not match the
/// indicator yields an Error result rather than a failure.
pub fn evaluate_fields(
    kind: IndicatorKind,
    value: &str,
    denominator: Option<&str>,
) -> EvaluationResult {
    let mut inputs = vec![NumericInput::from_field(value)];
    if let Some(den) = denominator {
        inputs.push(NumericInput::from_field(den));
    }
    kind.definition().evaluate_inputs(&inputs)
}

fn run_evaluate(
    name: &str,
    value: &str,
    denominator: Option<&str>,
    format: OutputFormat,
    precision: usize,
) -> ExitCode {
    let kind = match parse_indicator(name) {
        Ok(k) => k,
        Err(e) => return fail(e),
    };
    let result = evaluate_fields(kind, value, denominator);

    let rendered = match format {
        OutputFormat::Text => Ok(TextReportAdapter::new(precision, true).render_result(&result)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&result).map_err(|e| RatioTierError::Report {
                reason: format!("JSON serialization failed: {}", e),
            })
        }
        OutputFormat::Csv => CsvReportAdapter::new(precision).render(&SnapshotReport {
            company: String::new(),
            ticker: String::new(),
            as_of: None,
            results: vec![result],
        }),
    };

    match rendered {
        Ok(text) => {
            print!("{}", text);
            if format == OutputFormat::Json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

/// Load a snapshot, choosing the adapter by file extension. CSV snapshots
/// carry no output settings and get the defaults.
pub fn load_snapshot(path: &Path) -> Result<(Snapshot, OutputSettings), RatioTierError> {
    info!(path = %path.display(), "loading snapshot");
    if is_csv_path(path) {
        let snapshot = CsvSnapshotAdapter::new(path.to_path_buf()).load_snapshot()?;
        Ok((snapshot, OutputSettings::default()))
    } else {
        let adapter = IniSnapshotAdapter::from_file(path)?;
        let snapshot = adapter.load_snapshot()?;
        Ok((snapshot, adapter.output_settings()))
    }
}

/// Flag first, then the snapshot's `[output] format`, then text.
pub fn resolve_format(flag: Option<OutputFormat>, settings: &OutputSettings) -> OutputFormat {
    flag.or_else(|| {
        settings
            .format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
    })
    .unwrap_or(OutputFormat::Text)
}

pub fn build_report_adapter(
    format: OutputFormat,
    settings: &OutputSettings,
) -> Box<dyn ReportPort> {
    match format {
        OutputFormat::Text => Box::new(TextReportAdapter::new(
            settings.precision,
            settings.show_definition,
        )),
        OutputFormat::Json => Box::new(JsonReportAdapter),
        OutputFormat::Csv => Box::new(CsvReportAdapter::new(settings.precision)),
    }
}

/// Load and evaluate a snapshot file, returning the report together with
/// the adapter its format resolves to.
pub fn evaluate_batch(
    input: &Path,
    format: Option<OutputFormat>,
) -> Result<(SnapshotReport, Box<dyn ReportPort>), RatioTierError> {
    let (snapshot, settings) = load_snapshot(input)?;
    let report = evaluate_snapshot(&snapshot);
    let adapter = build_report_adapter(resolve_format(format, &settings), &settings);
    Ok((report, adapter))
}

/// Load, evaluate and render a snapshot file.
pub fn render_batch(
    input: &Path,
    format: Option<OutputFormat>,
) -> Result<(SnapshotReport, String), RatioTierError> {
    let (report, adapter) = evaluate_batch(input, format)?;
    let rendered = adapter.render(&report)?;
    Ok((report, rendered))
}

/// Evaluate a snapshot file and write the report to `output`.
pub fn write_batch(
    input: &Path,
    output: &Path,
    format: Option<OutputFormat>,
) -> Result<SnapshotReport, RatioTierError> {
    let (report, adapter) = evaluate_batch(input, format)?;
    adapter.write(&report, output)?;
    info!(path = %output.display(), "report written");
    Ok(report)
}

fn run_batch(input: &Path, output: Option<&PathBuf>, format: Option<OutputFormat>) -> ExitCode {
    let report = match output {
        Some(path) => match write_batch(input, path, format) {
            Ok(report) => {
                eprintln!("Report written to {}", path.display());
                report
            }
            Err(e) => return fail(e),
        },
        None => match render_batch(input, format) {
            Ok((report, rendered)) => {
                print!("{}", rendered);
                report
            }
            Err(e) => return fail(e),
        },
    };

    if report.error_count() > 0 {
        eprintln!(
            "{} of {} indicator(s) could not be evaluated",
            report.error_count(),
            report.results.len()
        );
    }
    ExitCode::SUCCESS
}

fn run_check() -> ExitCode {
    let defects = check_all();
    match check_report(&defects) {
        Ok(()) => {
            println!("{} range tables valid", IndicatorKind::ALL.len());
            ExitCode::SUCCESS
        }
        Err(e) => (&e).into(),
    }
}

/// Report table defects on stderr; the first one becomes the error.
pub fn check_report(defects: &[(IndicatorKind, TableError)]) -> Result<(), RatioTierError> {
    let Some((_, first)) = defects.first().cloned() else {
        return Ok(());
    };

    for (kind, defect) in defects {
        eprintln!("defect in {}: {}", kind, defect);
    }
    eprintln!("{} table(s) defective", defects.len());
    Err(first.into())
}

fn run_demo() -> ExitCode {
    match demo_text() {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => fail(RatioTierError::Report {
            reason: e.to_string(),
        }),
    }
}

/// Automatic evaluation, manual construction and a validation failure, all
/// on P/BV.
pub fn demo_text() -> Result<String, ValidationError> {
    let pbv = IndicatorKind::PriceToBook.definition();
    let text = TextReportAdapter::new(2, true);
    let mut out = String::new();

    out.push_str("== Automatic evaluation: P/BV = 1.2\n");
    let auto = pbv.evaluate(1.2);
    out.push_str(&format!("{}\n", auto));
    out.push_str(&text.render_result(&auto));
    out.push('\n');

    out.push_str("== Manual result\n");
    let manual = pbv.build_result(
        Classification::Moderate,
        "1.0 - 2.0",
        "Example of external use",
        "Moderate risk",
        "Fictitious reference",
        "Review quarterly",
    )?;
    out.push_str(&format!("{}\n", manual));
    out.push_str(&text.render_result(&manual));
    out.push('\n');

    out.push_str("== Invalid input: \"not_a_number\"\n");
    let failed = pbv.evaluate("not_a_number");
    out.push_str(&format!("{}\n", failed));
    out.push_str(&text.render_result(&failed));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_evaluate_with_negative_value() {
        let cli = Cli::try_parse_from(["ratiotier", "evaluate", "net_debt", "-35"]).unwrap();
        match cli.command {
            Command::Evaluate {
                indicator, value, ..
            } => {
                assert_eq!(indicator, "net_debt");
                assert_eq!(value, "-35");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_batch_flags() {
        let cli = Cli::try_parse_from([
            "ratiotier", "batch", "-i", "acme.ini", "-o", "out.json", "-f", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Batch {
                input,
                output,
                format,
            } => {
                assert_eq!(input, PathBuf::from("acme.ini"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_category_is_validated() {
        assert!(Cli::try_parse_from(["ratiotier", "list", "--category", "leverage"]).is_ok());
        assert!(Cli::try_parse_from(["ratiotier", "list", "--category", "weather"]).is_err());
    }

    #[test]
    fn evaluate_fields_handles_pairs() {
        let result = evaluate_fields(IndicatorKind::CurrentRatio, "150", Some("100"));
        assert_eq!(result.classification, Classification::Moderate);
        let missing = evaluate_fields(IndicatorKind::CurrentRatio, "150", None);
        assert!(missing.is_error());
    }

    #[test]
    fn evaluate_fields_accepts_negative_net_debt() {
        let result = evaluate_fields(IndicatorKind::NetDebt, "-35", None);
        assert_eq!(result.classification, Classification::Optimal);
    }

    #[test]
    fn format_precedence() {
        let json = OutputSettings {
            format: Some("json".into()),
            ..OutputSettings::default()
        };
        assert_eq!(resolve_format(Some(OutputFormat::Csv), &json), OutputFormat::Csv);
        assert_eq!(resolve_format(None, &json), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, &OutputSettings::default()),
            OutputFormat::Text
        );
    }

    #[test]
    fn precision_flag_is_bounded() {
        let cli = Cli::try_parse_from(["ratiotier", "evaluate", "roe", "30", "--precision", "10"])
            .unwrap();
        assert!(matches!(cli.command, Command::Evaluate { precision: 10, .. }));
        assert!(
            Cli::try_parse_from(["ratiotier", "evaluate", "roe", "30", "--precision", "11"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["ratiotier", "evaluate", "roe", "30", "--precision", "70000"])
                .is_err()
        );
    }

    #[test]
    fn check_report_exit_codes() {
        assert!(check_report(&[]).is_ok());
        let defects = vec![(
            IndicatorKind::Roe,
            TableError::Gap {
                indicator: "roe".into(),
                index: 1,
                next: 2,
                at: 5.0,
            },
        )];
        let err = check_report(&defects).unwrap_err();
        assert!(matches!(err, RatioTierError::TableDefect(TableError::Gap { .. })));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn demo_walks_through_three_sections() {
        let text = demo_text().unwrap();
        assert!(text.contains("== Automatic evaluation: P/BV = 1.2"));
        assert!(text.contains("<EvaluationResult: Moderate | Range: 1 < P/BV <= 1.5>"));
        assert!(text.contains("== Manual result"));
        assert!(text.contains("Description:     Example of external use"));
        assert!(text.contains("== Invalid input"));
        assert!(text.contains("<EvaluationResult: Error | Range: N/A>"));
    }

    #[test]
    fn write_batch_writes_through_report_port() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("acme.ini");
        std::fs::write(
            &input,
            "[company]\nname = Acme\n[indicators]\nroe = 30\ncurrent_ratio = 150, 100\n",
        )
        .unwrap();
        let output = dir.path().join("acme.csv");

        let report = write_batch(&input, &output, Some(OutputFormat::Csv)).unwrap();
        assert_eq!(report.results.len(), 2);
        let mut rdr = csv::Reader::from_path(&output).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][3], "current_ratio");
    }

    #[test]
    fn unknown_indicator_maps_to_exit_code() {
        let err = parse_indicator("  bogus ").unwrap_err();
        assert_eq!(err.to_string(), "unknown indicator: bogus");
    }
}
