use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use transcript_cer::{
    aggregate_reports, load_transcript, CandidateReport, ComparisonConfig, ComparisonInput, Meta,
    Report, SpaceScanMode, TranscriptComparatorBuilder, REPORT_SCHEMA_VERSION,
};

#[path = "cer_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "cer_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SpaceScanChoice {
    Greedy,
    Aligned,
}

impl SpaceScanChoice {
    fn mode(self) -> SpaceScanMode {
        match self {
            Self::Greedy => SpaceScanMode::Greedy,
            Self::Aligned => SpaceScanMode::Aligned,
        }
    }
}

#[derive(Debug, Clone)]
struct CandidateSpec {
    id: String,
    path: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "cer_report")]
#[command(about = "Score candidate transcripts against a reference by character error rate")]
struct Args {
    /// Reference transcript (.txt, or a saved speech-to-text .json response).
    #[arg(long, env = "CER_REPORT_REFERENCE")]
    reference: PathBuf,
    /// Candidate transcript as ID=PATH, or PATH to use the file stem as ID.
    #[arg(
        long = "candidate",
        env = "CER_REPORT_CANDIDATES",
        value_delimiter = ',',
        value_parser = parse_candidate_spec,
        required = true
    )]
    candidates: Vec<CandidateSpec>,
    #[arg(long, env = "CER_REPORT_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "CER_REPORT_SPACE_SCAN", value_enum)]
    space_scan: Option<SpaceScanChoice>,
    #[arg(
        long,
        env = "CER_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    output_format: OutputFormat,
    #[arg(long, env = "CER_REPORT_OUT")]
    out: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("cer_report: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    init_tracing();
    let args = Args::parse();
    let work_dir = std::env::current_dir()
        .map_err(|err| format!("Failed to resolve working directory: {err}"))?;

    let mut config = match args.config.as_ref() {
        Some(path) => ComparisonConfig::load(&resolve_path(&work_dir, path))
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => ComparisonConfig::default(),
    };
    if let Some(choice) = args.space_scan {
        config.space_scan = choice.mode();
    }
    let space_scan = config.space_scan;

    let reference_path = resolve_path(&work_dir, &args.reference);
    require_path_exists(&reference_path, "Missing reference transcript.")?;
    let reference = load_transcript(&reference_path).map_err(|err| {
        format!(
            "Failed to load reference '{}': {err}",
            reference_path.display()
        )
    })?;

    let comparator = TranscriptComparatorBuilder::new(config)
        .build()
        .map_err(|err| format!("Invalid comparison config: {err}"))?;

    let progress = ProgressBar::new(args.candidates.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );

    let mut candidates: Vec<CandidateReport> = Vec::with_capacity(args.candidates.len());
    for spec in &args.candidates {
        progress.set_message(spec.id.clone());
        let path = resolve_path(&work_dir, &spec.path);
        require_path_exists(&path, "Missing candidate transcript.")?;
        let candidate = load_transcript(&path)
            .map_err(|err| format!("{}: failed to load '{}': {err}", spec.id, path.display()))?;

        let report = comparator
            .compare(&ComparisonInput {
                id: spec.id.clone(),
                reference: reference.clone(),
                candidate,
            })
            .map_err(|err| format!("{}: comparison failed: {err}", spec.id))?;
        candidates.push(report);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let aggregates = aggregate_reports(&candidates);
    let report = Report {
        schema_version: REPORT_SCHEMA_VERSION,
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            reference_source: reference_path.to_string_lossy().into_owned(),
            space_scan,
            candidate_count: candidates.len(),
        },
        candidates,
        aggregates,
    };

    match args.output_format {
        OutputFormat::Json => {
            let out_path = resolve_out_path(&work_dir, args.out.as_ref());
            let rendered = json_report_formatter::render(&report)?;
            write_rendered(&out_path, &rendered)?;
            println!("{}", out_path.display());
        }
        OutputFormat::Text => {
            let rendered = text_report_formatter::render(&report);
            match args.out.as_ref() {
                Some(path) => {
                    let out_path = resolve_path(&work_dir, path);
                    write_rendered(&out_path, &rendered)?;
                    println!("{}", out_path.display());
                }
                None => print!("{rendered}"),
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "transcript_cer=info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_candidate_spec(value: &str) -> Result<CandidateSpec, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("candidate must be ID=PATH or PATH".to_string());
    }
    if let Some((id, path)) = value.split_once('=') {
        let id = id.trim();
        let path = path.trim();
        if id.is_empty() || path.is_empty() {
            return Err(format!("candidate '{value}' must be ID=PATH"));
        }
        return Ok(CandidateSpec {
            id: id.to_string(),
            path: PathBuf::from(path),
        });
    }

    let path = PathBuf::from(value);
    let id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| format!("cannot derive an ID from candidate path '{value}'"))?;
    Ok(CandidateSpec { id, path })
}

fn resolve_out_path(work_dir: &Path, out: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = out {
        return resolve_path(work_dir, path);
    }

    let run_id = Utc::now().format("%Y%m%dT%H%M%SZ");
    work_dir
        .join("target")
        .join("cer_reports")
        .join(format!("cer-report-{run_id}.json"))
}

fn resolve_path(work_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.join(path)
    }
}

fn write_rendered(path: &Path, rendered: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!(
                "Failed to create report output directory '{}': {err}",
                parent.display()
            )
        })?;
    }
    std::fs::write(path, rendered)
        .map_err(|err| format!("Failed to write report file '{}': {err}", path.display()))
}

fn require_path_exists(path: &Path, message: &str) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    Err(format!("{} Missing path: {}", message, path.display()))
}
