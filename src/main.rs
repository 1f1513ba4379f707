//! Lexaffect CLI
//!
//! Classifies text from arguments, stdin or JSON-lines files and prints
//! JSON results or a colored terminal rendering.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::{Color, Stylize};
use lexaffect_core::analysis::palette::parse_hex;
use lexaffect_core::{AffectEngine, AffectSettings, AnnotationSpan, Classification, Classifier};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use tracing::{debug, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexaffect")]
#[command(about = "Deterministic lexical emotion and sentiment classifier", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML); LEXAFFECT__* environment variables override it
    #[arg(long, env = "LEXAFFECT_CONFIG")]
    config: Option<PathBuf>,

    /// Set log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one text (reads stdin when TEXT is omitted)
    Classify {
        /// Text to classify
        text: Option<String>,

        /// Which analyzer to run
        #[arg(short, long, value_enum, default_value = "both")]
        analyzer: AnalyzerChoice,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Classify a JSON-lines file of strings or `{"text": ...}` objects
    Batch {
        /// Input file
        file: PathBuf,

        /// Which analyzer to run
        #[arg(short, long, value_enum, default_value = "both")]
        analyzer: AnalyzerChoice,
    },

    /// Print the effective settings as TOML
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AnalyzerChoice {
    Emotion,
    Sentiment,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::new(format!(
        "lexaffect={0},lexaffect_core={0}",
        level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Keep stdout for results
        .init();

    debug!("Lexaffect v{} starting...", env!("CARGO_PKG_VERSION"));

    let settings = AffectSettings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Commands::Classify {
            text,
            analyzer,
            format,
        } => {
            let engine = AffectEngine::with_settings(&settings);
            let bytes = match text {
                Some(text) => text.into_bytes(),
                None => {
                    let mut buf = Vec::new();
                    std::io::stdin()
                        .read_to_end(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };

            match format {
                OutputFormat::Json => {
                    let value = classify_bytes(&engine, analyzer, &bytes)?;
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Pretty => print_pretty(&engine, analyzer, &bytes)?,
            }
            Ok(())
        }
        Commands::Batch { file, analyzer } => {
            let engine = AffectEngine::with_settings(&settings);
            let reader = BufReader::new(
                std::fs::File::open(&file)
                    .with_context(|| format!("Failed to open {}", file.display()))?,
            );

            let mut failures = 0usize;
            for (index, line) in reader.lines().enumerate() {
                let line_no = index + 1;
                let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
                if line.trim().is_empty() {
                    continue;
                }

                let output = batch_line(&engine, analyzer, &line)
                    .map(|result| json!({ "line": line_no, "result": result }))
                    .unwrap_or_else(|e| {
                        failures += 1;
                        warn!("Line {}: {}", line_no, e);
                        json!({ "line": line_no, "error": e.to_string() })
                    });
                println!("{}", serde_json::to_string(&output)?);
            }

            debug!("Batch finished with {} failed line(s)", failures);
            Ok(())
        }
        Commands::Config => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

/// Classify one JSON line: a bare string or an object with a `text` field
fn batch_line(engine: &AffectEngine, analyzer: AnalyzerChoice, line: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(line).context("Malformed JSON")?;
    let text = match value {
        Value::Object(mut map) => map.remove("text").unwrap_or(Value::Null),
        other => other,
    };
    classify_value(engine, analyzer, &text)
}

impl AnalyzerChoice {
    /// Classifier name for a single-analyzer choice
    fn classifier_name(self) -> Option<&'static str> {
        match self {
            AnalyzerChoice::Emotion => Some("emotion"),
            AnalyzerChoice::Sentiment => Some("sentiment"),
            AnalyzerChoice::Both => None,
        }
    }
}

fn classify_bytes(engine: &AffectEngine, analyzer: AnalyzerChoice, bytes: &[u8]) -> Result<Value> {
    let value = match analyzer.classifier_name().and_then(|name| engine.classifier(name)) {
        Some(classifier) => serde_json::to_value(classifier.classify_bytes(bytes)?)?,
        None => serde_json::to_value(engine.analyze_bytes(bytes)?)?,
    };
    Ok(value)
}

fn classify_value(engine: &AffectEngine, analyzer: AnalyzerChoice, text: &Value) -> Result<Value> {
    let value = match analyzer.classifier_name().and_then(|name| engine.classifier(name)) {
        Some(classifier) => serde_json::to_value(classifier.classify_json(text)?)?,
        None => serde_json::to_value(engine.analyze_json(text)?)?,
    };
    Ok(value)
}

fn print_pretty(engine: &AffectEngine, analyzer: AnalyzerChoice, bytes: &[u8]) -> Result<()> {
    let names = match analyzer.classifier_name() {
        Some(name) => vec![name],
        None => vec!["emotion", "sentiment"],
    };
    for name in names {
        if let Some(classifier) = engine.classifier(name) {
            let result = classifier.classify_bytes(bytes)?;
            print_classification(name, &result);
        }
    }
    Ok(())
}

fn print_classification(name: &str, result: &Classification) {
    println!("{}", name.to_uppercase().bold());
    println!("  {}", render_spans(&result.annotations));

    let mut ranked: Vec<_> = result.predictions.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(a.1));
    for (label, probability) in ranked {
        let bar = "█".repeat((probability * 30.0).round() as usize);
        println!("  {:<10} {:>5.3} {}", label, probability, bar);
    }
    println!();
}

fn render_spans(spans: &[AnnotationSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            match span.color.as_deref().and_then(parse_hex) {
                Some((r, g, b)) => span.text.as_str().with(Color::Rgb { r, g, b }).bold().to_string(),
                None => span.text.clone(),
            }
        })
        .collect()
}
