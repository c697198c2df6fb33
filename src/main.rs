//! # Text Analyzer CLI (`text-analyzer`)
//!
//! ```bash
//! # Three-sentence summary of a web article
//! text-analyzer summarize --url https://example.com/story -n 3
//!
//! # Summary of a local document, as JSON
//! text-analyzer summarize --file report.docx --json
//!
//! # Grade a generated summary against a human one
//! text-analyzer evaluate --candidate-file generated.txt --reference-file human.txt
//!
//! # Most frequent content words
//! text-analyzer terms --file report.pdf -k 15
//! ```

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use text_analyzer::{
    load_config, AnalysisReport, AnalysisRequest, AnalysisResponse, Analyzer, AnalyzerConfig,
    AnalyzerError, EvaluationScore, OfflineFetcher, TermCount, UploadedFile,
};
use tracing_subscriber::EnvFilter;

/// Extractive summarization, ROUGE evaluation, and term frequencies for
/// text, documents, and web articles.
#[derive(Parser)]
#[command(name = "text-analyzer", version, about)]
struct Cli {
    /// Path to a TOML configuration file; built-in defaults otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text, a document (PDF, DOCX, TXT), or a web article
    Summarize {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of sentences in the summary (1-20, default from config)
        #[arg(short = 'n', long = "sentences")]
        sentences: Option<usize>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a candidate summary against a reference with ROUGE
    #[command(group(ArgGroup::new("cand").required(true).args(["candidate", "candidate_file"])))]
    #[command(group(ArgGroup::new("refr").required(true).args(["reference", "reference_file"])))]
    Evaluate {
        /// Candidate (generated) summary text
        #[arg(long)]
        candidate: Option<String>,

        /// File holding the candidate summary
        #[arg(long)]
        candidate_file: Option<PathBuf>,

        /// Reference (human) summary text
        #[arg(long)]
        reference: Option<String>,

        /// File holding the reference summary
        #[arg(long)]
        reference_file: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// List the most frequent non-stopword terms
    #[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
    Terms {
        #[arg(long)]
        text: Option<String>,

        /// PDF, DOCX, or TXT file
        #[arg(long)]
        file: Option<PathBuf>,

        /// How many terms to list (default from config)
        #[arg(short)]
        k: Option<usize>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Text to summarize
    #[arg(long)]
    text: Option<String>,

    /// PDF, DOCX, or TXT file to summarize
    #[arg(long)]
    file: Option<PathBuf>,

    /// Web article to summarize
    #[arg(long)]
    url: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AnalyzerError>() {
                Some(
                    AnalyzerError::InvalidConfig(_)
                    | AnalyzerError::ConfigParse(_)
                    | AnalyzerError::Io(_),
                )
                | None => eprintln!("Error: {:#}", err),
                Some(analyzer_err) => {
                    tracing::debug!(error = %analyzer_err, "analysis failed");
                    eprintln!("{}", analyzer_err.user_message());
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("text_analyzer=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    match cli.command {
        Commands::Summarize {
            source,
            sentences,
            json,
        } => {
            let analyzer = Analyzer::new(config)?;
            let request = match (source.text, source.file, source.url) {
                (Some(text), _, _) => AnalysisRequest::raw_text(text, sentences),
                (_, Some(path), _) => AnalysisRequest::UploadedFile {
                    file: UploadedFile::from_path(&path)?,
                    sentence_count: sentences,
                },
                (_, _, Some(url)) => AnalysisRequest::url(url, sentences),
                (None, None, None) => bail!("one of --text, --file, or --url is required"),
            };
            let response = analyzer.handle(request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if let AnalysisResponse::Summary(report) = &response {
                print_report(report);
            }
        }

        Commands::Evaluate {
            candidate,
            candidate_file,
            reference,
            reference_file,
            json,
        } => {
            let candidate = text_or_file(candidate, candidate_file.as_deref())?;
            let reference = text_or_file(reference, reference_file.as_deref())?;
            let analyzer = Analyzer::with_fetcher(config, OfflineFetcher)?;
            let response = analyzer.handle(AnalysisRequest::evaluation(candidate, reference))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if let AnalysisResponse::Evaluation(score) = &response {
                print_scores(score);
            }
        }

        Commands::Terms { text, file, k, json } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => UploadedFile::from_path(&path)?.extract_text()?,
                (None, None) => bail!("one of --text or --file is required"),
            };
            let mut config = config;
            if let Some(k) = k {
                config.frequency.top_k = k;
            }
            let terms = Analyzer::with_fetcher(config, OfflineFetcher)?.top_terms(&text);
            if terms.is_empty() {
                return Err(AnalyzerError::EmptyInput.into());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&terms)?);
            } else {
                print_terms(&terms);
            }
        }
    }

    Ok(())
}

fn text_or_file(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

fn print_report(report: &AnalysisReport) {
    println!("{}", report.summary.text);
    println!();
    println!(
        "{} words, {} of {} requested sentences selected",
        report.word_count,
        report.summary.len(),
        report.summary.requested
    );
    if !report.top_terms.is_empty() {
        println!();
        print_terms(&report.top_terms);
    }
}

fn print_terms(terms: &[TermCount]) {
    let width = terms.iter().map(|t| t.term.chars().count()).max().unwrap_or(0);
    for t in terms {
        println!("{:<width$}  {}", t.term, t.count, width = width);
    }
}

fn print_scores(score: &EvaluationScore) {
    println!("{:<8} {:>9} {:>9} {:>9}", "metric", "precision", "recall", "f1");
    for (name, triple) in score.metrics() {
        println!(
            "{:<8} {:>9.4} {:>9.4} {:>9.4}",
            name, triple.precision, triple.recall, triple.f1
        );
    }
}
