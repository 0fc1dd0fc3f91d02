//! `pdf-window`: print a markdown report of a PDF's sentence window.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pdf_window::{
    ensure_pdf_path, process_document, render_failure, sentence, Document, Error, PipelineConfig,
    WindowBounds, DEFAULT_PREVIEW_CHARS, WINDOW_END, WINDOW_START,
};

/// Extract a PDF's text, split it into sentences, and show a fixed window of
/// them along with a re-chunked version of that window.
#[derive(Parser, Debug)]
#[command(name = "pdf-window", version, about)]
struct Args {
    /// PDF file to process
    file: PathBuf,

    /// First sentence index of the window
    #[arg(long, env = "PDF_WINDOW_START", default_value_t = WINDOW_START)]
    start: usize,

    /// Last sentence index of the window (inclusive)
    #[arg(long, env = "PDF_WINDOW_END", default_value_t = WINDOW_END)]
    end: usize,

    /// Characters of raw extracted text to preview
    #[arg(
        long,
        env = "PDF_WINDOW_PREVIEW_CHARS",
        default_value_t = DEFAULT_PREVIEW_CHARS
    )]
    preview_chars: usize,

    /// Leave the raw text preview out
    #[arg(long)]
    no_preview: bool,
}

impl Args {
    fn config(&self) -> pdf_window::Result<PipelineConfig> {
        let config = PipelineConfig::default()
            .with_bounds(WindowBounds::new(self.start, self.end)?)
            .with_preview_chars(self.preview_chars);
        Ok(if self.no_preview {
            config.without_preview()
        } else {
            config
        })
    }
}

/// Processing stopped early: the error, plus the partial view when the
/// PDF was read.
struct Failure {
    error: Error,
    markdown: Option<String>,
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Self {
            error,
            markdown: None,
        }
    }
}

fn run(args: &Args) -> Result<String, Failure> {
    let config = args.config()?;
    tracing::info!(file = %args.file.display(), "processing");
    ensure_pdf_path(&args.file)?;
    let document = Document::from_path(&args.file)?;

    match process_document(&document, &config) {
        Ok(report) => Ok(report.render_markdown()),
        Err(error) => Err(Failure {
            markdown: Some(render_failure(&document, &error)),
            error,
        }),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    sentence::init();

    let args = Args::parse();
    match run(&args) {
        Ok(markdown) => {
            print!("{markdown}");
            ExitCode::SUCCESS
        }
        Err(Failure { error, markdown }) => {
            if let Some(markdown) = markdown {
                print!("{markdown}");
            }
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
