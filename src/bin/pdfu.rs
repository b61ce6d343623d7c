//! pdfu CLI tool
//!
//! Extracts the embedded form XObjects of a PDF into standalone pages.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdfu::pdf::{deembed_pdf, DeembedOptions, DeembedReport};

const USAGE: &str = "Usage: pdfu \"filename\"";

/// Exit status when no path was given
const EXIT_USAGE: u8 = 2;

/// Exit status when the path does not exist
const EXIT_NOT_FOUND: u8 = 3;

/// pdfu - Extract embedded pages from a PDF
// No flags at all, so a path starting with `-` is still a path
#[derive(Parser)]
#[command(name = "pdfu")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// PDF file whose embedded pages should be extracted
    #[arg(allow_hyphen_values = true)]
    path: Option<PathBuf>,

    /// Anything after the first path is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so the status line stays alone on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "extra arguments ignored");
    }

    let Some(path) = cli.path else {
        println!("{}", USAGE);
        return ExitCode::from(EXIT_USAGE);
    };

    if !path.exists() {
        println!("File not found.");
        return ExitCode::from(EXIT_NOT_FOUND);
    }

    let result = deembed_pdf(&path, &DeembedOptions::default());
    let code = match &result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "deembed failed");
            ExitCode::from(e.kind().exit_code())
        }
    };

    let report = DeembedReport::from(result);
    if report.success {
        println!("Deembedding successful. File saved in {}", report.output_path);
    } else {
        println!("Error: {}", report.error);
    }

    code
}
