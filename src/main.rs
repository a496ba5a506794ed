//! blockmark CLI - convert a Markdown file to HTML

use std::path::PathBuf;
use std::process::ExitCode;

use blockmark::{ConvertError, Options};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockmark", version)]
#[command(about = "Convert Markdown headings, lists and paragraphs to HTML")]
struct Cli {
    /// Input Markdown file (`-` for stdin)
    input: PathBuf,

    /// Output HTML file, overwritten if present (`-` for stdout)
    output: PathBuf,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    /// Treat a line that ends inside its marker (`7`, `###`, `---`, `1.`) as text instead of failing
    #[arg(long)]
    lenient: bool,

    /// HTML-escape `<`, `>`, `&` and `"` in content
    #[arg(long)]
    escape_html: bool,

    /// Log block transitions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            lenient_lookahead: self.lenient,
            escape_html: self.escape_html,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            ErrorKind::MissingRequiredArgument => {
                eprintln!("{}", ConvertError::Usage);
                return ExitCode::FAILURE;
            }
            _ => {
                let _ = err.print();
                return ExitCode::FAILURE;
            }
        },
    };

    init_logging(cli.verbose);

    match blockmark::convert_file(&cli.input, &cli.output, &cli.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ ConvertError::MissingInput { .. }) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "blockmark=debug" } else { "blockmark=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}
