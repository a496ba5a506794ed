//! blockmark: line-oriented Markdown block converter
//!
//! Converts a small Markdown subset to HTML in one pass over the lines:
//! ATX headings, flat `*`/`-` and `1.` lists, and paragraphs separated by
//! blank lines. There is no inline formatting and no nesting.
//!
//! # Design Principles
//! - One line in, one classification, a handful of output lines
//! - Explicit state: a single [`BlockState`] owned by the converter
//! - Classification is separate from the state transition
//! - Every opened block is closed before the next one opens
//!
//! # Example
//! ```
//! let html = blockmark::to_html("# Hello\n\nWorld").unwrap();
//! assert_eq!(html, "<h1>Hello</h1>\n\n<p>\nWorld\n</p>");
//! ```

pub mod block;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod io;
pub mod line;
pub mod render;

use std::path::Path;

use tracing::info;

// Re-export primary types
pub use block::{BlockConverter, BlockEvent, BlockState};
pub use error::{ConvertError, Result};
pub use line::{classify, LineKind};
pub use render::HtmlWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Treat a line that ends inside its marker as text instead of failing.
    ///
    /// That is a lone digit (no second character to test for `.`) or a
    /// bare marker run such as `###`, `---` or `1.`. Off by default, so
    /// such a line aborts the conversion with [`ConvertError::MalformedLine`].
    pub lenient_lookahead: bool,
    /// HTML-escape `<`, `>`, `&` and `"` in content. Off by default:
    /// content is copied verbatim.
    pub escape_html: bool,
}

/// Convert a sequence of lines to HTML output lines.
///
/// This is the core entry point; the other functions wrap it.
///
/// # Example
/// ```
/// use blockmark::{convert_lines, Options};
///
/// let out = convert_lines(["* one", "* two"], &Options::default()).unwrap();
/// assert_eq!(out, vec!["<ul>", "<li>one</li>", "<li>two</li>", "</ul>"]);
/// ```
pub fn convert_lines<I, S>(lines: I, options: &Options) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut converter = BlockConverter::new(*options);
    for line in lines {
        converter.push_line(line.as_ref())?;
    }
    let events = converter.finish();

    let mut writer = HtmlWriter::with_capacity(events.len(), *options);
    writer.write_events(&events);
    Ok(writer.into_lines())
}

/// Convert Markdown text to HTML.
///
/// Output lines are joined by `\n` with no trailing newline.
pub fn to_html(input: &str) -> Result<String> {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown text to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> Result<String> {
    Ok(convert_lines(input.lines(), options)?.join("\n"))
}

/// Convert the file at `input` and write the result to `output`.
///
/// Either path may be `-` for stdin/stdout. Nothing is written unless
/// the whole conversion succeeds.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<()> {
    let lines = io::read_lines(input)?;
    let html = convert_lines(&lines, options)?;
    io::write_lines(output, &html)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        lines_in = lines.len(),
        lines_out = html.len(),
        "converted"
    );
    Ok(())
}
