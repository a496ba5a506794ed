//! HTML output writer.
//!
//! Output is kept as a list of lines, one per block event, and only
//! joined when the caller asks for a single string.

use std::fmt::Write as _;

use crate::block::BlockEvent;
use crate::escape;
use crate::Options;

/// Line-oriented HTML writer.
///
/// # Example
/// ```
/// use blockmark::block::{BlockEvent, ListKind};
/// use blockmark::{HtmlWriter, Options};
///
/// let mut writer = HtmlWriter::new(Options::default());
/// writer.write_event(&BlockEvent::ListStart(ListKind::Unordered));
/// writer.write_event(&BlockEvent::ListItem("one".to_string()));
/// writer.write_event(&BlockEvent::ListEnd(ListKind::Unordered));
///
/// assert_eq!(writer.into_string(), "<ul>\n<li>one</li>\n</ul>");
/// ```
#[derive(Debug)]
pub struct HtmlWriter {
    lines: Vec<String>,
    /// Line under construction.
    line: String,
    options: Options,
}

impl HtmlWriter {
    /// Create a new writer.
    #[inline]
    pub fn new(options: Options) -> Self {
        Self::with_capacity(0, options)
    }

    /// Create with room for `lines` output lines.
    #[inline]
    pub fn with_capacity(lines: usize, options: Options) -> Self {
        Self {
            lines: Vec::with_capacity(lines),
            line: String::with_capacity(64),
            options,
        }
    }

    /// Render one event as one output line.
    pub fn write_event(&mut self, event: &BlockEvent) {
        match event {
            BlockEvent::ParagraphStart => self.open_tag("p"),
            BlockEvent::ParagraphEnd => self.close_tag("p"),
            BlockEvent::Text(text) => {
                if self.options.escape_html {
                    let mut escaped = String::with_capacity(text.len());
                    escape::escape_text_into(&mut escaped, text);
                    escape::newlines_to_breaks_into(&mut self.line, &escaped);
                } else {
                    escape::newlines_to_breaks_into(&mut self.line, text);
                }
            }
            BlockEvent::Heading { level, content } => {
                self.heading_start(*level);
                self.write_content(content);
                self.heading_end(*level);
            }
            BlockEvent::ListStart(kind) => self.open_tag(kind.tag()),
            BlockEvent::ListEnd(kind) => self.close_tag(kind.tag()),
            BlockEvent::ListItem(content) => {
                self.open_tag("li");
                self.write_content(content);
                self.close_tag("li");
            }
            BlockEvent::Separator => {}
        }
        self.end_line();
    }

    /// Render a sequence of events.
    pub fn write_events<'e>(&mut self, events: impl IntoIterator<Item = &'e BlockEvent>) {
        for event in events {
            self.write_event(event);
        }
    }

    /// Take ownership of the lines.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Join the lines with `\n`, without a trailing newline.
    #[inline]
    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag: `<tagname>`
    #[inline]
    fn open_tag(&mut self, tag: &str) {
        self.line.push('<');
        self.line.push_str(tag);
        self.line.push('>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    fn close_tag(&mut self, tag: &str) {
        self.line.push_str("</");
        self.line.push_str(tag);
        self.line.push('>');
    }

    /// Write heading start: `<hN>`, any N.
    #[inline]
    fn heading_start(&mut self, level: usize) {
        // Writing to a String cannot fail.
        let _ = write!(self.line, "<h{level}>");
    }

    /// Write heading end: `</hN>`
    #[inline]
    fn heading_end(&mut self, level: usize) {
        let _ = write!(self.line, "</h{level}>");
    }

    fn write_content(&mut self, content: &str) {
        if self.options.escape_html {
            escape::escape_text_into(&mut self.line, content);
        } else {
            self.line.push_str(content);
        }
    }

    fn end_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.line));
    }
}
