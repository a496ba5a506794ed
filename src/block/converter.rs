//! The line transducer.

use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::line::{classify, ClassifyError, LineKind};
use crate::Options;

use super::event::{BlockEvent, ListKind};
use super::state::{BlockState, OpenBlock};

/// Single-pass converter from lines to block events.
///
/// Feed lines in order with [`BlockConverter::push_line`], then call
/// [`BlockConverter::finish`] to close the last block and take the events.
///
/// # Example
/// ```
/// use blockmark::block::{BlockConverter, BlockEvent, ListKind};
/// use blockmark::Options;
///
/// let mut converter = BlockConverter::new(Options::default());
/// converter.push_line("* one").unwrap();
/// let events = converter.finish();
/// assert_eq!(events.first(), Some(&BlockEvent::ListStart(ListKind::Unordered)));
/// assert_eq!(events.last(), Some(&BlockEvent::ListEnd(ListKind::Unordered)));
/// ```
#[derive(Debug)]
pub struct BlockConverter {
    options: Options,
    state: BlockState,
    events: Vec<BlockEvent>,
    /// 1-based number of the line last pushed.
    line: usize,
}

impl BlockConverter {
    /// Create a converter with nothing open.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            state: BlockState::new(),
            events: Vec::new(),
            line: 0,
        }
    }

    /// Current state, mostly useful in tests.
    pub fn state(&self) -> &BlockState {
        &self.state
    }

    /// Classify one raw line and apply it to the open blocks.
    ///
    /// Surrounding whitespace is trimmed first. Fails only for a line that
    /// ends inside its marker when `lenient_lookahead` is off.
    pub fn push_line(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        let line = raw.trim();

        let kind = classify(line, &self.options).map_err(|err| match err {
            ClassifyError::MissingLookahead => ConvertError::MalformedLine {
                line: self.line,
                content: line.to_string(),
            },
        })?;
        trace!(line = self.line, kind = kind.name(), "classified");

        match kind {
            LineKind::Blank => {
                self.close_block();
                self.events.push(BlockEvent::Separator);
            }
            LineKind::Heading { level, content } => {
                self.close_block();
                self.events.push(BlockEvent::Heading {
                    level,
                    content: line[content..].to_string(),
                });
            }
            LineKind::UnorderedItem { content } => {
                self.enter_list(ListKind::Unordered);
                self.events.push(BlockEvent::ListItem(line[content..].to_string()));
            }
            LineKind::OrderedItem { content } => {
                self.enter_list(ListKind::Ordered);
                self.events.push(BlockEvent::ListItem(line[content..].to_string()));
            }
            LineKind::Text => {
                if self.state.in_any_list() {
                    self.close_block();
                }
                if !self.state.in_paragraph() {
                    self.open_block(OpenBlock::Paragraph);
                }
                self.events.push(BlockEvent::Text(line.to_string()));
            }
        }

        self.state.previous_line_blank = kind == LineKind::Blank;
        Ok(())
    }

    /// Close the last open block and return every event.
    pub fn finish(mut self) -> Vec<BlockEvent> {
        self.close_block();
        debug!(lines_in = self.line, events = self.events.len(), "conversion finished");
        self.events
    }

    /// Switch to a list of `kind`, closing any other block first.
    fn enter_list(&mut self, kind: ListKind) {
        if !self.state.in_list(kind) {
            self.close_block();
            self.open_block(OpenBlock::List(kind));
        }
    }

    fn open_block(&mut self, block: OpenBlock) {
        if let Some(event) = self.state.open(block) {
            debug!(line = self.line, block = block.name(), "open");
            self.events.push(event);
        }
    }

    fn close_block(&mut self) {
        let block = self.state.current;
        if let Some(event) = self.state.close() {
            debug!(line = self.line, block = block.name(), "close");
            self.events.push(event);
        }
    }
}
