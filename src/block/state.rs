//! Converter state carried from one line to the next.

use super::event::{BlockEvent, ListKind};

/// The block currently awaiting its closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenBlock {
    /// Nothing open.
    #[default]
    None,
    /// Inside `<p>`.
    Paragraph,
    /// Inside `<ul>` or `<ol>`.
    List(ListKind),
}

impl OpenBlock {
    /// Short name for log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Paragraph => "p",
            Self::List(kind) => kind.tag(),
        }
    }
}

/// Running state of the converter.
///
/// At most one block is open at a time. Whenever `current` is not
/// [`OpenBlock::None`], its opening event has already been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockState {
    /// Block awaiting a close.
    pub current: OpenBlock,
    /// Whether the last line seen was blank.
    pub previous_line_blank: bool,
}

impl BlockState {
    /// Create the initial state: nothing open, no blank line seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a paragraph is open.
    pub fn in_paragraph(&self) -> bool {
        self.current == OpenBlock::Paragraph
    }

    /// Whether a list of this kind is open.
    pub fn in_list(&self, kind: ListKind) -> bool {
        self.current == OpenBlock::List(kind)
    }

    /// Whether any list is open.
    pub fn in_any_list(&self) -> bool {
        matches!(self.current, OpenBlock::List(_))
    }

    /// Mark `block` as open and return its opening event.
    ///
    /// The caller must have closed the previous block first.
    pub fn open(&mut self, block: OpenBlock) -> Option<BlockEvent> {
        debug_assert_eq!(self.current, OpenBlock::None, "block opened over another");
        self.current = block;
        match block {
            OpenBlock::None => None,
            OpenBlock::Paragraph => Some(BlockEvent::ParagraphStart),
            OpenBlock::List(kind) => Some(BlockEvent::ListStart(kind)),
        }
    }

    /// Close whatever is open and return the closing event, if any.
    pub fn close(&mut self) -> Option<BlockEvent> {
        match std::mem::take(&mut self.current) {
            OpenBlock::None => None,
            OpenBlock::Paragraph => Some(BlockEvent::ParagraphEnd),
            OpenBlock::List(kind) => Some(BlockEvent::ListEnd(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = BlockState::new();
        assert_eq!(state.current, OpenBlock::None);
        assert!(!state.previous_line_blank);
        assert!(!state.in_paragraph());
        assert!(!state.in_any_list());
    }

    #[test]
    fn test_open_then_close() {
        let mut state = BlockState::new();
        assert_eq!(
            state.open(OpenBlock::List(ListKind::Ordered)),
            Some(BlockEvent::ListStart(ListKind::Ordered))
        );
        assert!(state.in_list(ListKind::Ordered));
        assert!(!state.in_list(ListKind::Unordered));
        assert_eq!(state.close(), Some(BlockEvent::ListEnd(ListKind::Ordered)));
        assert_eq!(state.current, OpenBlock::None);
    }

    #[test]
    fn test_close_nothing() {
        let mut state = BlockState::new();
        assert_eq!(state.close(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(OpenBlock::Paragraph.name(), "p");
        assert_eq!(OpenBlock::List(ListKind::Unordered).name(), "ul");
    }
}
