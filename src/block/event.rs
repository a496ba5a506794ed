//! Block-level event types.

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list (`*` or `-` items).
    Unordered,
    /// Ordered list (digit + `.` items).
    Ordered,
}

impl ListKind {
    /// HTML tag name for the list container.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Events emitted by the block converter.
///
/// Every event renders to exactly one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a paragraph.
    ParagraphStart,
    /// End of a paragraph.
    ParagraphEnd,
    /// One line of paragraph text.
    Text(String),

    /// A complete heading.
    Heading {
        /// Number of leading `#`, not clamped to 6.
        level: usize,
        /// Heading content.
        content: String,
    },

    /// Start of a list.
    ListStart(ListKind),
    /// End of a list.
    ListEnd(ListKind),
    /// A complete list item.
    ListItem(String),

    /// Empty line emitted for a blank input line.
    Separator,
}

impl BlockEvent {
    /// Whether this event opens a block that needs a later close.
    pub fn opens_block(&self) -> bool {
        matches!(self, Self::ParagraphStart | Self::ListStart(_))
    }

    /// Whether this event closes a block.
    pub fn closes_block(&self) -> bool {
        matches!(self, Self::ParagraphEnd | Self::ListEnd(_))
    }
}
