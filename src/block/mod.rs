//! Block-level conversion.
//!
//! The converter is line-oriented and handles:
//! - ATX headings
//! - Flat unordered and ordered lists
//! - Paragraphs separated by blank lines

mod converter;
mod event;
mod state;

pub use converter::BlockConverter;
pub use event::{BlockEvent, ListKind};
pub use state::{BlockState, OpenBlock};

/// Check that every opened block is closed before the next one opens.
///
/// Returns the index of the first offending event, or `None` if the
/// sequence is balanced.
pub fn first_unbalanced(events: &[BlockEvent]) -> Option<usize> {
    let mut open: Option<&BlockEvent> = None;

    for (i, event) in events.iter().enumerate() {
        if event.opens_block() {
            if open.is_some() {
                return Some(i);
            }
            open = Some(event);
        } else if event.closes_block() {
            let matches = matches!(
                (open, event),
                (Some(BlockEvent::ParagraphStart), BlockEvent::ParagraphEnd)
            ) || matches!(
                (open, event),
                (Some(BlockEvent::ListStart(a)), BlockEvent::ListEnd(b)) if a == b
            );
            if !matches {
                return Some(i);
            }
            open = None;
        }
    }

    if open.is_some() { Some(events.len()) } else { None }
}
