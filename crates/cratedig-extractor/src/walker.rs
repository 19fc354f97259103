//! Recursive-descent subtree walker
//!
//! [`consume_element`] is the only place that moves the cursor through an
//! element's content. It is called right after the cursor has reached an
//! element start and returns once the matching end has been consumed, so
//! the next `advance` yields the token following that element. Every parser
//! above it is built from this function and [`skip_element`].

use crate::cursor::{TokenCursor, TokenKind};
use crate::error::ExtractError;
use std::io::BufRead;

/// Consume the content of the element the cursor is positioned on
///
/// `on_child` is invoked with the cursor on each direct child start and must
/// consume that child completely (through `consume_element` or
/// [`skip_element`]). When `text` is given, each non-whitespace text run
/// overwrites it; mixed content is not supported and the last run wins.
pub fn consume_element<R, F>(
    cursor: &mut TokenCursor<R>,
    mut on_child: F,
    mut text: Option<&mut String>,
) -> Result<(), ExtractError>
where
    R: BufRead,
    F: FnMut(&mut TokenCursor<R>) -> Result<(), ExtractError>,
{
    loop {
        match cursor.advance()? {
            TokenKind::ElementStart => on_child(cursor)?,
            TokenKind::Text => {
                if let Some(sink) = text.as_deref_mut() {
                    if !cursor.is_whitespace() {
                        if let Some(content) = cursor.text()? {
                            sink.clear();
                            sink.push_str(&content);
                        }
                    }
                }
            }
            TokenKind::ElementEnd => return Ok(()),
            TokenKind::EndOfStream => {
                return Err(ExtractError::Schema(
                    "unexpected end of stream inside an element".to_string(),
                ))
            }
            TokenKind::DocumentStart | TokenKind::Other => {}
        }
    }
}

/// Discard the element the cursor is positioned on, descendants included
pub fn skip_element<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<(), ExtractError> {
    consume_element(cursor, skip_element, None)
}

/// Read the text body of a leaf element, skipping any child elements
pub fn read_text<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<String, ExtractError> {
    let mut text = String::new();
    consume_element(cursor, skip_element, Some(&mut text))?;
    Ok(text)
}
