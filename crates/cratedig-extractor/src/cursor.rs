//! Forward-only token cursor over the export stream

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Kind of the token the cursor is positioned on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// XML declaration
    DocumentStart,
    /// Opening tag (self-closing tags are expanded into start + end)
    ElementStart,
    /// Closing tag
    ElementEnd,
    /// Character data or CDATA
    Text,
    /// Comments, processing instructions, doctype
    Other,
    /// No more input
    EndOfStream,
}

/// Single exclusively-owned cursor over a token stream
///
/// Only the current token is held. Its name, attributes and text are valid
/// until the next [`advance`](TokenCursor::advance); callers that need a
/// value later must copy it out first.
pub struct TokenCursor<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    current: Event<'static>,
    name: String,
    consumed: u64,
}

impl<R: BufRead> TokenCursor<R> {
    /// Create a cursor over a buffered byte source
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.expand_empty_elements(true);

        Self {
            reader,
            buf: Vec::new(),
            current: Event::Eof,
            name: String::new(),
            consumed: 0,
        }
    }

    /// Move to the next token
    ///
    /// Fails with [`ExtractError::Stream`] when the source is malformed
    /// (mismatched end tags, broken markup, read failures).
    pub fn advance(&mut self) -> Result<TokenKind, ExtractError> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf)?.into_owned();
        self.consumed += 1;

        self.name.clear();
        if let Event::Start(start) = &event {
            let local = start.local_name();
            let name = self.reader.decoder().decode(local.as_ref())?;
            self.name.push_str(&name);
        }

        self.current = event;
        Ok(self.kind())
    }

    /// Kind of the current token
    pub fn kind(&self) -> TokenKind {
        match &self.current {
            Event::Decl(_) => TokenKind::DocumentStart,
            Event::Start(_) => TokenKind::ElementStart,
            Event::End(_) => TokenKind::ElementEnd,
            Event::Text(_) | Event::CData(_) => TokenKind::Text,
            Event::Eof => TokenKind::EndOfStream,
            _ => TokenKind::Other,
        }
    }

    /// Local name of the current element start; empty for other tokens
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the current token starts an element called `name`
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// Unescaped value of an attribute of the current element start
    pub fn attribute(&self, key: &str) -> Result<Option<String>, ExtractError> {
        let Event::Start(start) = &self.current else {
            return Ok(None);
        };

        match start.try_get_attribute(key)? {
            Some(attr) => Ok(Some(
                attr.decode_and_unescape_value(&self.reader)?.into_owned(),
            )),
            None => Ok(None),
        }
    }

    /// Content of the current text token
    pub fn text(&self) -> Result<Option<Cow<'_, str>>, ExtractError> {
        match &self.current {
            Event::Text(text) => Ok(Some(text.unescape()?)),
            Event::CData(data) => Ok(Some(self.reader.decoder().decode(data)?)),
            _ => Ok(None),
        }
    }

    /// Whether the current text token holds only whitespace
    pub fn is_whitespace(&self) -> bool {
        match &self.current {
            Event::Text(text) => text.iter().all(u8::is_ascii_whitespace),
            Event::CData(data) => data.iter().all(u8::is_ascii_whitespace),
            _ => false,
        }
    }

    /// Encoding label from the XML declaration, if the current token is one
    pub fn declared_encoding(&self) -> Result<Option<String>, ExtractError> {
        let Event::Decl(decl) = &self.current else {
            return Ok(None);
        };

        match decl.encoding() {
            Some(label) => Ok(Some(String::from_utf8_lossy(&label?).into_owned())),
            None => Ok(None),
        }
    }

    /// Number of tokens consumed so far
    pub fn tokens_consumed(&self) -> u64 {
        self.consumed
    }

    /// Byte offset of the reader in the source
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }
}

impl<'a> TokenCursor<&'a [u8]> {
    /// Create a cursor over an in-memory document
    pub fn from_xml(xml: &'a str) -> Self {
        Self::new(xml.as_bytes())
    }
}

impl TokenCursor<BufReader<File>> {
    /// Open the export at `path`
    ///
    /// Fails with [`ExtractError::Resource`] when the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let file = File::open(path).map_err(|source| ExtractError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}
