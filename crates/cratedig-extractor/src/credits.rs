//! Compound artist credits
//!
//! An `<artists>` list holds `<artist>` entries, each with a `name`, an
//! optional name variation (`anv`) and a `join` word linking it to the next
//! artist. The credit is the flat sequence name, join, name, join, ... with
//! the trailing join dropped.

use crate::cursor::TokenCursor;
use crate::error::ExtractError;
use crate::walker::{consume_element, read_text, skip_element};
use std::io::BufRead;

/// One artist of a credit list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistCredit {
    /// Display name (the name variation when one is given)
    pub name: String,

    /// Word joining this artist to the next one (`&`, `feat.`, `,`)
    pub join: String,
}

impl ArtistCredit {
    /// Create a credit entry
    pub fn new(name: impl Into<String>, join: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            join: join.into(),
        }
    }
}

#[derive(Clone, Copy)]
enum ArtistField {
    Name,
    NameVariation,
    Join,
}

impl ArtistField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ArtistField::Name),
            "anv" => Some(ArtistField::NameVariation),
            "join" => Some(ArtistField::Join),
            _ => None,
        }
    }
}

/// Parse an `<artists>` element into its compound credit string
///
/// An empty list yields an empty string.
pub fn parse_artists<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<String, ExtractError> {
    let mut credits = Vec::new();

    consume_element(
        cursor,
        |cursor| {
            if cursor.is_named("artist") {
                credits.push(parse_artist(cursor)?);
                Ok(())
            } else {
                skip_element(cursor)
            }
        },
        None,
    )?;

    Ok(join_credits(&credits))
}

fn parse_artist<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<ArtistCredit, ExtractError> {
    let mut name = String::new();
    let mut variation = String::new();
    let mut join = String::new();

    consume_element(
        cursor,
        |cursor| {
            match ArtistField::from_name(cursor.name()) {
                Some(ArtistField::Name) => name = read_text(cursor)?,
                Some(ArtistField::NameVariation) => variation = read_text(cursor)?,
                Some(ArtistField::Join) => join = read_text(cursor)?,
                None => skip_element(cursor)?,
            }
            Ok(())
        },
        None,
    )?;

    if !variation.is_empty() {
        name = variation;
    }
    Ok(ArtistCredit { name, join })
}

/// Join credits into one display string
///
/// Empty components are left out, and `" , "` collapses to `", "` so a comma
/// join sits directly after the preceding name.
pub fn join_credits(credits: &[ArtistCredit]) -> String {
    let mut components: Vec<&str> = Vec::with_capacity(credits.len() * 2);
    for credit in credits {
        components.push(&credit.name);
        components.push(&credit.join);
    }
    // Trailing join has no artist after it
    components.pop();

    components
        .into_iter()
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" , ", ", ")
}
