//! Release subtree parser
//!
//! Rebuilds a [`Release`] from a wanted `<release>` element. Only a fixed set
//! of children is read; everything else is skipped through the walker so the
//! cursor always ends just past the release.

use crate::credits::parse_artists;
use crate::cursor::TokenCursor;
use crate::dates::release_year;
use crate::error::ExtractError;
use crate::walker::{consume_element, read_text, skip_element};
use cratedig_domain::{Release, ReleaseId, Track};
use std::io::BufRead;
use tracing::trace;

/// Children of `<release>` that carry data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReleaseField {
    Title,
    Genres,
    Artists,
    Tracklist,
    Labels,
    Released,
}

impl ReleaseField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(ReleaseField::Title),
            "genres" => Some(ReleaseField::Genres),
            "artists" => Some(ReleaseField::Artists),
            "tracklist" => Some(ReleaseField::Tracklist),
            "labels" => Some(ReleaseField::Labels),
            "released" => Some(ReleaseField::Released),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackField {
    Position,
    Title,
    Artists,
}

impl TrackField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "position" => Some(TrackField::Position),
            "title" => Some(TrackField::Title),
            "artists" => Some(TrackField::Artists),
            _ => None,
        }
    }
}

/// Label name and catalog number of a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCredit {
    /// Trimmed label name, or the unknown-label placeholder
    pub name: String,

    /// Trimmed catalog number, if any
    pub catalog_number: Option<String>,
}

/// Parse the release element the cursor is positioned on
///
/// `unknown_label` stands in for labels that carry no name.
pub fn parse_release<R: BufRead>(
    cursor: &mut TokenCursor<R>,
    id: ReleaseId,
    unknown_label: &str,
) -> Result<Release, ExtractError> {
    let mut release = Release::new(id);

    consume_element(
        cursor,
        |cursor| {
            match ReleaseField::from_name(cursor.name()) {
                Some(ReleaseField::Title) => release.title = non_empty(read_text(cursor)?),
                Some(ReleaseField::Genres) => release.genres = parse_genres(cursor)?,
                Some(ReleaseField::Artists) => release.artist = non_empty(parse_artists(cursor)?),
                Some(ReleaseField::Tracklist) => release.tracks = parse_tracklist(cursor)?,
                Some(ReleaseField::Labels) => {
                    if let Some(label) = parse_labels(cursor, unknown_label)? {
                        release.label = Some(label.name);
                        release.catalog_number = label.catalog_number;
                    }
                }
                Some(ReleaseField::Released) => {
                    let raw = read_text(cursor)?;
                    match release_year(&raw) {
                        Some(year) => release.year = Some(year),
                        None => trace!("Release {}: no year in date '{}'", id, raw),
                    }
                }
                None => skip_element(cursor)?,
            }
            Ok(())
        },
        None,
    )?;

    Ok(release)
}

/// `<genres>`: text of each `<genre>` child, in order
fn parse_genres<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<Vec<String>, ExtractError> {
    let mut genres = Vec::new();

    consume_element(
        cursor,
        |cursor| {
            if cursor.is_named("genre") {
                genres.extend(non_empty(read_text(cursor)?));
                Ok(())
            } else {
                skip_element(cursor)
            }
        },
        None,
    )?;

    Ok(genres)
}

/// `<tracklist>`: every `<track>` that has a position
fn parse_tracklist<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<Vec<Track>, ExtractError> {
    let mut tracks = Vec::new();

    consume_element(
        cursor,
        |cursor| {
            if cursor.is_named("track") {
                tracks.extend(parse_track(cursor)?);
                Ok(())
            } else {
                skip_element(cursor)
            }
        },
        None,
    )?;

    Ok(tracks)
}

/// `<track>`: `None` for position-less pseudo-tracks (headings, index entries)
fn parse_track<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<Option<Track>, ExtractError> {
    let mut position = String::new();
    let mut title = None;
    let mut artist = None;

    consume_element(
        cursor,
        |cursor| {
            match TrackField::from_name(cursor.name()) {
                Some(TrackField::Position) => position = read_text(cursor)?.to_uppercase(),
                Some(TrackField::Title) => title = non_empty(read_text(cursor)?),
                Some(TrackField::Artists) => artist = non_empty(parse_artists(cursor)?),
                None => skip_element(cursor)?,
            }
            Ok(())
        },
        None,
    )?;

    if position.is_empty() {
        trace!("Dropping track without position ({:?})", title);
        return Ok(None);
    }

    Ok(Some(Track {
        position,
        title,
        artist,
    }))
}

/// `<labels>`: the first `<label>` wins, later ones are skipped
fn parse_labels<R: BufRead>(
    cursor: &mut TokenCursor<R>,
    unknown_label: &str,
) -> Result<Option<LabelCredit>, ExtractError> {
    let mut credit: Option<LabelCredit> = None;

    consume_element(
        cursor,
        |cursor| {
            if !cursor.is_named("label") {
                return skip_element(cursor);
            }
            if credit.is_some() {
                trace!("Skipping additional label");
                return skip_element(cursor);
            }
            credit = Some(parse_label(cursor, unknown_label)?);
            Ok(())
        },
        None,
    )?;

    Ok(credit)
}

/// `<label name=".." catno=".."/>`: data lives in the attributes
fn parse_label<R: BufRead>(
    cursor: &mut TokenCursor<R>,
    unknown_label: &str,
) -> Result<LabelCredit, ExtractError> {
    // Attributes belong to the current token; read them before moving on
    let name = cursor
        .attribute("name")?
        .and_then(|name| non_empty(name.trim().to_string()))
        .unwrap_or_else(|| unknown_label.to_string());
    let catalog_number = cursor
        .attribute("catno")?
        .and_then(|catno| non_empty(catno.trim().to_string()));

    skip_element(cursor)?;

    Ok(LabelCredit {
        name,
        catalog_number,
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::TokenKind;

    fn parse(xml: &str) -> Release {
        let mut cursor = TokenCursor::from_xml(xml);
        while cursor.advance().unwrap() != TokenKind::ElementStart {}
        let release = parse_release(&mut cursor, ReleaseId::new(1), "Unknown").unwrap();
        assert_eq!(cursor.advance().unwrap(), TokenKind::EndOfStream);
        release
    }

    #[test]
    fn test_title_and_genres() {
        let release = parse(
            "<release><title>Kind of Blue</title><genres><genre>Jazz</genre><style>x</style><genre>Modal</genre></genres></release>",
        );
        assert_eq!(release.title.as_deref(), Some("Kind of Blue"));
        assert_eq!(release.genres, vec!["Jazz", "Modal"]);
    }

    #[test]
    fn test_release_artist() {
        let release = parse(
            "<release><artists><artist><name>A</name><join>,</join></artist><artist><name>B</name><join>feat.</join></artist><artist><name>C</name></artist></artists></release>",
        );
        assert_eq!(release.artist.as_deref(), Some("A, B feat. C"));
    }

    #[test]
    fn test_track_without_position_is_dropped() {
        let release = parse(
            "<release><tracklist>\
               <track><position></position><title>X</title></track>\
               <track><position>a1</position><title>Y</title></track>\
             </tracklist></release>",
        );
        assert_eq!(release.tracks.len(), 1);
        assert_eq!(release.tracks[0].position, "A1");
        assert_eq!(release.tracks[0].title.as_deref(), Some("Y"));
    }

    #[test]
    fn test_track_artist_and_nested_skips() {
        let release = parse(
            "<release><tracklist><track>\
               <position>B2</position><duration>3:10</duration>\
               <artists><artist><name>Guest</name></artist></artists>\
               <extraartists><artist><name>Producer</name></artist></extraartists>\
             </track></tracklist></release>",
        );
        let track = &release.tracks[0];
        assert_eq!(track.artist.as_deref(), Some("Guest"));
        assert_eq!(track.title, None);
    }

    #[test]
    fn test_first_label_wins() {
        let release = parse(
            r#"<release><labels><label name=" Blue Note " catno=" BLP 1 "/><label name="Other" catno="2"/></labels></release>"#,
        );
        assert_eq!(release.label.as_deref(), Some("Blue Note"));
        assert_eq!(release.catalog_number.as_deref(), Some("BLP 1"));
    }

    #[test]
    fn test_label_without_name_is_unknown() {
        let release = parse(r#"<release><labels><label name="  " catno=""/></labels></release>"#);
        assert_eq!(release.label.as_deref(), Some("Unknown"));
        assert_eq!(release.catalog_number, None);
    }

    #[test]
    fn test_label_children_are_skipped() {
        let release = parse(
            r#"<release><labels><label name="L" catno="C"><sub>nested</sub></label></labels><title>T</title></release>"#,
        );
        assert_eq!(release.label.as_deref(), Some("L"));
        assert_eq!(release.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_labels_without_label() {
        let release = parse("<release><labels><company/></labels></release>");
        assert_eq!(release.label, None);
    }

    #[test]
    fn test_released_year_reduction() {
        assert_eq!(parse("<release><released>1975-03-02</released></release>").year.as_deref(), Some("1975"));
        assert_eq!(parse("<release><released>1975</released></release>").year.as_deref(), Some("1975"));
        assert_eq!(parse("<release><released>unknown</released></release>").year, None);
    }

    #[test]
    fn test_unknown_children_skipped() {
        let release = parse(
            "<release><images><image uri=\"x\"/></images><notes>n</notes><title>T</title><videos><video><title>V</title></video></videos></release>",
        );
        assert_eq!(release.title.as_deref(), Some("T"));
        assert!(release.genres.is_empty());
        assert!(release.tracks.is_empty());
    }

    #[test]
    fn test_empty_fields_stay_absent() {
        let release = parse("<release><title/><genres/><artists/><tracklist/></release>");
        assert_eq!(release, Release::new(ReleaseId::new(1)));
    }
}
