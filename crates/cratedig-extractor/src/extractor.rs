//! Core Extractor implementation

use crate::annotations::AnnotationIndex;
use crate::assembler::CollectionAssembler;
use crate::config::ExtractorConfig;
use crate::cursor::{TokenCursor, TokenKind};
use crate::error::ExtractError;
use crate::expander::expand;
use crate::release::parse_release;
use crate::types::{Extraction, ExtractionSummary};
use crate::walker::{consume_element, skip_element};
use cratedig_domain::ReleaseId;
use encoding_rs::Encoding;
use std::collections::HashSet;
use std::io::BufRead;
use tracing::{debug, info, trace, warn};

/// The Extractor walks an export once and rebuilds the wanted releases
pub struct Extractor<'a> {
    index: &'a AnnotationIndex,
    config: ExtractorConfig,
}

/// Mutable state of one run
struct RunState {
    assembler: CollectionAssembler,
    summary: ExtractionSummary,
    seen: HashSet<ReleaseId>,
}

impl<'a> Extractor<'a> {
    /// Create a new Extractor over a loaded annotation index
    pub fn new(index: &'a AnnotationIndex, config: ExtractorConfig) -> Self {
        Self { index, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Walk the whole stream and assemble the collection
    ///
    /// All-or-nothing: any error aborts the run and no partial document is
    /// returned.
    pub fn run<R: BufRead>(&self, cursor: &mut TokenCursor<R>) -> Result<Extraction, ExtractError> {
        self.config.validate().map_err(ExtractError::Config)?;

        info!(
            "Starting extraction: {} wanted releases, {} copies",
            self.index.len(),
            self.index.total_annotations()
        );

        self.find_container(cursor)?;

        let mut state = RunState {
            assembler: CollectionAssembler::new(),
            summary: ExtractionSummary::new(),
            seen: HashSet::new(),
        };

        consume_element(cursor, |cursor| self.visit_record(cursor, &mut state), None)?;

        Self::drain_trailing(cursor)?;

        let RunState {
            assembler,
            mut summary,
            seen,
        } = state;

        let mut missing: Vec<ReleaseId> = self.index.ids().filter(|id| !seen.contains(id)).collect();
        missing.sort();
        summary.missing = missing;

        if self.config.report_missing && !summary.all_found() {
            warn!(
                "{} collection releases not found in the export: {}",
                summary.missing.len(),
                summary.missing_list()
            );
        }

        info!(
            "Extraction complete: {} scanned, {} matched, {} entries",
            summary.records_scanned, summary.releases_matched, summary.entries_emitted
        );

        Ok(Extraction {
            collection: assembler.finish(),
            summary,
        })
    }

    /// Advance to the root element and check it is the container
    fn find_container<R: BufRead>(&self, cursor: &mut TokenCursor<R>) -> Result<(), ExtractError> {
        let container = &self.config.container_element;

        loop {
            match cursor.advance()? {
                TokenKind::DocumentStart => check_encoding(cursor)?,
                TokenKind::ElementStart => break,
                TokenKind::EndOfStream => {
                    return Err(ExtractError::Schema(format!(
                        "document has no <{}> element",
                        container
                    )))
                }
                TokenKind::ElementEnd | TokenKind::Text | TokenKind::Other => {}
            }
        }

        if !cursor.is_named(container) {
            return Err(ExtractError::Schema(format!(
                "expected root element <{}>, found <{}>",
                container,
                cursor.name()
            )));
        }

        debug!("Entered <{}>", container);
        Ok(())
    }

    /// Handle one candidate record directly under the container
    fn visit_record<R: BufRead>(
        &self,
        cursor: &mut TokenCursor<R>,
        state: &mut RunState,
    ) -> Result<(), ExtractError> {
        state.summary.record_scanned();
        self.report_progress(&state.summary);

        let raw_id = cursor.attribute(&self.config.id_attribute)?.unwrap_or_default();
        let wanted = raw_id
            .parse::<ReleaseId>()
            .ok()
            .filter(|id| self.index.contains(*id));

        let Some(id) = wanted else {
            return skip_element(cursor);
        };

        let release = parse_release(cursor, id, &self.config.unknown_label)
            .map_err(|e| e.in_record(raw_id.as_str()))?;

        debug!(
            "Matched release {} ({})",
            id,
            release.title.as_deref().unwrap_or("untitled")
        );

        let entries = expand(release, self.index);
        state.summary.record_match(entries.len());
        state.assembler.push(entries);
        state.seen.insert(id);
        Ok(())
    }

    fn report_progress(&self, summary: &ExtractionSummary) {
        let interval = self.config.progress_interval;
        if interval > 0 && summary.records_scanned % interval == 0 {
            info!(
                "Progress: {} releases scanned, {} matched",
                summary.records_scanned, summary.releases_matched
            );
        }
    }

    /// Consume everything after the container; a second element is an error
    fn drain_trailing<R: BufRead>(cursor: &mut TokenCursor<R>) -> Result<(), ExtractError> {
        loop {
            match cursor.advance()? {
                TokenKind::EndOfStream => return Ok(()),
                TokenKind::ElementStart => {
                    return Err(ExtractError::Stream(format!(
                        "unexpected element <{}> after the document element",
                        cursor.name()
                    )))
                }
                _ => trace!("Ignoring trailing token"),
            }
        }
    }
}

/// Resolve the declared document encoding; absent means UTF-8
fn check_encoding<R: BufRead>(cursor: &TokenCursor<R>) -> Result<(), ExtractError> {
    match cursor.declared_encoding()? {
        Some(label) => match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) => {
                debug!("Document encoding: {}", encoding.name());
                Ok(())
            }
            None => Err(ExtractError::Encoding(label)),
        },
        None => {
            debug!("No declared encoding, assuming UTF-8");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cratedig_domain::Annotation;

    fn index(ids: &[i64]) -> AnnotationIndex {
        let mut index = AnnotationIndex::new();
        for id in ids {
            index.insert(ReleaseId::new(*id), Annotation::new("Vinyl", ""));
        }
        index
    }

    fn run(xml: &str, index: &AnnotationIndex) -> Result<Extraction, ExtractError> {
        let extractor = Extractor::new(index, ExtractorConfig::default());
        extractor.run(&mut TokenCursor::from_xml(xml))
    }

    #[test]
    fn test_check_encoding_accepts_known_labels() {
        let mut cursor = TokenCursor::from_xml(r#"<?xml version="1.0" encoding="latin1"?><releases/>"#);
        cursor.advance().unwrap();
        assert!(check_encoding(&cursor).is_ok());
    }

    #[test]
    fn test_check_encoding_rejects_unknown_label() {
        let mut cursor = TokenCursor::from_xml(r#"<?xml version="1.0" encoding="klingon-8"?><releases/>"#);
        cursor.advance().unwrap();
        assert!(matches!(
            check_encoding(&cursor),
            Err(ExtractError::Encoding(label)) if label == "klingon-8"
        ));
    }

    #[test]
    fn test_wrong_root_is_schema_error() {
        let result = run("<artists><artist/></artists>", &index(&[1]));
        assert!(matches!(result, Err(ExtractError::Schema(_))));
    }

    #[test]
    fn test_empty_document_is_schema_error() {
        let result = run("<!-- nothing here -->", &index(&[1]));
        assert!(matches!(result, Err(ExtractError::Schema(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let index = index(&[1]);
        let config = ExtractorConfig {
            id_attribute: String::new(),
            ..Default::default()
        };
        let result = Extractor::new(&index, config).run(&mut TokenCursor::from_xml("<releases/>"));
        assert!(matches!(result, Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_custom_container_and_attribute() {
        let index = index(&[5]);
        let config = ExtractorConfig {
            container_element: "catalog".to_string(),
            id_attribute: "ref".to_string(),
            ..Default::default()
        };
        let xml = r#"<catalog><release ref="5"><title>T</title></release></catalog>"#;
        let extraction = Extractor::new(&index, config)
            .run(&mut TokenCursor::from_xml(xml))
            .unwrap();
        assert_eq!(extraction.collection.len(), 1);
    }

    #[test]
    fn test_summary_counts_and_missing() {
        let xml = r#"<releases><release id="1"/><release id="2"/><release id="x"/><release/></releases>"#;
        let extraction = run(xml, &index(&[2, 30, 7])).unwrap();
        let summary = extraction.summary;

        assert_eq!(summary.records_scanned, 4);
        assert_eq!(summary.releases_matched, 1);
        assert_eq!(summary.entries_emitted, 1);
        assert_eq!(summary.missing, vec![ReleaseId::new(7), ReleaseId::new(30)]);
    }

    #[test]
    fn test_id_attribute_is_trimmed() {
        let extraction = run(r#"<releases><release id=" 2 "/></releases>"#, &index(&[2])).unwrap();
        assert_eq!(extraction.collection.len(), 1);
    }
}
