//! Cross-module properties of the resolution pipeline.
//!
//! Each property runs over a small corpus of documents and every combination
//! of normalization flags that changes the index.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::document::{Document, Node, PositionUnit};
use crate::index::DocIndex;
use crate::search::{AnchorOptions, AnchorSpec, find_matches, locate_anchor};
use crate::text::{NormalizationOptions, normalize};

fn corpus() -> Vec<Document> {
    vec![
        Document::new(vec![Node::paragraph(vec![Node::text("Hello World")])]),
        Document::new(vec![
            Node::element("heading", vec![Node::text("§\u{00A0}4 Haf\u{00AD}tung")]),
            Node::paragraph(vec![
                Node::text("Der Verkäufer haftet  nicht"),
                Node::Break,
                Node::text("für leichte Fahrlässigkeit."),
            ]),
        ]),
        Document::new(vec![
            Node::element(
                "orderedList",
                vec![
                    Node::element(
                        "listItem",
                        vec![Node::paragraph(vec![Node::text("acciónX acción")])],
                    ),
                    Node::element(
                        "listItem",
                        vec![Node::paragraph(vec![
                            Node::text("see"),
                            Node::atom("image"),
                            Node::text("annex \t A"),
                        ])],
                    ),
                ],
            ),
            Node::paragraph(vec![]),
            Node::paragraph(vec![Node::text("aaaa")]),
        ]),
        Document::with_unit(
            vec![Node::paragraph(vec![Node::text(
                "Signed \u{270D}\u{FE0F} by 👤 the Parties",
            )])],
            PositionUnit::Utf16,
        ),
    ]
}

fn option_grid() -> Vec<NormalizationOptions> {
    let mut grid = Vec::new();
    for unify_nbsp in [false, true] {
        for remove_soft_hyphen in [false, true] {
            for collapse_whitespace in [false, true] {
                grid.push(NormalizationOptions {
                    unify_nbsp,
                    remove_soft_hyphen,
                    collapse_whitespace,
                    ..NormalizationOptions::default()
                });
            }
        }
    }
    grid
}

/// Text leaves only, so the whole document is one run of source text.
fn has_leaves(doc: &Document) -> bool {
    doc.descendants()
        .any(|(node, _)| matches!(node, Node::Break | Node::Atom(_)))
}

#[test]
fn index_invariants_hold_for_every_option_set() {
    for doc in corpus() {
        for options in option_grid() {
            let index = DocIndex::build(&doc, &options);
            invariants::check(&doc, &index, &options);
        }
    }
}

#[test]
fn rebuilding_is_idempotent() {
    for doc in corpus() {
        for options in option_grid() {
            let first = DocIndex::build(&doc, &options);
            let second = DocIndex::build(&doc, &options);
            assert_eq!(first.text().as_bytes(), second.text().as_bytes());
            assert_eq!(first.offsets(), second.offsets());
        }
    }
}

#[test]
fn matched_ranges_reproduce_source_text() {
    for doc in corpus().into_iter().filter(|d| !has_leaves(d)) {
        for options in option_grid() {
            let index = DocIndex::build(&doc, &options);
            let text: Vec<char> = index.chars();
            // Every word-sized window of the normalized text is a query.
            for start in 0..text.len() {
                let end = (start + 5).min(text.len());
                let query: String = text[start..end].iter().collect();
                for m in find_matches(&index, &query, &options) {
                    let source = doc.text_between(m.document_from, m.document_to);
                    assert_eq!(
                        normalize(&source, &options).text,
                        m.matched_text,
                        "range [{}, {}) of {:?}",
                        m.document_from,
                        m.document_to,
                        index.text()
                    );
                }
            }
        }
    }
}

#[rstest]
#[case("Hello World", "Hello", "World")]
#[case("Hello\u{00A0}World", "Hello", "World")]
#[case("Hello \u{00AD}World", "Hello", "World")]
fn after_anchor_precedes_before_anchor(
    #[case] text: &str,
    #[case] after: &str,
    #[case] before: &str,
) {
    let doc = Document::new(vec![Node::paragraph(vec![Node::text(text)])]);
    let options = AnchorOptions::default();
    let index = DocIndex::build(&doc, &options.normalization);
    let after = locate_anchor(&index, &AnchorSpec::after(after), &options).unwrap();
    let before = locate_anchor(&index, &AnchorSpec::before(before), &options).unwrap();
    assert!(after < before, "{after} !< {before}");
}

#[rstest]
#[case::nbsp("Art.\u{00A0}5", "Art. 5")]
#[case::soft_hyphen("Gewähr\u{00AD}leistung", "Gewährleistung")]
#[case::both("Ab\u{00AD}satz\u{00A0}2", "Absatz 2")]
fn normalization_equivalence(#[case] text: &str, #[case] query: &str) {
    let doc = Document::new(vec![Node::paragraph(vec![Node::text(text)])]);
    let options = NormalizationOptions::default();
    let index = DocIndex::build(&doc, &options);
    let matches = find_matches(&index, query, &options);
    assert_eq!(matches.len(), 1);
    assert_eq!(doc.text_between(matches[0].document_from, matches[0].document_to), text);
}

#[test]
fn whole_word_match_inside_list_item() {
    let doc = Document::new(vec![Node::element(
        "orderedList",
        vec![
            Node::element(
                "listItem",
                vec![Node::paragraph(vec![Node::text("acciónX acción")])],
            ),
            Node::element("listItem", vec![Node::paragraph(vec![Node::text("; see annex")])]),
        ],
    )]);
    let options = NormalizationOptions::default().whole_word(true);
    let index = DocIndex::build(&doc, &options);
    let matches = find_matches(&index, "acción", &options);
    assert_eq!(matches.len(), 1);
    assert_eq!(doc.text_between(matches[0].document_from, matches[0].document_to), "acción");
    assert_eq!(matches[0].document_from, 11);
}

#[test]
fn paragraph_end_is_not_a_word_boundary() {
    // Blocks join without a separator, so "acción" runs into "see".
    let doc = &corpus()[2];
    let whole_word = NormalizationOptions::default().whole_word(true);
    let index = DocIndex::build(doc, &whole_word);
    assert!(index.text().contains("acciónsee"));
    assert!(find_matches(&index, "acción", &whole_word).is_empty());

    let plain = NormalizationOptions::default();
    assert_eq!(find_matches(&index, "acción", &plain).len(), 2);
}

#[test]
fn repeated_pattern_is_not_double_counted() {
    let doc = &corpus()[2];
    let options = NormalizationOptions::default();
    let index = DocIndex::build(doc, &options);
    assert_eq!(find_matches(&index, "aa", &options).len(), 2);
}

#[test]
fn utf16_document_round_trips_astral_characters() {
    let doc = &corpus()[3];
    let options = NormalizationOptions::default();
    let index = DocIndex::build(doc, &options);
    let matches = find_matches(&index, "👤 the", &options);
    assert_eq!(matches.len(), 1);
    assert_eq!(doc.text_between(matches[0].document_from, matches[0].document_to), "👤 the");
    assert_eq!(matches[0].document_span().len(), 6);
}
