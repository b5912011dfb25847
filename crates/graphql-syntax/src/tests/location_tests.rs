//! Tests for Location spans and the ParseOptions that control them.

use crate::Location;
use crate::ParseOptions;
use crate::Source;
use crate::ast::Selection;
use crate::tests::utils::first_field;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_with_loc;

/// Node spans run from the node's first token to the end of the last token
/// consumed while parsing it.
#[test]
fn spans_cover_nodes() {
    //             0123456789
    let document = parse_with_loc("{ a(x: 1) }");

    let doc_loc = document.loc.as_ref().expect("document location");
    assert_eq!((doc_loc.start, doc_loc.end), (0, 11));

    let operation = only_operation(&document);
    let op_loc = operation.loc.as_ref().expect("operation location");
    assert_eq!((op_loc.start, op_loc.end), (0, 11));

    let field = first_field(&operation.selection_set);
    let field_loc = field.loc.as_ref().expect("field location");
    assert_eq!((field_loc.start, field_loc.end), (2, 9));

    let arg_loc = field.arguments[0].loc.as_ref().expect("argument location");
    assert_eq!((arg_loc.start, arg_loc.end), (4, 8));
}

/// Locations re-slice the original text via the retained source.
#[test]
fn location_text_reslices_source() {
    let document = parse_with_loc("{ hero { name } }");
    let operation = only_operation(&document);
    let hero = first_field(&operation.selection_set);

    let loc = hero.loc.as_ref().expect("field location");
    assert_eq!(loc.text(), Some("hero { name }"));
    assert_eq!(loc.source.as_ref().map(|s| s.name()), Some("GraphQL"));
}

#[test]
fn name_spans_cover_just_the_name() {
    let document = parse_with_loc("{ alias: field }");
    let operation = only_operation(&document);
    let field = first_field(&operation.selection_set);

    let alias_loc = field
        .alias
        .as_ref()
        .and_then(|alias| alias.loc.as_ref())
        .expect("alias location");
    assert_eq!((alias_loc.start, alias_loc.end), (2, 7));

    let name_loc = field.name.loc.as_ref().expect("name location");
    assert_eq!((name_loc.start, name_loc.end), (9, 14));
}

/// `no_location` strips Location from every node.
#[test]
fn no_location_omits_all_spans() {
    let document = crate::parse(
        Source::new("{ a { b ...f } }"),
        ParseOptions::default().without_locations(),
    )
    .expect("parse");

    assert!(document.loc.is_none());
    let operation = only_operation(&document);
    assert!(operation.loc.is_none());
    assert!(operation.selection_set.loc.is_none());

    let a = first_field(&operation.selection_set);
    assert!(a.loc.is_none());
    assert!(a.name.loc.is_none());
    let inner = a.selection_set.as_ref().expect("nested selection set");
    match &inner.selections[1] {
        Selection::FragmentSpread(spread) => assert!(spread.loc.is_none()),
        other => panic!("expected a fragment spread, got {other:?}"),
    }
}

/// `no_source` keeps offsets but drops the source back-reference.
#[test]
fn no_source_keeps_offsets_only() {
    let document = crate::parse(
        Source::new("{ a }"),
        ParseOptions::default().without_source(),
    )
    .expect("parse");

    let operation = only_operation(&document);
    let field = first_field(&operation.selection_set);
    let loc = field.loc.as_ref().expect("field location");
    assert_eq!(loc, &Location::new(2, 3));
    assert!(loc.source.is_none());
    assert_eq!(loc.text(), None);
}

/// Two parses of the same text agree structurally once locations are
/// ignored, and locations themselves are reproducible.
#[test]
fn reparse_is_deterministic() {
    let body = "query Q($v: [Int!] = [1, 2]) { a(x: $v) @d: 3 { ...f } }";

    let with_loc_a = parse_with_loc(body);
    let with_loc_b = parse_with_loc(body);
    assert_eq!(with_loc_a, with_loc_b);

    let options = ParseOptions::default().without_locations();
    let bare_a = crate::parse(Source::new(body), options).expect("parse");
    let bare_b = crate::parse(Source::new(body), options).expect("parse");
    assert_eq!(bare_a, bare_b);
}
