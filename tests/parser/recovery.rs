use ftl_syntax::ast::Entry;
use ftl_syntax::parser::{parse, ParseOptions, Parser};

#[test]
fn garbage_becomes_junk_with_expected_entry_code() {
    let resource = parse("@@@\n");
    match &resource.body[..] {
        [Entry::Junk(junk)] => {
            assert_eq!(junk.content, "@@@\n");
            assert_eq!(junk.annotations.len(), 1);
            assert_eq!(junk.annotations[0].code, "E0002");
        }
        other => panic!("expected junk, got {other:?}"),
    }
}

#[test]
fn unterminated_placeable_at_end_of_input() {
    let resource = parse("foo = {");
    match &resource.body[..] {
        [Entry::Junk(junk)] => {
            assert_eq!(junk.content, "foo = {");
            assert_eq!(junk.annotations[0].code, "E0028");
        }
        other => panic!("expected junk, got {other:?}"),
    }
}

#[test]
fn parsing_resumes_at_the_next_entry() {
    let resource = parse("err = {\nok = Fine\n");
    assert_eq!(resource.body.len(), 2);
    match &resource.body[0] {
        Entry::Junk(junk) => assert_eq!(junk.content, "err = {\n"),
        other => panic!("expected junk, got {other:?}"),
    }
    match &resource.body[1] {
        Entry::Message(message) => assert_eq!(message.id.name, "ok"),
        other => panic!("expected message, got {other:?}"),
    }
}

#[test]
fn junk_swallows_continuation_lines() {
    // The error line and its indented continuations resynchronize only at
    // a line whose first character can start an entry.
    let resource = parse("err = { $\n    still junk\nok = Fine\n");
    assert_eq!(resource.body.len(), 2);
    match &resource.body[0] {
        Entry::Junk(junk) => {
            assert_eq!(junk.content, "err = { $\n    still junk\n");
        }
        other => panic!("expected junk, got {other:?}"),
    }
}

#[test]
fn one_failure_does_not_leak_into_neighbours() {
    let resource = parse("one = One\nbad = {\ntwo = Two\n");
    assert_eq!(resource.body.len(), 3);
    assert!(matches!(&resource.body[0], Entry::Message(_)));
    assert!(matches!(&resource.body[1], Entry::Junk(_)));
    assert!(matches!(&resource.body[2], Entry::Message(_)));
}

#[test]
fn junk_annotation_position_is_inside_the_junk_span() {
    let source = "key = { $broken\nnext = Ok\n";
    let resource = Parser::new(source, ParseOptions { with_spans: true }).parse();
    match &resource.body[0] {
        Entry::Junk(junk) => {
            let span = junk.span.expect("junk span");
            assert_eq!(&source[span.start..span.end], junk.content);
            let annotation = &junk.annotations[0];
            assert!(annotation.span.is_empty());
            assert!(annotation.span.start >= span.start);
            assert!(annotation.span.start <= span.end);
        }
        other => panic!("expected junk, got {other:?}"),
    }
}

#[test]
fn missing_variant_bracket_reports_expected_token() {
    let resource = parse("msg = { $n ->\n   *[one One\n  }\n");
    match &resource.body[..] {
        [Entry::Junk(junk)] => {
            assert_eq!(junk.annotations[0].code, "E0003");
            assert_eq!(junk.annotations[0].arguments, vec!["]".to_string()]);
        }
        other => panic!("expected junk, got {other:?}"),
    }
}

#[test]
fn annotation_carries_a_message() {
    let resource = parse("foo =\n");
    match &resource.body[..] {
        [Entry::Junk(junk)] => {
            assert!(!junk.annotations[0].message.is_empty());
        }
        other => panic!("expected junk, got {other:?}"),
    }
}

#[test]
fn entry_spans_cover_everything_but_blanks() {
    // Entries appear in source order without overlap, junk reproduces its
    // slice verbatim, and the bytes outside every entry span are blanks.
    let source = "one = One\n@@@ junk line\ntwo = Two\n";
    let resource = Parser::new(source, ParseOptions { with_spans: true }).parse();

    let mut covered = vec![false; source.len()];
    let mut previous_end = 0;
    for entry in &resource.body {
        let span = match entry {
            Entry::Message(message) => message.span.expect("span"),
            Entry::Junk(junk) => {
                let span = junk.span.expect("span");
                assert_eq!(&source[span.start..span.end], junk.content);
                span
            }
            other => panic!("unexpected entry {other:?}"),
        };
        assert!(span.start >= previous_end, "entries out of order");
        previous_end = span.end;
        for slot in &mut covered[span.start..span.end] {
            *slot = true;
        }
    }

    for (index, byte) in source.bytes().enumerate() {
        if !covered[index] {
            assert!(
                byte == b'\n' || byte == b' ',
                "uncovered non-blank byte {byte:#x} at {index}"
            );
        }
    }
}
