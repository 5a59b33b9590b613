use ftl_syntax::ast::{Entry, PatternElement, Resource, Span};
use ftl_syntax::parser::{parse, ParseOptions, Parser};

fn parse_with_spans(source: &str) -> Resource {
    Parser::new(source, ParseOptions { with_spans: true }).parse()
}

#[test]
fn spans_are_absent_by_default() {
    let resource = parse("foo = Bar\n");
    assert!(resource.span.is_none());
    match &resource.body[..] {
        [Entry::Message(message)] => {
            assert!(message.span.is_none());
            assert!(message.id.span.is_none());
            let value = message.value.as_ref().unwrap();
            assert!(value.span.is_none());
            match &value.elements[0] {
                PatternElement::TextElement(text) => assert!(text.span.is_none()),
                other => panic!("expected text, got {other:?}"),
            }
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn simple_message_offsets() {
    let resource = parse_with_spans("foo = Bar\n");
    assert_eq!(resource.span, Some(Span::new(0, 10)));
    match &resource.body[..] {
        [Entry::Message(message)] => {
            assert_eq!(message.span, Some(Span::new(0, 9)));
            assert_eq!(message.id.span, Some(Span::new(0, 3)));
            let value = message.value.as_ref().unwrap();
            assert_eq!(value.span, Some(Span::new(6, 9)));
            match &value.elements[0] {
                PatternElement::TextElement(text) => {
                    assert_eq!(text.span, Some(Span::new(6, 9)));
                }
                other => panic!("expected text, got {other:?}"),
            }
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn children_nest_inside_parents() {
    let resource = parse_with_spans("msg = { $n ->\n   *[one] One\n    [other] Other\n  }\n");
    let resource_span = resource.span.expect("resource span");
    match &resource.body[..] {
        [Entry::Message(message)] => {
            let message_span = message.span.expect("message span");
            assert!(message_span.start >= resource_span.start);
            assert!(message_span.end <= resource_span.end);

            let value = message.value.as_ref().unwrap();
            let value_span = value.span.expect("pattern span");
            assert!(value_span.start >= message_span.start);
            assert!(value_span.end <= message_span.end);

            match &value.elements[0] {
                PatternElement::Placeable(placeable) => {
                    let placeable_span = placeable.span.expect("placeable span");
                    assert!(placeable_span.start >= value_span.start);
                    assert!(placeable_span.end <= value_span.end);
                }
                other => panic!("expected placeable, got {other:?}"),
            }
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn sibling_spans_are_ordered() {
    let resource = parse_with_spans("foo = a { $x } b\n");
    match &resource.body[..] {
        [Entry::Message(message)] => {
            let elements = &message.value.as_ref().unwrap().elements;
            let spans: Vec<Span> = elements
                .iter()
                .map(|element| match element {
                    PatternElement::TextElement(text) => text.span.expect("span"),
                    PatternElement::Placeable(placeable) => placeable.span.expect("span"),
                })
                .collect();
            for pair in spans.windows(2) {
                assert!(pair[0].end <= pair[1].start);
            }
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn attached_comment_extends_the_message_span() {
    let source = "# attached\nfoo = bar\n";
    let resource = parse_with_spans(source);
    match &resource.body[..] {
        [Entry::Message(message)] => {
            let message_span = message.span.expect("message span");
            let comment_span = message
                .comment
                .as_ref()
                .and_then(|comment| comment.span)
                .expect("comment span");
            assert_eq!(message_span.start, comment_span.start);
            assert_eq!(comment_span.start, 0);
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn merged_text_elements_merge_their_spans() {
    let source = "foo =\n    multi\n    line\n";
    let resource = parse_with_spans(source);
    match &resource.body[..] {
        [Entry::Message(message)] => {
            let elements = &message.value.as_ref().unwrap().elements;
            match &elements[..] {
                [PatternElement::TextElement(text)] => {
                    let span = text.span.expect("text span");
                    // From the first char of "multi" to the end of "line".
                    assert_eq!(&source[span.start..span.end], "multi\n    line");
                }
                other => panic!("expected one text element, got {other:?}"),
            }
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn crlf_offsets_count_both_bytes() {
    let resource = parse_with_spans("a = b\r\nc = d\r\n");
    assert_eq!(resource.span, Some(Span::new(0, 14)));
    match &resource.body[..] {
        [Entry::Message(first), Entry::Message(second)] => {
            assert_eq!(first.span, Some(Span::new(0, 5)));
            assert_eq!(second.span, Some(Span::new(7, 12)));
        }
        other => panic!("expected two messages, got {other:?}"),
    }
}

#[test]
fn annotation_spans_exist_even_without_span_tracking() {
    let resource = parse("foo =\n");
    match &resource.body[..] {
        [Entry::Junk(junk)] => {
            assert!(junk.span.is_none());
            assert!(junk.annotations[0].span.is_empty());
            assert_eq!(junk.annotations[0].span.start, 5);
        }
        other => panic!("expected junk, got {other:?}"),
    }
}
