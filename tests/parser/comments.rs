use ftl_syntax::ast::Entry;
use ftl_syntax::parse;

#[test]
fn comment_levels_map_to_entry_kinds() {
    let resource = parse("# simple\n\n## group\n\n### resource\n");
    match &resource.body[..] {
        [Entry::Comment(simple), Entry::GroupComment(group), Entry::ResourceComment(top)] => {
            assert_eq!(simple.content, "simple");
            assert_eq!(group.content, "group");
            assert_eq!(top.content, "resource");
        }
        other => panic!("expected three comments, got {other:?}"),
    }
}

#[test]
fn empty_comment_lines_have_empty_content() {
    let resource = parse("#\n");
    match &resource.body[..] {
        [Entry::Comment(comment)] => assert_eq!(comment.content, ""),
        other => panic!("expected a comment, got {other:?}"),
    }
}

#[test]
fn consecutive_lines_of_one_level_join_with_newlines() {
    let resource = parse("# first\n# second\n# third\n");
    match &resource.body[..] {
        [Entry::Comment(comment)] => {
            assert_eq!(comment.content, "first\nsecond\nthird");
        }
        other => panic!("expected one comment, got {other:?}"),
    }
}

#[test]
fn different_levels_do_not_join() {
    let resource = parse("# one\n## two\n");
    assert_eq!(resource.body.len(), 2);
    assert!(matches!(&resource.body[0], Entry::Comment(_)));
    assert!(matches!(&resource.body[1], Entry::GroupComment(_)));
}

#[test]
fn comment_attaches_to_adjacent_message() {
    let resource = parse("# attached\nfoo = bar\n");
    match &resource.body[..] {
        [Entry::Message(message)] => {
            let comment = message.comment.as_ref().expect("attached comment");
            assert_eq!(comment.content, "attached");
        }
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn comment_attaches_to_adjacent_term() {
    let resource = parse("# about the brand\n-brand = Firefox\n");
    match &resource.body[..] {
        [Entry::Term(term)] => {
            let comment = term.comment.as_ref().expect("attached comment");
            assert_eq!(comment.content, "about the brand");
        }
        other => panic!("expected one term, got {other:?}"),
    }
}

#[test]
fn blank_line_prevents_attachment() {
    let resource = parse("# standalone\n\nfoo = bar\n");
    match &resource.body[..] {
        [Entry::Comment(comment), Entry::Message(message)] => {
            assert_eq!(comment.content, "standalone");
            assert!(message.comment.is_none());
        }
        other => panic!("expected comment then message, got {other:?}"),
    }
}

#[test]
fn group_and_resource_comments_never_attach() {
    let resource = parse("## group\nfoo = bar\n\n### top\nbar = baz\n");
    assert_eq!(resource.body.len(), 4);
    assert!(matches!(&resource.body[0], Entry::GroupComment(_)));
    match &resource.body[1] {
        Entry::Message(message) => assert!(message.comment.is_none()),
        other => panic!("expected message, got {other:?}"),
    }
    assert!(matches!(&resource.body[2], Entry::ResourceComment(_)));
    match &resource.body[3] {
        Entry::Message(message) => assert!(message.comment.is_none()),
        other => panic!("expected message, got {other:?}"),
    }
}

#[test]
fn comment_before_junk_stays_standalone() {
    let resource = parse("# note\n@@@\n");
    match &resource.body[..] {
        [Entry::Comment(comment), Entry::Junk(_)] => {
            assert_eq!(comment.content, "note");
        }
        other => panic!("expected comment then junk, got {other:?}"),
    }
}

#[test]
fn comment_at_end_of_input_stands_alone() {
    let resource = parse("foo = bar\n# trailing\n");
    match &resource.body[..] {
        [Entry::Message(_), Entry::Comment(comment)] => {
            assert_eq!(comment.content, "trailing");
        }
        other => panic!("expected message then comment, got {other:?}"),
    }
}

#[test]
fn comment_without_space_is_junk() {
    let resource = parse("#comment\n");
    match &resource.body[..] {
        [Entry::Junk(junk)] => assert_eq!(junk.annotations[0].code, "E0003"),
        other => panic!("expected junk, got {other:?}"),
    }
}
