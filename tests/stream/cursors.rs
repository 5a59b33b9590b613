use ftl_syntax::stream::ParserStream;

#[test]
fn current_char_does_not_consume() {
    let stream = ParserStream::new("ab");
    assert_eq!(stream.current_char(), Some('a'));
    assert_eq!(stream.current_char(), Some('a'));
    assert_eq!(stream.index(), 0);
}

#[test]
fn next_char_advances_and_returns_the_new_current() {
    let mut stream = ParserStream::new("abc");
    assert_eq!(stream.next_char(), Some('b'));
    assert_eq!(stream.next_char(), Some('c'));
    assert_eq!(stream.next_char(), None);
    assert_eq!(stream.index(), 3);
}

#[test]
fn next_char_stops_at_end_of_input() {
    let mut stream = ParserStream::new("a");
    stream.next_char();
    assert_eq!(stream.index(), 1);
    assert_eq!(stream.next_char(), None);
    assert_eq!(stream.index(), 1);
}

#[test]
fn peek_is_independent_of_the_commit_index() {
    let mut stream = ParserStream::new("abc");
    assert_eq!(stream.peek_char(), Some('b'));
    assert_eq!(stream.peek_char(), Some('c'));
    assert_eq!(stream.current_char(), Some('a'));
    assert_eq!(stream.index(), 0);
    assert_eq!(stream.peek_offset(), 2);
}

#[test]
fn next_char_resets_the_peek_offset() {
    let mut stream = ParserStream::new("abc");
    stream.peek_char();
    stream.peek_char();
    stream.next_char();
    assert_eq!(stream.peek_offset(), 0);
    assert_eq!(stream.current_peek(), Some('b'));
}

#[test]
fn reset_peek_and_skip_to_peek() {
    let mut stream = ParserStream::new("abcd");
    stream.peek_char();
    stream.peek_char();
    stream.reset_peek(1);
    assert_eq!(stream.current_peek(), Some('b'));

    stream.reset_peek(0);
    stream.peek_char();
    stream.peek_char();
    stream.skip_to_peek();
    assert_eq!(stream.index(), 2);
    assert_eq!(stream.peek_offset(), 0);
    assert_eq!(stream.current_char(), Some('c'));
}

#[test]
fn crlf_reads_as_a_single_newline() {
    let mut stream = ParserStream::new("a\r\nb");
    assert_eq!(stream.next_char(), Some('\n'));
    assert_eq!(stream.index(), 1);
    assert_eq!(stream.next_char(), Some('b'));
    assert_eq!(stream.index(), 3);
}

#[test]
fn crlf_peek_skips_both_bytes() {
    let mut stream = ParserStream::new("\r\nx");
    assert_eq!(stream.current_char(), Some('\n'));
    assert_eq!(stream.peek_char(), Some('x'));
    assert_eq!(stream.peek_offset(), 2);
}

#[test]
fn lone_carriage_return_is_an_ordinary_character() {
    let stream = ParserStream::new("\rx");
    assert_eq!(stream.current_char(), Some('\r'));
}

#[test]
fn multibyte_characters_advance_by_their_utf8_width() {
    let mut stream = ParserStream::new("é!");
    assert_eq!(stream.current_char(), Some('é'));
    assert_eq!(stream.next_char(), Some('!'));
    assert_eq!(stream.index(), 2);
}

#[test]
fn take_char_consumes_only_on_a_match() {
    let mut stream = ParserStream::new("ab");
    assert_eq!(stream.take_char(|ch| ch == 'x'), None);
    assert_eq!(stream.index(), 0);
    assert_eq!(stream.take_char(|ch| ch == 'a'), Some('a'));
    assert_eq!(stream.index(), 1);
}

#[test]
fn expect_char_reports_the_missing_token() {
    let mut stream = ParserStream::new("b");
    let error = stream.expect_char('a').unwrap_err();
    assert_eq!(error.code(), "E0003");
    assert_eq!(error.pos, 0);
    assert!(stream.expect_char('b').is_ok());
}

#[test]
fn expect_line_end_accepts_eof_and_consumes_lf() {
    let mut stream = ParserStream::new("\nx");
    assert!(stream.expect_line_end().is_ok());
    assert_eq!(stream.current_char(), Some('x'));

    let mut at_eof = ParserStream::new("");
    assert!(at_eof.expect_line_end().is_ok());

    let mut not_eol = ParserStream::new("x");
    let error = not_eol.expect_line_end().unwrap_err();
    assert_eq!(error.code(), "E0003");
}
