//! AutoHotkey tokenizer
//!
//! A byte-driven state machine run over one window of the document.
//! Word-like tokens are accumulated in the pending segment and given
//! their final style when they end; everything else is styled as it
//! is scanned.

use tracing::debug;

use super::accessor::{StyleLookup, Styler};
use super::chars::{
    is_digit, is_fold_bracket, is_hex_letter, is_operator, is_type_char, is_word_char,
    is_word_start,
};
use super::context::StyleContext;
use super::keywords::KeywordLists;
use super::tokens::{KeywordClass, TokenType};

/// Generic word state; words are restyled once they end
const WORD: TokenType = TokenType::Keyword(KeywordClass::Keywords);
/// Rest of a line following a special directive
const SPECIAL: TokenType = TokenType::Keyword(KeywordClass::Special);

/// Quote that opened the current string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
}

impl Quote {
    fn closes(self, ch: u8) -> bool {
        match self {
            Quote::Double => ch == b'"',
            Quote::Single => ch == b'\'',
        }
    }
}

/// Numeric literal sub-mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberMode {
    Integer,
    Fraction,
    Hex,
    Exponent,
    Invalid,
}

/// Per-pass scratch state, discarded when the pass ends
#[derive(Debug)]
struct Scratch {
    quote: Quote,
    number: NumberMode,
    /// Previous byte was the `/` closing a block comment
    comment_closing: bool,
    /// Previous byte was an escape lead-in inside a string
    escape: bool,
}

/// Style `len` bytes starting at `start`, entering in state `init`
///
/// Resuming inside a string recovers the opening quote from the stored
/// styles; resuming inside a block comment right after its closing `*/`
/// leaves the comment on the first byte.
pub fn colourise<S: Styler + ?Sized>(
    styler: &mut S,
    start: usize,
    len: usize,
    init: TokenType,
    keywords: &KeywordLists,
) {
    let mut scratch = Scratch {
        quote: match init {
            TokenType::String => opening_quote(&*styler, start),
            _ => Quote::Double,
        },
        number: NumberMode::Integer,
        comment_closing: init == TokenType::BlockComment && closed_before(&*styler, start),
        escape: false,
    };
    debug!(start, len, state = init.name(), "colourise");

    let mut sc = StyleContext::new(styler, start, len, init);
    while sc.more() {
        step(&mut sc, &mut scratch, keywords);
        if sc.state == TokenType::Default && sc.more() {
            dispatch(&mut sc, &mut scratch);
        }
        sc.forward();
    }
    finish(&mut sc, &scratch, keywords);
    sc.complete();
}

/// Final style of a completed word
pub fn classify_word(word: &str, keywords: &KeywordLists) -> TokenType {
    match keywords.classify(word) {
        Some(class) => TokenType::Keyword(class),
        None if word == "_" => TokenType::Operator,
        None => TokenType::Default,
    }
}

/// Quote byte at the start of the string run ending just before `pos`
///
/// Escape pairs inside the run are tagged as assignments and are
/// stepped over as part of the string.
fn opening_quote<S: StyleLookup + ?Sized>(lookup: &S, pos: usize) -> Quote {
    let mut pos = pos;
    loop {
        if pos > 0 && lookup.style_at(pos - 1) == TokenType::String {
            pos -= 1;
        } else if pos > 1 && is_escape_pair(lookup, pos - 2) {
            pos -= 2;
        } else {
            break;
        }
    }
    match lookup.safe_byte_at(pos) {
        b'"' => Quote::Double,
        _ => Quote::Single,
    }
}

/// A backtick at `pos` and the byte after it were styled as one escape
fn is_escape_pair<S: StyleLookup + ?Sized>(lookup: &S, pos: usize) -> bool {
    lookup.safe_byte_at(pos) == b'`'
        && lookup.style_at(pos) == TokenType::Assignment
        && lookup.style_at(pos + 1) == TokenType::Assignment
}

/// The two bytes before `pos` are a `*/` that closed a block comment
fn closed_before<S: StyleLookup + ?Sized>(lookup: &S, pos: usize) -> bool {
    pos >= 2
        && lookup.safe_byte_at(pos - 2) == b'*'
        && lookup.safe_byte_at(pos - 1) == b'/'
        && lookup.style_at(pos - 2) == TokenType::BlockComment
        && lookup.style_at(pos - 1) == TokenType::BlockComment
}

/// Advance the active state over the current byte
fn step<S: Styler + ?Sized>(
    sc: &mut StyleContext<'_, S>,
    scratch: &mut Scratch,
    keywords: &KeywordLists,
) {
    match sc.state {
        TokenType::Default => {}
        TokenType::BlockComment => {
            if scratch.comment_closing {
                scratch.comment_closing = false;
                sc.set_state(TokenType::Default);
            } else if sc.ch == b'/' && sc.ch_prev == b'*' {
                scratch.comment_closing = true;
            }
        }
        TokenType::LineComment => {
            if sc.at_line_end {
                sc.set_state(TokenType::Default);
            }
        }
        TokenType::Operator => {
            if sc.ch_prev == b'.' && is_word_char(sc.ch) {
                sc.set_state(TokenType::ComObject);
            } else {
                sc.set_state(TokenType::Default);
            }
        }
        SPECIAL => {
            if sc.ch == b';' {
                sc.set_state(TokenType::LineComment);
            }
            if sc.at_line_end {
                sc.set_state(TokenType::Default);
            }
        }
        WORD => word(sc, keywords),
        TokenType::Keyword(_) => sc.set_state(TokenType::Default),
        TokenType::Number => number(sc, scratch),
        TokenType::Variable => {
            if sc.ch == b'.' && !is_digit(sc.ch_next) {
                sc.set_state(TokenType::Operator);
            } else if !is_word_char(sc.ch) {
                sc.set_state(TokenType::Default);
            }
        }
        TokenType::ComObject => {
            if !is_word_char(sc.ch) {
                if keywords
                    .get(KeywordClass::Keywords)
                    .contains(&sc.current_lowered())
                {
                    sc.change_state(TokenType::Keyword(KeywordClass::Keywords));
                }
                sc.set_state(TokenType::Default);
            }
        }
        TokenType::String => {
            if scratch.escape {
                scratch.escape = false;
                sc.change_state(TokenType::Assignment);
                sc.set_state(TokenType::String);
            }
            if scratch.quote.closes(sc.ch) {
                sc.forward_set_state(TokenType::Default);
            } else if sc.ch == b'`' {
                scratch.escape = true;
                sc.set_state(TokenType::Assignment);
            }
        }
        TokenType::Assignment => {
            if sc.ch_prev == b':' && sc.ch == b'=' {
                sc.set_state(TokenType::Assignment);
            } else if scratch.escape {
                sc.set_state(TokenType::String);
            } else {
                sc.set_state(TokenType::Default);
            }
        }
        TokenType::FoldBracket => sc.set_state(TokenType::Default),
    }
}

fn word<S: Styler + ?Sized>(sc: &mut StyleContext<'_, S>, keywords: &KeywordLists) {
    let continues = is_word_char(sc.ch)
        || is_type_char(sc.ch)
        || (sc.ch == b'-' && (sc.current_is("#comments") || sc.current_is("#include")));
    if !continues {
        let style = classify_word(&sc.current_lowered(), keywords);
        sc.change_state(style);
        sc.set_state(if style == SPECIAL {
            SPECIAL
        } else {
            TokenType::Default
        });
    }
    if sc.at_line_end {
        sc.set_state(TokenType::Default);
    }
}

fn number<S: Styler + ?Sized>(sc: &mut StyleContext<'_, S>, scratch: &mut Scratch) {
    let mode = scratch.number;
    if mode == NumberMode::Integer && matches!(sc.ch, b'x' | b'X') && sc.current_is("0") {
        scratch.number = NumberMode::Hex;
    } else if matches!(sc.ch, b'e' | b'E')
        && is_digit(sc.ch_prev)
        && matches!(mode, NumberMode::Integer | NumberMode::Fraction)
    {
        scratch.number = NumberMode::Exponent;
    } else if sc.ch == b'.' {
        scratch.number = match mode {
            NumberMode::Integer => NumberMode::Fraction,
            _ => NumberMode::Invalid,
        };
    } else if !is_digit(sc.ch) && !(mode == NumberMode::Hex && is_hex_letter(sc.ch)) {
        if mode == NumberMode::Invalid {
            sc.change_state(TokenType::Default);
        }
        sc.set_state(TokenType::Default);
    }
}

/// Pick the state for a byte seen in the default state
fn dispatch<S: Styler + ?Sized>(sc: &mut StyleContext<'_, S>, scratch: &mut Scratch) {
    scratch.escape = false;
    let next = match sc.ch {
        b';' => TokenType::LineComment,
        b'/' if sc.ch_next == b'*' => TokenType::BlockComment,
        b'"' => {
            scratch.quote = Quote::Double;
            TokenType::String
        }
        b'\'' => {
            scratch.quote = Quote::Single;
            TokenType::String
        }
        ch if is_fold_bracket(ch) => TokenType::FoldBracket,
        b'#' | b'@' => WORD,
        b'$' => TokenType::Variable,
        b'.' if !is_digit(sc.ch_next) => TokenType::Operator,
        b'.' => {
            scratch.number = NumberMode::Fraction;
            TokenType::Number
        }
        ch if is_digit(ch) => {
            scratch.number = NumberMode::Integer;
            TokenType::Number
        }
        ch if is_word_start(ch) => WORD,
        ch if is_operator(ch) => TokenType::Operator,
        b':' if sc.ch_next == b'=' => TokenType::Assignment,
        _ => return,
    };
    sc.set_state(next);
}

/// Settle a token still open when the window ends
fn finish<S: Styler + ?Sized>(
    sc: &mut StyleContext<'_, S>,
    scratch: &Scratch,
    keywords: &KeywordLists,
) {
    match sc.state {
        WORD => {
            let style = classify_word(&sc.current_lowered(), keywords);
            sc.change_state(style);
        }
        TokenType::ComObject => {
            if keywords
                .get(KeywordClass::Keywords)
                .contains(&sc.current_lowered())
            {
                sc.change_state(TokenType::Keyword(KeywordClass::Keywords));
            }
        }
        TokenType::Number if scratch.number == NumberMode::Invalid => {
            sc.change_state(TokenType::Default);
        }
        TokenType::String if scratch.escape => sc.change_state(TokenType::Assignment),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::document::Document;

    use TokenType::{
        Assignment, BlockComment, ComObject, FoldBracket, Keyword, LineComment, Number, Operator,
        Variable,
    };

    const DEF: TokenType = TokenType::Default;
    const STR: TokenType = TokenType::String;
    const K1: TokenType = Keyword(KeywordClass::Keywords);
    const K2: TokenType = Keyword(KeywordClass::Functions);
    const K5: TokenType = Keyword(KeywordClass::Preprocessor);
    const K6: TokenType = Keyword(KeywordClass::Special);

    fn keywords() -> KeywordLists {
        KeywordLists::new()
            .with(KeywordClass::Keywords, "if else return loop")
            .with(KeywordClass::Functions, "msgbox instr")
            .with(KeywordClass::Preprocessor, "#include #comments-start #singleinstance")
            .with(KeywordClass::Special, "#region #endregion")
            .with(KeywordClass::Udf, "msgbox _arrayadd")
    }

    fn lex(text: &str) -> Document {
        let mut doc = Document::from_text(text);
        let len = doc.len();
        colourise(&mut doc, 0, len, DEF, &keywords());
        doc
    }

    /// Styles of `text` as (substring, style) runs
    fn runs(text: &str) -> Vec<(String, TokenType)> {
        let doc = lex(text);
        let mut out: Vec<(String, TokenType)> = Vec::new();
        for (i, &style) in doc.styles().iter().enumerate() {
            let ch = text.as_bytes()[i] as char;
            match out.last_mut() {
                Some((s, st)) if *st == style => s.push(ch),
                _ => out.push((ch.to_string(), style)),
            }
        }
        out
    }

    fn run(text: &str, style: TokenType) -> (String, TokenType) {
        (text.to_string(), style)
    }

    #[test]
    fn test_assignment_scenario() {
        assert_eq!(
            runs("x := 5"),
            vec![run("x ", DEF), run(":=", Assignment), run(" ", DEF), run("5", Number)]
        );
    }

    #[test]
    fn test_line_comment_to_end() {
        assert_eq!(runs("; hello"), vec![run("; hello", LineComment)]);
        assert_eq!(
            runs("x ; note\ny"),
            vec![run("x ", DEF), run("; note", LineComment), run("\ny", DEF)]
        );
    }

    #[test]
    fn test_block_comment_across_lines() {
        assert_eq!(
            runs("/* a\nb */c"),
            vec![run("/* a\nb */", BlockComment), run("c", DEF)]
        );
    }

    #[test]
    fn test_block_comment_hides_tokens() {
        assert_eq!(
            runs("/* if \"x\" 12 { */"),
            vec![run("/* if \"x\" 12 { */", BlockComment)]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(runs("/* open\nstill"), vec![run("/* open\nstill", BlockComment)]);
    }

    #[rstest]
    #[case::hex("0x1F", Number)]
    #[case::upper_hex("0XfF", Number)]
    #[case::decimal("3.25", Number)]
    #[case::exponent("1e5", Number)]
    #[case::fraction_exponent("1.5E3", Number)]
    #[case::leading_dot(".5", Number)]
    #[case::invalid("1.2.3", DEF)]
    fn test_numbers(#[case] text: &str, #[case] expected: TokenType) {
        assert_eq!(runs(text), vec![run(text, expected)]);
    }

    #[test]
    fn test_invalid_number_before_newline() {
        assert_eq!(runs("1.2.3\n"), vec![run("1.2.3\n", DEF)]);
        assert_eq!(
            runs("1.2.3+4"),
            vec![run("1.2.3", DEF), run("+", Operator), run("4", Number)]
        );
    }

    #[test]
    fn test_number_followed_by_word() {
        assert_eq!(runs("12abc"), vec![run("12", Number), run("abc", DEF)]);
        assert_eq!(runs("0xfg"), vec![run("0xf", Number), run("g", DEF)]);
    }

    #[test]
    fn test_keyword_lists() {
        assert_eq!(
            runs("If x\nMsgBox"),
            vec![run("If", K1), run(" x\n", DEF), run("MsgBox", K2)]
        );
    }

    #[test]
    fn test_keyword_precedence() {
        // msgbox is in both list 2 and list 8
        assert_eq!(runs("msgbox("), vec![run("msgbox", K2), run("(", FoldBracket)]);
        assert_eq!(runs("_ArrayAdd"), vec![run("_ArrayAdd", Keyword(KeywordClass::Udf))]);
    }

    #[test]
    fn test_underscore_is_continuation_operator() {
        assert_eq!(
            runs("a _\nb"),
            vec![run("a ", DEF), run("_", Operator), run("\nb", DEF)]
        );
    }

    #[test]
    fn test_preprocessor_with_hyphen() {
        assert_eq!(
            runs("#comments-start x"),
            vec![run("#comments-start", K5), run(" x", DEF)]
        );
        assert_eq!(runs("#singleinstance"), vec![run("#singleinstance", K5)]);
        assert_eq!(runs("#other-x"), vec![run("#other", DEF), run("-", Operator), run("x", DEF)]);
    }

    #[test]
    fn test_special_directive_runs_to_line_end() {
        assert_eq!(
            runs("#region Setup stuff\nx"),
            vec![run("#region Setup stuff", K6), run("\nx", DEF)]
        );
        assert_eq!(
            runs("#region main ; note\n"),
            vec![run("#region main ", K6), run("; note", LineComment), run("\n", DEF)]
        );
    }

    #[test]
    fn test_strings_and_escapes() {
        assert_eq!(
            runs("s := \"a`nb\" x"),
            vec![
                run("s ", DEF),
                run(":=", Assignment),
                run(" ", DEF),
                run("\"a", STR),
                run("`n", Assignment),
                run("b\"", STR),
                run(" x", DEF),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(
            runs("\"a`\"b\""),
            vec![run("\"a", STR), run("`\"", Assignment), run("b\"", STR)]
        );
    }

    #[test]
    fn test_single_quotes_ignore_double() {
        assert_eq!(runs("'a\"b' 1"), vec![run("'a\"b'", STR), run(" ", DEF), run("1", Number)]);
    }

    #[test]
    fn test_escape_at_window_end() {
        assert_eq!(runs("\"ab`n"), vec![run("\"ab", STR), run("`n", Assignment)]);
    }

    #[test]
    fn test_brackets_inside_strings_are_not_fold_points() {
        assert_eq!(
            runs("f(\"{\")"),
            vec![run("f", DEF), run("(", FoldBracket), run("\"{\"", STR), run(")", FoldBracket)]
        );
    }

    #[test]
    fn test_com_object_members() {
        assert_eq!(
            runs("obj.Add(1)"),
            vec![
                run("obj", DEF),
                run(".", Operator),
                run("Add", ComObject),
                run("(", FoldBracket),
                run("1", Number),
                run(")", FoldBracket),
            ]
        );
        // list 1 is the only list that can restyle a member
        assert_eq!(
            runs("x.Return y.msgbox"),
            vec![
                run("x", DEF),
                run(".", Operator),
                run("Return", K1),
                run(" y", DEF),
                run(".", Operator),
                run("msgbox", ComObject),
            ]
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            runs("$var.Item + $n"),
            vec![
                run("$var", Variable),
                run(".", Operator),
                run("Item", ComObject),
                run(" ", DEF),
                run("+", Operator),
                run(" ", DEF),
                run("$n", Variable),
            ]
        );
    }

    #[test]
    fn test_operators_and_high_bytes() {
        assert_eq!(
            runs("a<=b"),
            vec![run("a", DEF), run("<=", Operator), run("b", DEF)]
        );
        let doc = lex("é=1");
        assert_eq!(doc.styles()[0], DEF);
        assert_eq!(doc.styles()[1], DEF);
        assert_eq!(doc.styles()[2], Operator);
        assert_eq!(doc.styles()[3], Number);
    }

    #[test]
    fn test_long_word_matches_on_prefix() {
        let word = format!("if{}", "x".repeat(120));
        assert_eq!(runs(&word), vec![run(&word, DEF)]);
    }

    #[test]
    fn test_idempotent() {
        let text = "#region a\nif (x := \"q`tq\") {\n  MsgBox 0x1F /* c\n */ $v.k\n}\n";
        let first = lex(text);
        let mut second = first.clone();
        let len = second.len();
        colourise(&mut second, 0, len, DEF, &keywords());
        assert_eq!(first.styles(), second.styles());
    }

    #[test]
    fn test_resume_inside_string_recovers_quote() {
        let text = "x := 'it\"s\nmore' y";
        let mut doc = lex(text);
        let resume = text.find("more").unwrap_or_default();
        let full = doc.styles().to_vec();
        let len = doc.len() - resume;
        colourise(&mut doc, resume, len, STR, &keywords());
        assert_eq!(doc.styles(), &full[..]);
        assert_eq!(doc.styles()[text.len() - 1], DEF);
        assert_eq!(doc.styles()[text.len() - 3], STR);
    }

    #[test]
    fn test_resume_inside_string_after_escape() {
        let text = "x := \"a`tb\nc'd\" y";
        let mut doc = lex(text);
        let resume = text.find("c'd").unwrap_or_default();
        let full = doc.styles().to_vec();
        let len = doc.len() - resume;
        colourise(&mut doc, resume, len, STR, &keywords());
        assert_eq!(doc.styles(), &full[..]);
        assert_eq!(
            &doc.styles()[resume..],
            &[STR, STR, STR, STR, DEF, DEF][..]
        );
    }

    #[test]
    fn test_resume_after_block_comment_close() {
        let text = "/* a */x";
        let mut doc = lex(text);
        let full = doc.styles().to_vec();
        colourise(&mut doc, 7, 1, BlockComment, &keywords());
        assert_eq!(doc.styles(), &full[..]);
        assert_eq!(doc.styles()[7], DEF);
    }

    #[test]
    fn test_restyles_only_the_window() {
        let mut doc = lex("if x\nif y");
        colourise(&mut doc, 5, 2, DEF, &keywords());
        assert_eq!(doc.styles()[0], K1);
        assert_eq!(doc.styles()[5], K1);
        assert_eq!(doc.styles()[8], DEF);
    }
}
