use ahklex::syntax::accessor::{StyleLookup, TextSource};
use ahklex::syntax::{colourise, default_keywords, fold, is_safe_line_start, KeywordClass};
use ahklex::{Document, Highlighter, KeywordLists, TokenType};
use rstest::rstest;

const SCRIPT: &str = "\
#SingleInstance force
#region Setup ; window setup
SetTitleMatchMode, 2
/* Block comment
   with { braces } and \"quotes\"
*/
Greeting := \"Hello`tWorld\"
count := 0x1F + 1.5e3 - .25
obj := ComObjCreate(\"Shell.Application\")
obj.Windows.Item(0)
if (count > 10) {
    MsgBox, % Greeting
    Loop 3 {
        $v := A_Index _
            + 1
    }
}
text := 'single \"quoted\" `' string'
#endregion
";

fn full(text: &str) -> Document {
    let mut doc = Document::from_text(text);
    Highlighter::new().style_all(&mut doc);
    doc
}

#[test]
fn test_restart_from_every_safe_line() {
    let reference = full(SCRIPT);
    let keywords = default_keywords();
    for line in 0..reference.line_count() {
        if !is_safe_line_start(&reference, line) {
            continue;
        }
        let start = reference.line_start(line);
        let mut doc = reference.clone();
        let len = doc.len() - start;
        colourise(&mut doc, start, len, TokenType::Default, &keywords);
        assert_eq!(doc.styles(), reference.styles(), "restart at line {}", line);
    }
}

#[test]
fn test_block_comment_lines_are_not_safe() {
    let doc = full(SCRIPT);
    let comment_line = SCRIPT.lines().position(|l| l.contains("with {")).unwrap();
    assert!(!is_safe_line_start(&doc, comment_line));
    assert!(!is_safe_line_start(&doc, comment_line + 1));
    assert!(is_safe_line_start(&doc, comment_line + 2));
}

#[test]
fn test_idempotent() {
    let first = full(SCRIPT);
    let mut second = first.clone();
    let report = Highlighter::new().style_all(&mut second);
    assert_eq!(first.styles(), second.styles());
    assert_eq!(first.folds(), second.folds());
    assert!(report.fold_changes.is_empty());
}

/// Old Mac line endings, with a string spanning the first break
const CR_SCRIPT: &str = "s := \"one\rtwo\" ; c\r/* x\r*/ y\r";

#[rstest]
#[case::open_comment(SCRIPT, 0, "/*")]
#[case::close_string_early(SCRIPT, 140, "\"")]
#[case::new_brace(SCRIPT, 170, "{\n")]
#[case::escape(SCRIPT, 200, "`")]
#[case::crlf(SCRIPT, 60, "\r\n")]
#[case::newline_after_lone_cr_in_string(CR_SCRIPT, 10, "\n")]
#[case::newline_after_lone_cr_in_comment(CR_SCRIPT, 24, "\n")]
fn test_edits_match_full_lex(#[case] script: &str, #[case] pos: usize, #[case] inserted: &str) {
    let highlighter = Highlighter::new();
    let mut doc = full(script);
    doc.insert(pos, inserted);
    let len = doc.len();
    highlighter.ensure_styled(&mut doc, len);

    let mut text = script.to_string();
    text.insert_str(pos, inserted);
    let expected = full(&text);
    assert_eq!(doc.styles(), expected.styles());
    assert_eq!(doc.folds(), expected.folds());
}

#[test]
fn test_deletions_match_full_lex() {
    let highlighter = Highlighter::new();
    let mut doc = full(SCRIPT);
    let mut text = SCRIPT.to_string();
    for (start, end) in [(100, 104), (40, 90), (0, 3)] {
        doc.delete(start..end);
        text.replace_range(start..end, "");
        let len = doc.len();
        highlighter.ensure_styled(&mut doc, len);
        let expected = full(&text);
        assert_eq!(doc.styles(), expected.styles());
        assert_eq!(doc.folds(), expected.folds());
    }
}

#[test]
fn test_keyword_precedence() {
    let keywords = KeywordLists::new()
        .with(KeywordClass::Udf, "shared")
        .with(KeywordClass::Macros, "shared")
        .with(KeywordClass::Expand, "shared");
    let mut doc = Document::from_text("Shared");
    Highlighter::with_keywords(keywords).style_all(&mut doc);
    assert_eq!(doc.style_at(0), TokenType::Keyword(KeywordClass::Macros));
}

#[test]
fn test_fold_depth_never_negative() {
    let mut doc = Document::from_text("}}}\n)]\nx {\ny\n}\n}\n");
    let len = doc.len();
    colourise(&mut doc, 0, len, TokenType::Default, &KeywordLists::new());
    fold(&mut doc, 0, len);
    let levels: Vec<u32> = doc.folds().iter().map(|f| f.level()).collect();
    assert_eq!(levels, vec![0, 0, 0, 1, 0, 0, 0]);
    assert!(doc.folds()[2].is_header());
}

#[test]
fn test_script_folds() {
    let doc = full(SCRIPT);
    let line_of = |needle: &str| SCRIPT.lines().position(|l| l.contains(needle)).unwrap();
    assert!(doc.folds()[line_of("/* Block")].is_header());
    assert!(doc.folds()[line_of("if (count")].is_header());
    assert!(doc.folds()[line_of("Loop 3")].is_header());
    assert_eq!(doc.folds()[line_of("$v :=")].level(), 2);
    assert_eq!(doc.folds().last().map(|f| f.level()), Some(0));
}
