use super::*;

/// Every character advances 10px.
fn fixed(text: &str) -> f64 {
    text.chars().count() as f64 * 10.0
}

#[test]
fn fitting_text_is_one_trimmed_line() {
    assert_eq!(wrap_text(&mut fixed, " Jordan ", 100.0, 2), vec!["Jordan"]);
    assert_eq!(wrap_text(&mut fixed, "", 100.0, 2), vec![""]);
}

#[test]
fn breaks_on_whitespace() {
    assert_eq!(
        wrap_text(&mut fixed, "Anna Maria Lopez", 110.0, 3),
        vec!["Anna Maria", "Lopez"]
    );
}

#[test]
fn hyphen_stays_with_previous_line() {
    assert_eq!(
        wrap_text(&mut fixed, "Smith-Jones", 60.0, 2),
        vec!["Smith-", "Jones"]
    );
}

#[test]
fn extra_lines_are_dropped() {
    let lines = wrap_text(&mut fixed, "aa bb cc dd", 20.0, 2);
    assert_eq!(lines, vec!["aa", "bb"]);
}

#[test]
fn unbreakable_word_is_split_between_characters() {
    let word = "Wolfeschlegelsteinhausen";
    let lines = wrap_text(&mut fixed, word, 50.0, 10);
    assert!(lines.iter().all(|l| fixed(l) <= 50.0));
    assert_eq!(lines.concat(), word);
    assert_eq!(lines[0], "Wolfe");
}

#[test]
fn split_respects_max_lines() {
    let lines = wrap_text(&mut fixed, "abcdefghij", 30.0, 2);
    assert_eq!(lines, vec!["abc", "def"]);
}

#[test]
fn character_wider_than_limit_still_advances() {
    let lines = wrap_text(&mut fixed, "abc", 5.0, 5);
    assert_eq!(lines, vec!["a", "b", "c"]);
}

#[test]
fn multibyte_characters_split_on_boundaries() {
    let lines = wrap_text(&mut fixed, "ÉÈÊËÉÈ", 30.0, 4);
    assert_eq!(lines, vec!["ÉÈÊ", "ËÉÈ"]);
}

#[test]
fn zero_max_lines_yields_nothing() {
    assert!(wrap_text(&mut fixed, "anything at all", 10.0, 0).is_empty());
}

#[test]
fn output_never_exceeds_limits() {
    for text in ["Mary-Kate Olsen-Smith", "a b c d e f g", "Supercalifragilistic expialidocious"] {
        for max_lines in 1..4 {
            let lines = wrap_text(&mut fixed, text, 70.0, max_lines);
            assert!(lines.len() <= max_lines);
            assert!(lines.iter().all(|l| fixed(l) <= 70.0), "{lines:?}");
        }
    }
}

#[test]
fn tokens_keep_delimiters() {
    assert_eq!(tokens("a  b-c"), vec!["a", "  ", "b", "-", "c"]);
    assert_eq!(tokens("--"), vec!["-", "-"]);
}
