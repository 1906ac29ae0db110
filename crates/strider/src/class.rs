//! Character classes of the statement grammar.
//!
//! Each class is a plain predicate over one code point so the cursor can
//! test lookahead without allocating.

/// Predicate over a single code point.
pub type CharClass = fn(char) -> bool;

/// First character of a bare identifier: ASCII letters, `_`, or any code
/// point from U+007F upwards.
pub fn ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c >= '\u{7f}'
}

/// Subsequent characters of a bare identifier.
pub fn ident_char(c: char) -> bool {
    ident_start(c) || c.is_ascii_digit()
}

/// Matches every code point.
pub fn any(_c: char) -> bool {
    true
}

/// Characters that send an index body down the numeric branch.
///
/// `+` is included although the number grammar never consumes it, so
/// `[+1]` fails on the closing bracket rather than becoming a rule.
pub fn number_start(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '+'
}

pub fn digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Either literal delimiter.
pub fn quote(c: char) -> bool {
    c == '"' || c == '\''
}

pub fn whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Characters that end the left-hand chain of a rule.
pub fn operator_start(c: char) -> bool {
    c == '='
}

/// Returns `true` if `name` can be written as a bare identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if ident_start(first) => chars.all(ident_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_classes() {
        assert!(ident_start('a'));
        assert!(ident_start('Z'));
        assert!(ident_start('_'));
        assert!(ident_start('é'));
        assert!(ident_start('\u{7f}'));
        assert!(!ident_start('1'));
        assert!(!ident_start('.'));
        assert!(!ident_start('"'));

        assert!(ident_char('1'));
        assert!(ident_char('x'));
        assert!(!ident_char('['));
        assert!(!ident_char(' '));
    }

    #[test]
    fn number_start_accepts_plus() {
        assert!(number_start('+'));
        assert!(number_start('-'));
        assert!(number_start('7'));
        assert!(!number_start('.'));
    }

    #[test]
    fn is_identifier_checks_every_char() {
        assert!(is_identifier("foo_bar9"));
        assert!(is_identifier("ünïcode"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("some funky label"));
        assert!(!is_identifier("b\""));
    }
}
