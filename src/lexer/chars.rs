//! Character classes recognised by the automaton.
//!
//! Every class is a pure predicate over a single `char`; nothing here
//! holds state, so the transition table stays referentially transparent.

/// Space, tab, newline or carriage return.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Basic Latin letters only.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alphanumeric(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Letter,
    Digit,
    Dot,
    Colon,
    Equals,
    Blank,
    Other,
}

pub fn classify(c: char) -> CharClass {
    match c {
        '.' => CharClass::Dot,
        ':' => CharClass::Colon,
        '=' => CharClass::Equals,
        c if is_letter(c) => CharClass::Letter,
        c if is_digit(c) => CharClass::Digit,
        c if is_blank(c) => CharClass::Blank,
        _ => CharClass::Other,
    }
}
