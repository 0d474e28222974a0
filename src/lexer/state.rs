//! The finite automaton driving the scan.
//!
//! `transition` is a pure function of the current state and character; the
//! lexer owns everything mutable (the lexeme buffer, the token sink and the
//! current state) and only applies the `Transition` it is handed back.

use std::fmt::Display;

use super::{
    chars::{classify, is_alphanumeric, is_blank, CharClass},
    tokens::TokenKind,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum State {
    Start,

    // Prefixes of `read`
    R,
    Re,
    Rea,
    Read,

    // Prefixes of `write`
    W,
    Wr,
    Wri,
    Writ,
    Write,

    InIdentifierOrKeyword,
    InInteger,
    InDecimal,
    ExpectAssignEquals,

    /// Terminal state reached when a token of the given kind is emitted.
    Accept(TokenKind),
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Accept(_))
    }

    /// True while the accumulated lexeme can only be closed by a blank.
    pub fn needs_blank_terminator(&self) -> bool {
        match self {
            State::R
            | State::Re
            | State::Rea
            | State::Read
            | State::W
            | State::Wr
            | State::Wri
            | State::Writ
            | State::Write
            | State::InIdentifierOrKeyword
            | State::InInteger
            | State::InDecimal => true,
            State::Start | State::ExpectAssignEquals | State::Accept(_) => false,
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Accept(kind) => write!(f, "Accept({})", kind),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// What the lexer should do with the current character.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    /// Append the character to the lexeme and move to the given state.
    Shift(State),
    /// Drop the character and stay in `Start`.
    Skip,
    /// Close the lexeme as a token of the given kind. The character is
    /// part of the lexeme unless it is blank.
    Finish(TokenKind),
    /// No transition exists for this character.
    Fail,
}

pub fn transition(state: State, c: char) -> Transition {
    match state {
        State::Start | State::Accept(_) => from_start(c),

        State::R => keyword_prefix(c, 'e', State::Re),
        State::Re => keyword_prefix(c, 'a', State::Rea),
        State::Rea => keyword_prefix(c, 'd', State::Read),
        State::W => keyword_prefix(c, 'r', State::Wr),
        State::Wr => keyword_prefix(c, 'i', State::Wri),
        State::Wri => keyword_prefix(c, 't', State::Writ),
        State::Writ => keyword_prefix(c, 'e', State::Write),

        State::Read | State::Write => word(c, TokenKind::Keyword),
        State::InIdentifierOrKeyword => word(c, TokenKind::Identifier),

        State::InInteger => match classify(c) {
            CharClass::Digit => Transition::Shift(State::InInteger),
            CharClass::Dot => Transition::Shift(State::InDecimal),
            CharClass::Blank => Transition::Finish(TokenKind::Number),
            _ => Transition::Fail,
        },

        State::InDecimal => match classify(c) {
            CharClass::Digit => Transition::Shift(State::InDecimal),
            CharClass::Blank => Transition::Finish(TokenKind::Number),
            _ => Transition::Fail,
        },

        State::ExpectAssignEquals => match classify(c) {
            CharClass::Equals => Transition::Finish(TokenKind::Assign),
            _ => Transition::Fail,
        },
    }
}

fn from_start(c: char) -> Transition {
    match c {
        'r' => Transition::Shift(State::R),
        'w' => Transition::Shift(State::W),
        '+' => Transition::Finish(TokenKind::Plus),
        '-' => Transition::Finish(TokenKind::Minus),
        '*' => Transition::Finish(TokenKind::Times),
        '/' => Transition::Finish(TokenKind::Div),
        '(' => Transition::Finish(TokenKind::LParen),
        ')' => Transition::Finish(TokenKind::RParen),
        _ => match classify(c) {
            CharClass::Letter => Transition::Shift(State::InIdentifierOrKeyword),
            CharClass::Digit => Transition::Shift(State::InInteger),
            CharClass::Dot => Transition::Shift(State::InDecimal),
            CharClass::Colon => Transition::Shift(State::ExpectAssignEquals),
            CharClass::Blank => Transition::Skip,
            CharClass::Equals | CharClass::Other => Transition::Fail,
        },
    }
}

/// Partway through a keyword: `expected` continues it, any other
/// alphanumeric turns it into a plain identifier.
///
/// A blank closes the prefix as an identifier for both keywords. The
/// original scanner rejected a blank after `r`, `re` and `rea`; this
/// departs from it deliberately so `read` and `write` prefixes agree.
fn keyword_prefix(c: char, expected: char, next: State) -> Transition {
    if c == expected {
        Transition::Shift(next)
    } else {
        word(c, TokenKind::Identifier)
    }
}

fn word(c: char, closes_as: TokenKind) -> Transition {
    if is_alphanumeric(c) {
        Transition::Shift(State::InIdentifierOrKeyword)
    } else if is_blank(c) {
        Transition::Finish(closes_as)
    } else {
        Transition::Fail
    }
}
