use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Reserved> = {
        let mut map = HashMap::new();
        map.insert("read", Reserved::Read);
        map.insert("write", Reserved::Write);
        map
    };
}

/// The reserved words of the language.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Reserved {
    Read,
    Write,
}

impl Display for Reserved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reserved::Read => write!(f, "read"),
            Reserved::Write => write!(f, "write"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Times,
    Div,
    LParen,
    RParen,

    Keyword,
    Identifier,
    Number,

    Assign, // :=
}

impl TokenKind {
    /// Whether tokens of this kind carry a `value` alongside their lexeme.
    pub fn carries_value(&self) -> bool {
        match self {
            TokenKind::Keyword | TokenKind::Identifier | TokenKind::Number => true,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Times
            | TokenKind::Div
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Assign => false,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. Built once by the lexer and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(
                f,
                "{{ lexeme: {:?}, token: {}, value: {:?} }}",
                self.lexeme, self.kind, value
            ),
            None => write!(f, "{{ lexeme: {:?}, token: {} }}", self.lexeme, self.kind),
        }
    }
}

impl Token {
    /// Resolves a keyword token to the reserved word it spells.
    pub fn reserved(&self) -> Option<Reserved> {
        if self.kind != TokenKind::Keyword {
            return None;
        }

        RESERVED_LOOKUP.get(self.lexeme.as_str()).copied()
    }

    pub fn debug(&self) {
        match &self.value {
            Some(value) => println!("{} ({})", self.kind, value),
            None => println!("{} ()", self.kind),
        }
    }
}
