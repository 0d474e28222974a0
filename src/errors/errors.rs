use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::state::State, Position};

/// A lexical diagnostic: what went wrong, and where.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{}:{}]: {}", .position.row, .position.col, .internal_error)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn character(&self) -> char {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character, .. } => *character,
        }
    }

    pub fn state(&self) -> State {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { state, .. } => *state,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter {
                character: '.',
                state: State::InDecimal,
            } => ErrorTip::Suggestion(String::from(
                "a number may contain only one decimal point",
            )),
            ErrorImpl::UnexpectedCharacter {
                state: State::ExpectAssignEquals,
                ..
            } => ErrorTip::Suggestion(String::from("`:` must be followed by `=`")),
            ErrorImpl::UnexpectedCharacter { character, state }
                if state.needs_blank_terminator() =>
            {
                ErrorTip::Suggestion(format!(
                    "identifiers, keywords and numbers must be followed by whitespace before `{}`",
                    character.escape_default()
                ))
            }
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected char {character:?} (state {state})")]
    UnexpectedCharacter { character: char, state: State },
}
