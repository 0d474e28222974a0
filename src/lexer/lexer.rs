use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    chars::is_blank,
    cursor::Cursor,
    state::{transition, State, Transition},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Scan context for a single call to [`tokenize`].
///
/// Holds the automaton's current state, the lexeme accumulated so far and
/// the tokens emitted in source order. Nothing here outlives the scan.
///
/// The first failing step poisons the lexer: every later step returns the
/// same error and the token sink is no longer observable.
pub struct Lexer {
    tokens: Vec<Token>,
    lexeme: String,
    state: State,
    file: Rc<String>,
    failed: Option<Error>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            lexeme: String::new(),
            state: State::Start,
            file: file_name,
            failed: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Tokens emitted so far; empty once the scan has failed.
    pub fn tokens(&self) -> &[Token] {
        if self.failed.is_some() {
            return &[];
        }
        &self.tokens
    }

    /// Feeds one character through the automaton.
    pub fn step(&mut self, c: char, row: u32, col: u32) -> Result<(), Error> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }

        let next = transition(self.state, c);
        trace!(?c, row, col, state = %self.state, ?next, "step");

        match next {
            Transition::Shift(state) => {
                self.lexeme.push(c);
                self.state = state;
            }
            Transition::Skip => {}
            Transition::Finish(kind) => self.finish(c, kind),
            Transition::Fail => {
                let error = self.unexpected(c, row, col);
                self.failed = Some(error.clone());
                return Err(error);
            }
        }

        Ok(())
    }

    fn finish(&mut self, c: char, kind: TokenKind) {
        if !is_blank(c) {
            self.lexeme.push(c);
        }
        self.state = State::Accept(kind);

        let lexeme = std::mem::take(&mut self.lexeme);
        debug_assert!(
            kind != TokenKind::Keyword || RESERVED_LOOKUP.contains_key(lexeme.as_str()),
            "keyword state accepted {:?}",
            lexeme
        );

        let token = MK_TOKEN!(kind, lexeme);
        debug!(state = %self.state, %token, "emit");
        self.tokens.push(token);

        self.state = State::Start;
    }

    fn unexpected(&self, c: char, row: u32, col: u32) -> Error {
        debug!(?c, row, col, state = %self.state, lexeme = %self.lexeme, "unexpected character");

        Error::new(
            ErrorImpl::UnexpectedCharacter {
                character: c,
                state: self.state,
            },
            Position {
                row,
                col,
                file: Rc::clone(&self.file),
            },
        )
    }

    pub fn into_tokens(self) -> Result<Vec<Token>, Error> {
        match self.failed {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(file);
    let mut cursor = Cursor::new(&source);

    for (c, row, col) in cursor.by_ref() {
        lex.step(c, row, col)?;
    }

    // The trailing newline from the cursor is blank, so every lexeme class
    // has either been closed or rejected by now.
    debug_assert_eq!(lex.state(), State::Start);

    debug!(
        tokens = lex.tokens().len(),
        rows = cursor.row().saturating_sub(1),
        file = %lex.file,
        "tokenized"
    );
    lex.into_tokens()
}
