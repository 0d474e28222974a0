//! Lexical analysis module.
//!
//! This module contains the hand-written scanner that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Walking the source character by character with row/column tracking
//! - A finite automaton classifying characters into lexemes
//! - Resolving `read`/`write` against identifiers sharing their prefix
//! - Fail-fast diagnostics on the first unexpected character

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod state;
pub mod tokens;
