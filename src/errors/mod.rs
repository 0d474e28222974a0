//! Error types and error handling for the lexer.
//!
//! This module defines the single diagnostic the scanner can raise. It
//! includes:
//!
//! - Error structures with source position information
//! - The `UnexpectedCharacter` variant and the automaton state it failed in
//! - Helpful error messages and suggestions

pub mod errors;
