//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// The `value` field is filled in from the lexeme for the kinds that carry
/// one (keywords, identifiers and numbers) and left empty otherwise.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text matched
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {{
        let kind = $kind;
        let lexeme: String = $lexeme;
        Token {
            kind,
            value: if kind.carries_value() {
                Some(lexeme.clone())
            } else {
                None
            },
            lexeme,
        }
    }};
}
