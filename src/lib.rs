#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub col: u32,
    pub file: Rc<String>,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row, self.col)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=rwlex=trace` to log every automaton step.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of the 1-based `row`, without its line terminator.
pub fn get_line_at_row(source: &str, row: u32) -> Option<&str> {
    let index = (row as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|line| line.trim_end_matches('\r'))
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedCharacter (tip)
        -> main.rw:1:3
           |
         1 | a+b
           | --^
    */

    let position = error.get_position();
    let line_string = position.row.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position));
    out.push_str(&format!("   {}\n", error));

    if let Some(line_text) = get_line_at_row(source, position.row) {
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text));
        out.push_str(&format!(
            "{:>padding$} {}\n",
            "|",
            caret_marker(line_text, position.col)
        ));
    }

    out
}

/// Dashes up to `col`, then a caret. Tabs in the line are echoed so the
/// caret lands under the same character however the terminal expands them.
fn caret_marker(line_text: &str, col: u32) -> String {
    let lead = (col as usize).saturating_sub(1);

    let mut marker: String = line_text
        .chars()
        .filter(|c| *c != '\r')
        .take(lead)
        .map(|c| if c == '\t' { '\t' } else { '-' })
        .collect();
    let echoed = marker.chars().count();
    marker.extend(std::iter::repeat('-').take(lead - echoed));
    marker.push('^');

    marker
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}
