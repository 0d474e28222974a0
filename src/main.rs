use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use rwlex::{display_error, init_tracing, lexer::lexer::tokenize};
use tracing::debug;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: rwlex <filename>");
        eprintln!("No filename provided.");
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = tokenize(file_contents.clone(), Some(file_name));
    debug!(elapsed = ?start.elapsed(), "tokenize finished");

    match tokens {
        Ok(tokens) => {
            println!("---------------SYMBOL TABLE---------------");
            for token in tokens {
                println!("{}", token);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &file_contents);
            ExitCode::FAILURE
        }
    }
}
