use super::messages::warning;
use std::io::{self, BufRead, Write};

/// Show `prompt` as a warning and read a yes/no answer from stdin.
/// Anything but `y`/`yes` (any case), including a read failure, is a no.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> bool {
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
