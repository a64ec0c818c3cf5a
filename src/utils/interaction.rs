//! Terminal prompts.

use std::io::{BufRead, Write, stdin, stdout};

/// Asks a yes/no question on stdout and reads the answer from stdin.
/// Anything but an explicit yes is a no.
pub fn confirm(prompt: &str) -> bool {
	print!("{prompt} (y/N): ");
	stdout().flush().ok();
	read_answer(stdin().lock())
}

fn read_answer(mut input: impl BufRead) -> bool {
	let mut answer = String::new();
	if input.read_line(&mut answer).is_err() {
		return false;
	}
	matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
