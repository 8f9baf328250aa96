//! Interactive stdin comparator: the human is the oracle.
use std::io::{self, BufRead, Write};

use bellrank_core::{Choice, Comparator};
use tracing::warn;

/// Prompts the user on stdout and reads a 1/2/quit answer from stdin.
pub struct InteractivePrompt {
    quit_token: String,
}

impl InteractivePrompt {
    pub fn new(quit_token: impl Into<String>) -> Self {
        InteractivePrompt {
            quit_token: quit_token.into(),
        }
    }
}

/// Interpret one line of user input. Returns None for anything that
/// should trigger a re-prompt.
fn parse_choice(input: &str, quit_token: &str) -> Option<Choice> {
    let trimmed = input.trim();
    if trimmed == "1" {
        Some(Choice::First)
    } else if trimmed == "2" {
        Some(Choice::Second)
    } else if trimmed.eq_ignore_ascii_case(quit_token) {
        Some(Choice::Quit)
    } else {
        None
    }
}

impl Comparator for InteractivePrompt {
    fn compare(&mut self, first: &str, second: &str) -> Choice {
        println!("Compare:\n1. {first}\n2. {second}");
        let mut line = String::new();
        loop {
            print!("Which is better? (1/2 or '{}' to quit): ", self.quit_token);
            let _ = io::stdout().flush();

            line.clear();
            match io::stdin().lock().read_line(&mut line) {
                // EOF: no more answers are coming, treat it as a quit.
                Ok(0) => return Choice::Quit,
                Ok(_) => {}
                Err(e) => {
                    warn!("failed to read from stdin, treating as quit: {e}");
                    return Choice::Quit;
                }
            }

            match parse_choice(&line, &self.quit_token) {
                Some(choice) => return choice,
                None => println!(
                    "Invalid choice. Please enter 1, 2, or '{}'.",
                    self.quit_token
                ),
            }
        }
    }
}
