//! Player input collection.
//!
//! All interactive decisions go through the [`Input`] trait so the turn
//! loop can be driven from a terminal, from a script in tests, or by the
//! random driver in simulation. Invalid input never reaches the game:
//! every prompt re-asks until it gets a usable answer.

use std::io::{self, BufRead, Write};

/// Blocking decision collection for one game.
pub trait Input {
    /// Blocks until the player confirms the die roll.
    fn confirm_roll(&mut self, prompt: &str);

    /// Asks a yes/no question, re-prompting until the answer is one of
    /// "yes" or "no".
    fn ask_yes_no(&mut self, prompt: &str) -> bool;

    /// Asks for a slot number in `[low, high]`, re-prompting on
    /// non-numeric or out-of-range input.
    fn ask_slot_number(&mut self, low: usize, high: usize) -> usize;

    /// Shows a card or event message and waits for acknowledgement.
    fn acknowledge(&mut self, message: &str);
}

/// Parses a yes/no answer. Anything other than the exact words is
/// rejected.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Parses a slot number and checks it against the inclusive range.
pub fn parse_slot_number(answer: &str, low: usize, high: usize) -> Option<usize> {
    let number: usize = answer.trim().parse().ok()?;
    if number < low || number > high {
        return None;
    }
    Some(number)
}

/// Reads decisions from stdin, writing prompts to stdout.
pub struct StdInput;

impl StdInput {
    pub fn new() -> StdInput {
        StdInput
    }

    /// Reads one trimmed line. Returns None on EOF or a read error, so
    /// callers can fall back instead of spinning on a closed pipe.
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn prompt(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }
}

impl Default for StdInput {
    fn default() -> Self {
        StdInput::new()
    }
}

impl Input for StdInput {
    fn confirm_roll(&mut self, prompt: &str) {
        self.prompt(prompt);
        let _ = self.read_line();
    }

    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            self.prompt(prompt);
            let line = match self.read_line() {
                Some(l) => l,
                // EOF: decline rather than re-prompt forever.
                None => return false,
            };
            match parse_yes_no(&line) {
                Some(answer) => return answer,
                None => continue,
            }
        }
    }

    fn ask_slot_number(&mut self, low: usize, high: usize) -> usize {
        loop {
            self.prompt(&format!("Enter a slot number [{} - {}]: ", low, high));
            let line = match self.read_line() {
                Some(l) => l,
                // EOF: the lowest slot is always a valid destination.
                None => return low,
            };
            match parse_slot_number(&line, low, high) {
                Some(number) => return number,
                None => continue,
            }
        }
    }

    fn acknowledge(&mut self, message: &str) {
        self.prompt(&format!("{} ", message));
        let _ = self.read_line();
    }
}
