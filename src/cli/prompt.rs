//! Interactive breed prompt.
//!
//! Reads one line at a time until it names a breed present in the table. Unknown
//! breeds are reported and asked for again with no attempt limit; only closing
//! standard input ends the loop without a breed.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::data::Table;
use crate::error::AppError;

pub const BANNER: &str = "ENSF 692 Dogs of Calgary";
pub const PROMPT: &str = "Enter a dog breed: ";
pub const NOT_FOUND: &str = "The entered dog breed is not found in the data. Please try again.";

/// Print the program banner (preceded by an empty line).
pub fn write_banner(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "\n{BANNER}").map_err(|e| AppError::output(format!("Failed to write banner: {e}")))
}

/// Prompt on `out` and read lines from `input` until a known breed is entered.
///
/// `initial` is tried first, as if it had been typed. The returned name is the
/// breed label as stored in the table.
pub fn capture_breed(
    table: &Table,
    initial: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<String, AppError> {
    if let Some(candidate) = initial {
        match lookup(table, candidate) {
            Some(breed) => return Ok(breed),
            None => not_found(out, candidate)?,
        }
    }

    loop {
        write!(out, "{PROMPT}")
            .and_then(|_| out.flush())
            .map_err(|e| AppError::output(format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::input("No input received before a breed was chosen."));
        }

        match lookup(table, &line) {
            Some(breed) => return Ok(breed),
            None => not_found(out, &line)?,
        }
    }
}

/// Only the line ending is stripped; surrounding spaces are part of the name.
fn lookup(table: &Table, candidate: &str) -> Option<String> {
    let normalized = candidate.trim_end_matches(['\r', '\n']).to_uppercase();
    if normalized.is_empty() {
        return None;
    }
    table.resolve_breed(&normalized).map(str::to_string)
}

fn not_found(out: &mut impl Write, candidate: &str) -> Result<(), AppError> {
    debug!(candidate = candidate.trim(), "breed not found");
    writeln!(out, "{NOT_FOUND}").map_err(|e| AppError::output(format!("Failed to write message: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::domain::Record;
    use crate::error::ErrorKind;

    fn table() -> Table {
        Table::new(vec![
            Record { breed: "PUG".into(), year: 2021, month: "May".into(), total: 3 },
            Record { breed: "GOLDEN RETRIEVER".into(), year: 2022, month: "June".into(), total: 9 },
        ])
    }

    #[test]
    fn accepts_lowercase_input() {
        let mut input = Cursor::new("pug\n");
        let mut out = Vec::new();
        let breed = capture_breed(&table(), None, &mut input, &mut out).unwrap();
        assert_eq!(breed, "PUG");
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn surrounding_spaces_are_not_stripped() {
        let mut input = Cursor::new(" pug\r\npug\r\n");
        let mut out = Vec::new();
        let breed = capture_breed(&table(), None, &mut input, &mut out).unwrap();
        assert_eq!(breed, "PUG");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(NOT_FOUND).count(), 1);
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn retries_until_a_known_breed() {
        let mut input = Cursor::new("poodle\n\ngolden retriever\n");
        let mut out = Vec::new();
        let breed = capture_breed(&table(), None, &mut input, &mut out).unwrap();
        assert_eq!(breed, "GOLDEN RETRIEVER");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 3);
        assert_eq!(text.matches(NOT_FOUND).count(), 2);
    }

    #[test]
    fn initial_candidate_skips_the_prompt() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let breed = capture_breed(&table(), Some("Pug"), &mut input, &mut out).unwrap();
        assert_eq!(breed, "PUG");
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_initial_candidate_falls_back_to_prompt() {
        let mut input = Cursor::new("pug\n");
        let mut out = Vec::new();
        let breed = capture_breed(&table(), Some("poodle"), &mut input, &mut out).unwrap();
        assert_eq!(breed, "PUG");
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(NOT_FOUND));
    }

    #[test]
    fn end_of_input_is_an_input_error() {
        let mut input = Cursor::new("poodle\n");
        let mut out = Vec::new();
        let err = capture_breed(&table(), None, &mut input, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn banner_has_leading_blank_line() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("\n{BANNER}\n"));
    }
}
