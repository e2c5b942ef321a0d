//! Console rendering for both demo programs.
//!
//! Everything writes to a caller-supplied `Write` so tests can render into a
//! `Vec<u8>`. Labels are only styled when `color` is set.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

pub const PROMPT: &str = "Type a string to fizzle and press enter";

fn label(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Reads one line, without its terminator.
///
/// End of input is the empty string; so is a failed read, which is logged.
pub fn read_input_line<R: BufRead>(reader: &mut R) -> String {
    let mut line = String::new();
    if let Err(err) = reader.read_line(&mut line) {
        warn!(error = %err, "could not read input line, using empty string");
        return String::new();
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

pub fn write_prompt<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    writeln!(out, "{}", label(PROMPT, color))?;
    out.flush()
}

pub fn write_fizzle_report<W: Write>(
    out: &mut W,
    input: &str,
    fizzed: &str,
    color: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", label("You typed:", color), input)?;
    writeln!(out, "{} {}", label("Fizzed String:", color), fizzed)
}

/// A label line followed by one tab-indented value per line.
pub fn write_labeled_list<W: Write>(
    out: &mut W,
    title: &str,
    values: &[i32],
    color: bool,
) -> io::Result<()> {
    writeln!(out, "{}", label(title, color))?;
    for value in values {
        writeln!(out, "\t {}", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_read_strips_newline() {
        assert_eq!(read_input_line(&mut Cursor::new("hello\n")), "hello");
        assert_eq!(read_input_line(&mut Cursor::new("hello\r\n")), "hello");
        assert_eq!(read_input_line(&mut Cursor::new("no newline")), "no newline");
    }

    #[test]
    fn test_read_only_first_line() {
        let mut input = Cursor::new("first\nsecond\n");
        assert_eq!(read_input_line(&mut input), "first");
    }

    #[test]
    fn test_read_eof_is_empty() {
        assert_eq!(read_input_line(&mut Cursor::new("")), "");
        assert_eq!(read_input_line(&mut Cursor::new("\n")), "");
    }

    #[test]
    fn test_read_keeps_inner_whitespace() {
        assert_eq!(read_input_line(&mut Cursor::new("  padded \t\n")), "  padded \t");
    }

    #[test]
    fn test_read_invalid_utf8_is_empty() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        assert_eq!(read_input_line(&mut input), "");
    }

    #[test]
    fn test_prompt() {
        let text = render(|out| write_prompt(out, false));
        assert_eq!(text, "Type a string to fizzle and press enter\n");
    }

    #[test]
    fn test_fizzle_report() {
        let text = render(|out| write_fizzle_report(out, "Hello", "HelloFizz", false));
        assert_eq!(text, "\nYou typed: Hello\nFizzed String: HelloFizz\n");
    }

    #[test]
    fn test_fizzle_report_empty_input() {
        let text = render(|out| write_fizzle_report(out, "", "Fizz", false));
        assert_eq!(text, "\nYou typed: \nFizzed String: Fizz\n");
    }

    #[test]
    fn test_labeled_list() {
        let text = render(|out| write_labeled_list(out, "Fluent List:", &[2, 6], false));
        assert_eq!(text, "Fluent List:\n\t 2\n\t 6\n");
    }

    #[test]
    fn test_labeled_list_empty() {
        let text = render(|out| write_labeled_list(out, "Query List:", &[], false));
        assert_eq!(text, "Query List:\n");
    }

    #[test]
    fn test_color_keeps_label_text() {
        colored::control::set_override(true);
        let text = render(|out| write_labeled_list(out, "Query List:", &[22], true));
        assert!(text.contains("Query List:"));
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with("\t 22\n"));
    }
}
