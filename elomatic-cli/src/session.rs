/// Interactive ranking loop: show two items, read the user's pick, repeat.
use elomatic_core::{ElomaticError, ItemStore, KeyValueStore};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::output::format_outcome;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("terminal IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] ElomaticError),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub recorded: usize,
    pub skipped: usize,
}

enum Choice {
    First,
    Second,
    Skip,
    Quit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "a" => Some(Choice::First),
        "2" | "b" => Some(Choice::Second),
        "s" | "skip" => Some(Choice::Skip),
        "q" | "quit" => Some(Choice::Quit),
        _ => None,
    }
}

/// Run comparisons until the user quits, input ends, or `max_rounds` picks are recorded.
pub fn run_session<S, R, W>(
    store: &mut ItemStore<S>,
    mut input: R,
    out: &mut W,
    max_rounds: Option<usize>,
) -> Result<SessionSummary, SessionError>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    'rounds: while max_rounds.map_or(true, |max| summary.recorded < max) {
        let comparison = store.next_comparison()?;
        let (first, second) = (&store.items()[comparison.first], &store.items()[comparison.second]);

        writeln!(out)?;
        writeln!(out, "[1] {} ({})", first.title(), first.score)?;
        writeln!(out, "[2] {} ({})", second.title(), second.score)?;

        let choice = loop {
            write!(out, "Which wins? 1/2 (s = skip, q = quit): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break 'rounds;
            }
            match parse_choice(&line) {
                Some(choice) => break choice,
                None => writeln!(out, "Please answer 1, 2, s or q.")?,
            }
        };

        match choice {
            Choice::First | Choice::Second => {
                let first_wins = matches!(choice, Choice::First);
                let outcome = store.record_comparison(comparison, first_wins)?;
                writeln!(out, "{}", format_outcome(&outcome))?;
                summary.recorded += 1;
            }
            Choice::Skip => {
                debug!(?comparison, "Skipped comparison");
                summary.skipped += 1;
            }
            Choice::Quit => break,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elomatic_core::{Item, MemoryStore, RatingConfig};
    use std::io::Cursor;

    fn store(titles: &[&str]) -> ItemStore<MemoryStore> {
        let items = titles.iter().map(|&t| Item::new(t)).collect();
        ItemStore::with_items(MemoryStore::new(), RatingConfig::default(), items)
    }

    #[test]
    fn test_records_until_quit() {
        let mut store = store(&["A", "B", "C"]);
        let mut out = Vec::new();
        let summary = run_session(&mut store, Cursor::new("1\n2\ns\nq\n"), &mut out, None).unwrap();

        assert_eq!(summary, SessionSummary { recorded: 2, skipped: 1 });
        let total: u32 = store.items().iter().map(|i| i.comparisons).sum();
        assert_eq!(total, 4);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(+16)"));
    }

    #[test]
    fn test_stops_at_max_rounds() {
        let mut store = store(&["A", "B"]);
        let mut out = Vec::new();
        let summary = run_session(&mut store, Cursor::new("1\n1\n1\n1\n"), &mut out, Some(2)).unwrap();
        assert_eq!(summary.recorded, 2);
        assert_eq!(store.items()[0].comparisons, 2);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut store = store(&["A", "B"]);
        let mut out = Vec::new();
        let summary = run_session(&mut store, Cursor::new("maybe\n2\n"), &mut out, None).unwrap();
        assert_eq!(summary.recorded, 1);
        assert!(String::from_utf8(out).unwrap().contains("Please answer"));
    }

    #[test]
    fn test_needs_two_items() {
        let mut store = store(&["Lonely"]);
        let mut out = Vec::new();
        let err = run_session(&mut store, Cursor::new("1\n"), &mut out, None).unwrap_err();
        assert!(matches!(err, SessionError::Store(ElomaticError::NotEnoughItems { len: 1 })));
    }
}
