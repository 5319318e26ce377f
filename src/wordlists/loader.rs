//! Word list and history loading utilities
//!
//! Plain-text word lists hold one token per line; the used-word history is CSV with
//! `word,game,date` lines. Bad lines are skipped rather than failing the load.

use crate::core::Word;
use crate::solver::{UsedWord, UsedWords};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised when a list file cannot be read
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct LoadError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

/// Normalise word-list text into valid words
///
/// Each line is trimmed and lowercased; lines that are not 5 ASCII letters are dropped.
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::parse_word_list;
///
/// let words = parse_word_list("CIGAR\r\n rebut\n\nsix\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "cigar");
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    Ok(parse_word_list(&read(path.as_ref())?))
}

/// Parse the used-word history
///
/// Lines need at least three comma-separated fields: word, game index and date. A
/// `word,...` header is ignored; any other line with a bad word or game index is
/// skipped with a warning. A later line for the same word replaces an earlier one.
#[must_use]
pub fn parse_used_words(csv: &str) -> UsedWords {
    let mut used = UsedWords::default();

    for (number, line) in csv.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("word,") {
            continue;
        }
        match parse_used_line(line) {
            Some((word, record)) => {
                used.insert(word, record);
            }
            None => log::warn!("skipping used-word line {}: {line:?}", number + 1),
        }
    }

    used
}

/// Load the used-word history from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read.
pub fn load_used_words<P: AsRef<Path>>(path: P) -> Result<UsedWords, LoadError> {
    Ok(parse_used_words(&read(path.as_ref())?))
}

fn parse_used_line(line: &str) -> Option<(String, UsedWord)> {
    let mut fields = line.splitn(3, ',').map(str::trim);
    let word = Word::new(fields.next()?).ok()?;
    let game_index = fields.next()?.parse().ok()?;
    let date = fields.next()?.to_string();
    Some((String::from(word), UsedWord { game_index, date }))
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_word_list_normalises_tokens() {
        let words = parse_word_list("crane\nSLATE\n  irate  \ntoolong\nabc\n\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_used_words_reads_records() {
        let used = parse_used_words("word,game,date\ncigar,0,2021-06-19\nKNOLL, 100 ,2021-09-27\n");

        assert_eq!(used.len(), 2);
        assert_eq!(used["cigar"].game_index, 0);
        assert_eq!(used["cigar"].date, "2021-06-19");
        assert_eq!(used["knoll"].game_index, 100);
    }

    #[test]
    fn parse_used_words_skips_bad_lines() {
        let used = parse_used_words("cigar,0\nrebut,one,2021-06-20\ntoolong,2,2021-06-21\nsissy,3,2021-06-22,extra");

        assert_eq!(used.len(), 1);
        assert_eq!(used["sissy"].date, "2021-06-22,extra");
    }

    #[test]
    fn load_word_list_reports_missing_file() {
        let err = load_word_list("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
