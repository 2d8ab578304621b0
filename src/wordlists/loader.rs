//! Word list loading utilities
//!
//! Word lists are line-delimited files, one word per line.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are skipped and entries are trimmed and lowercased. A malformed
/// entry is an error naming the file and line.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::InvalidWord` for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_lab::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_lines(&content, path)
}

fn parse_lines(content: &str, path: &Path) -> Result<Vec<Word>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::new(line.trim()).map_err(|source| DictionaryError::InvalidWord {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Load the full and answer lists and assemble a [`Dictionary`]
///
/// Answer words missing from the allowed list are appended to the full list so
/// every answer stays guessable.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or if a list is empty.
pub fn load_dictionary<P: AsRef<Path>, Q: AsRef<Path>>(
    allowed_path: P,
    answers_path: Q,
) -> Result<Dictionary, DictionaryError> {
    let mut all = load_from_file(allowed_path)?;
    let answers = load_from_file(answers_path)?;

    let known: FxHashSet<Word> = all.iter().copied().collect();
    let missing: Vec<Word> = answers
        .iter()
        .copied()
        .filter(|w| !known.contains(w))
        .collect();
    if !missing.is_empty() {
        log::info!(
            "adding {} answer words absent from the allowed list",
            missing.len()
        );
        all.extend(missing);
    }

    let dictionary = Dictionary::new(all, answers)?;
    log::info!(
        "loaded {} guess words, {} answers",
        dictionary.all().len(),
        dictionary.answers().len()
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_lab_loader_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_lines_skips_blank_and_normalizes() {
        let words = parse_lines("crane\n\n  SLATE  \nirate\n", Path::new("mem")).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_lines_reports_line_number() {
        let err = parse_lines("crane\n\ntoolong\n", Path::new("mem")).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidWord { line: 3, .. }));
        assert!(err.to_string().starts_with("mem:3:"));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/wordle_lab/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn load_dictionary_merges_missing_answers() {
        let allowed = temp_file("allowed.txt", "crane\nslate\n");
        let answers = temp_file("answers.txt", "slate\ngrape\n");

        let dict = load_dictionary(&allowed, &answers).unwrap();
        assert_eq!(dict.all().len(), 3);
        assert_eq!(dict.answers().len(), 2);
        assert!(dict.contains(&Word::new("grape").unwrap()));

        fs::remove_file(allowed).unwrap();
        fs::remove_file(answers).unwrap();
    }
}
