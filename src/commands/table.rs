//! Pattern table precomputation command

use crate::solver::{PatternTable, TableError};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Build the pattern table for `dictionary` and write it to `out`
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn build_table(dictionary: &Dictionary, out: &Path) -> Result<PatternTable, TableError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(format!(
        "scoring {} x {} word pairs",
        dictionary.all().len(),
        dictionary.answers().len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let table = PatternTable::build(dictionary);
    spinner.set_message(format!("writing {}", out.display()));
    let saved = table.save(out);
    spinner.finish_and_clear();

    saved.map(|()| table)
}
