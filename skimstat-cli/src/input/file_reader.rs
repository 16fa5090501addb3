//! Corpus file handling

use crate::error::{CliError, CliResult};
use skimstat_engine::Input;
use std::io;
use std::path::Path;

/// Open a corpus path as an engine input; `-` selects stdin.
pub fn open_input(path: &Path) -> CliResult<Input> {
    if path == Path::new("-") {
        return Ok(Input::from_reader(io::stdin()));
    }
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    Ok(Input::from_file(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_file_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.txt");
        fs::write(&path, "a b c\n").unwrap();
        assert!(open_input(&path).is_ok());
    }

    #[test]
    fn missing_file_is_reported_by_name() {
        let err = open_input(Path::new("/no/such/corpus.txt")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
        assert!(err.to_string().contains("corpus.txt"));
    }

    #[test]
    fn dash_selects_stdin() {
        assert!(open_input(Path::new("-")).is_ok());
    }

    #[test]
    fn directory_is_not_a_corpus() {
        let dir = TempDir::new().unwrap();
        assert!(open_input(dir.path()).is_err());
    }
}
