use anyhow::{Context, Result};
use std::fs;
use std::io::{Write, stdout};
use std::path::Path;

use crate::domain::Ledger;

/// Load the ordered ledger sequence from a JSON file. Paths resolve
/// relative to the current working directory.
pub fn load_ledgers(path: &Path) -> Result<Vec<Ledger>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ledgers file: {}", path.display()))?;
    let ledgers: Vec<Ledger> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse ledgers file: {}", path.display()))?;
    Ok(ledgers)
}

/// Load a header file verbatim; its contents become the document prefix.
pub fn load_header(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read header file: {}", path.display()))
}

/// Writer for the assembled document: a file when a path is given,
/// stdout otherwise.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(stdout())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_ledgers_parses_sequence() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "L0", "currency": "USD", "plugin": "p", "store": "s",
                 "left_account": "a", "right_account": "b"}}]"#
        )
        .unwrap();

        let ledgers = load_ledgers(file.path()).unwrap();
        assert_eq!(ledgers.len(), 1);
        assert_eq!(ledgers[0].name, "L0");
    }

    #[test]
    fn test_load_ledgers_missing_file_names_path() {
        let err = load_ledgers(Path::new("no/such/ledgers.json")).unwrap_err();
        assert!(err.to_string().contains("no/such/ledgers.json"));
    }

    #[test]
    fn test_load_ledgers_malformed_json_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_ledgers(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_header_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "version: \"2.1\"\nservices:\n").unwrap();

        let header = load_header(file.path()).unwrap();
        assert_eq!(header, "version: \"2.1\"\nservices:\n");
    }
}
