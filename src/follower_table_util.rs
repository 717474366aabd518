use std::collections::HashSet;
use std::fs::File;
use std::io;

use csv::ReaderBuilder;
use thiserror::Error;

pub const USERNAME_COLUMN: &str = "username";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("the file could not be found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("a '{expected}' column was not found in {path}")]
    MissingColumn { expected: String, path: String },
    #[error("could not parse {path} as a comma-separated table")]
    MalformedTable {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads a comma-separated file with a header row and projects the
/// `username` column into a set. Duplicate usernames collapse; rows
/// shorter than the header contribute nothing when the cell is absent.
pub fn load_username_set(path: &str) -> Result<HashSet<String>, AuditError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AuditError::FileNotFound {
            path: path.to_string(),
            source: e,
        },
        _ => AuditError::Io {
            path: path.to_string(),
            source: e,
        },
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AuditError::MalformedTable {
            path: path.to_string(),
            source: e,
        })?
        .clone();
    let username_idx = headers
        .iter()
        .position(|h| h == USERNAME_COLUMN)
        .ok_or_else(|| AuditError::MissingColumn {
            expected: USERNAME_COLUMN.to_string(),
            path: path.to_string(),
        })?;

    let mut usernames: HashSet<String> = HashSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| AuditError::MalformedTable {
            path: path.to_string(),
            source: e,
        })?;
        if let Some(username) = record.get(username_idx) {
            usernames.insert(username.to_string());
        }
    }
    eprintln!("loading {:?} done, {} unique usernames", path, usernames.len());
    Ok(usernames)
}

#[cfg(test)]
mod tests {
    use crate::follower_table_util::{load_username_set, AuditError};
    use ::function_name::named;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    #[named]
    fn load_test_projects_username_column() {
        let file = write_csv("username,full_name\nalice,Alice A\nbob,Bob B\n");
        let set = load_username_set(file.path().to_str().unwrap()).unwrap();
        assert!(set.len() == 2, "{} failed", function_name!());
        assert!(set.contains("alice"), "{} failed", function_name!());
        assert!(set.contains("bob"), "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn load_test_collapses_duplicates() {
        let file = write_csv("username\ncarol\ncarol\ncarol\n");
        let set = load_username_set(file.path().to_str().unwrap()).unwrap();
        assert!(set.len() == 1, "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn load_test_username_not_first_column() {
        let file = write_csv("id,username\n1,dave\n2,erin\n");
        let set = load_username_set(file.path().to_str().unwrap()).unwrap();
        assert!(set.contains("dave"), "{} failed", function_name!());
        assert!(set.contains("erin"), "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn load_test_preserves_case_and_whitespace() {
        let file = write_csv("username\nAlice\n alice \n");
        let set = load_username_set(file.path().to_str().unwrap()).unwrap();
        assert!(set.contains("Alice"), "{} failed", function_name!());
        assert!(set.contains(" alice "), "{} failed", function_name!());
        assert!(!set.contains("alice"), "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn load_test_short_row_is_skipped() {
        let file = write_csv("id,username\n1,frank\n2\n");
        let set = load_username_set(file.path().to_str().unwrap()).unwrap();
        assert!(set.len() == 1, "{} failed", function_name!());
        assert!(set.contains("frank"), "{} failed", function_name!());
    }

    #[test]
    #[named]
    fn load_test_missing_file() {
        let result = load_username_set("no_such_file.csv");
        match result {
            Err(AuditError::FileNotFound { path, .. }) => {
                assert!(path == "no_such_file.csv", "{} failed", function_name!())
            }
            _ => panic!("{} failed", function_name!()),
        }
    }

    #[test]
    #[named]
    fn load_test_missing_column() {
        let file = write_csv("name,full_name\nalice,Alice A\n");
        let result = load_username_set(file.path().to_str().unwrap());
        match result {
            Err(AuditError::MissingColumn { expected, .. }) => {
                assert!(expected == "username", "{} failed", function_name!())
            }
            _ => panic!("{} failed", function_name!()),
        }
    }

    #[test]
    #[named]
    fn load_test_header_only_file() {
        let file = write_csv("username\n");
        let set = load_username_set(file.path().to_str().unwrap()).unwrap();
        assert!(set.is_empty(), "{} failed", function_name!());
    }
}
