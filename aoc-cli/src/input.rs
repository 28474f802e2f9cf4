//! Puzzle inputs read from a local directory

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Read-only view of an input directory laid out as `{root}/{year}/day_{dd}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day_{day:02}.txt"))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for one puzzle
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { path },
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_layout() {
        let store = InputStore::new(PathBuf::from("/data"));
        assert_eq!(store.path(2023, 4), PathBuf::from("/data/2023/day_04.txt"));
        assert_eq!(store.path(2023, 24), PathBuf::from("/data/2023/day_24.txt"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(temp.path().join("2023/day_09.txt"), "0 3 6\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf());
        assert!(store.contains(2023, 9));
        assert_eq!(store.read(2023, 9).unwrap(), "0 3 6\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 5));
        match store.read(2023, 5) {
            Err(InputError::Missing { path }) => assert!(path.ends_with("2023/day_05.txt")),
            other => panic!("expected a missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023/day_06.txt")).unwrap();

        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2023, 6));
        assert!(store.read(2023, 6).is_err());
    }
}
