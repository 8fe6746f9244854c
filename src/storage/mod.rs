//! Flat-file persistence for the word trie.
//!
//! A saved trie is a plain text file holding one word per line, each line
//! ended by `\n`. Files are addressed by a stem; the store adds its
//! directory and extension.

use crate::config::StorageConfig;
use crate::data_structures::WordTrie;
use crate::error::StorageError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Saves and loads tries as word files inside one directory.
#[derive(Debug, Clone)]
pub struct WordStore {
    directory: PathBuf,
    extension: String,
}

impl WordStore {
    /// Creates a store rooted at `directory` that names files `<stem>.<extension>`.
    pub fn new<P, S>(directory: P, extension: S) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            directory: directory.into(),
            extension: extension.into(),
        }
    }

    /// Creates a store from the storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.directory.clone(), config.extension.clone())
    }

    /// Returns the directory word files live in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Resolves the file a stem refers to.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - The path `<directory>/<stem>.<extension>`.
    /// * `Err(StorageError::InvalidStem)` - If the stem is empty or would
    ///   leave the storage directory.
    pub fn path_for(&self, stem: &str) -> StorageResult<PathBuf> {
        if stem.is_empty()
            || stem == "."
            || stem == ".."
            || stem.contains(std::path::is_separator)
        {
            return Err(StorageError::InvalidStem(stem.to_string()));
        }
        Ok(self.directory.join(format!("{stem}.{}", self.extension)))
    }

    /// Writes every word in `trie` to the file named by `stem`.
    ///
    /// An existing file is never overwritten: the file is created atomically
    /// and the save is refused if it is already there. A failed write
    /// removes the file it created.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words written.
    /// * `Err(StorageError::AlreadyExists)` - If the destination exists; nothing is written.
    /// * `Err(StorageError::Io)` - If creating or writing the file failed.
    pub fn save(&self, trie: &WordTrie, stem: &str) -> StorageResult<usize> {
        let path = self.path_for(stem)?;
        let count = Self::write_new(&path, |file| trie.write_words(BufWriter::new(file)))?;

        info!(path = %path.display(), words = count, "Trie saved");
        Ok(count)
    }

    /// Creates `path`, which must not exist yet, and fills it with `write`.
    ///
    /// A file that fails part-way through is removed again, so it neither
    /// blocks the next save under the same stem nor loads as a partial list.
    fn write_new<F>(path: &Path, write: F) -> StorageResult<usize>
    where
        F: FnOnce(File) -> io::Result<usize>,
    {
        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(path.to_path_buf()))
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        write(file).map_err(|source| {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "Failed to remove partial word file");
            }
            StorageError::Io {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Inserts every word from the file named by `stem` into `trie`.
    ///
    /// The whole file is read before anything is inserted, so on any error
    /// the trie is left exactly as it was.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were not stored before.
    /// * `Err(StorageError::NotFound)` - If the source file does not exist.
    /// * `Err(StorageError::Io)` - If reading failed or the file is not UTF-8.
    pub fn load(&self, trie: &mut WordTrie, stem: &str) -> StorageResult<usize> {
        let path = self.path_for(stem)?;

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path))
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        let added = trie
            .read_words(BufReader::new(file))
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), added, "Trie loaded");
        Ok(added)
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_path_for() {
        let store = WordStore::new("/data", "txt");
        assert_eq!(store.path_for("words").unwrap(), PathBuf::from("/data/words.txt"));
        assert!(matches!(store.path_for(""), Err(StorageError::InvalidStem(_))));
        assert!(matches!(store.path_for("../escape"), Err(StorageError::InvalidStem(_))));
        assert!(matches!(store.path_for(".."), Err(StorageError::InvalidStem(_))));
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let store = WordStore::new(dir.path(), "txt");

        let first: WordTrie = ["cat", "car"].into_iter().collect();
        assert_eq!(store.save(&first, "animals").unwrap(), 2);

        let second: WordTrie = ["dog"].into_iter().collect();
        let err = store.save(&second, "animals").unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists(_)));

        let contents = fs::read_to_string(dir.path().join("animals.txt")).unwrap();
        assert_eq!(contents, "car\ncat\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let store = WordStore::new(dir.path(), "txt");
        let mut trie: WordTrie = ["keep"].into_iter().collect();
        let before = trie.clone();

        let err = store.load(&mut trie, "missing").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
        assert_eq!(trie, before);
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempdir().unwrap();
        let store = WordStore::new(dir.path(), "txt");
        let path = store.path_for("partial").unwrap();

        let err = WordStore::write_new(&path, |mut file| {
            file.write_all(b"apple\nban")?;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        })
        .unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!path.exists());

        // The stem is free again and nothing partial can be loaded.
        let mut trie = WordTrie::new();
        assert!(matches!(store.load(&mut trie, "partial"), Err(StorageError::NotFound(_))));

        let full: WordTrie = ["apple", "banana"].into_iter().collect();
        assert_eq!(store.save(&full, "partial").unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "apple\nbanana\n");
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let store = WordStore::new(dir.path().join("nope"), "txt");
        let trie: WordTrie = ["x"].into_iter().collect();

        let err = store.save(&trie, "words").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
