//! Local cache of looked-up entries.
//!
//! Each record is one JSON file named after the SHA-256 of its canonical
//! URL, so two lookups that land on the same page share a record. A record
//! is written to a temporary file and linked into place without clobbering:
//! when two processes race, the first record written wins and the other is
//! discarded. A reader never sees a half-written record.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::types::{CacheRecord, Source};

/// Directory holding the record files.
const ENTRIES_DIR: &str = "entries";

/// Storage for cached lookups.
pub trait CacheStore {
    /// Find the newest record answering `word` in `source`.
    ///
    /// # Errors
    /// Returns `Io` if the store cannot be read.
    fn find(&self, word: &str, source: Source) -> Result<Option<CacheRecord>>;

    /// Insert a record. Returns `false` when a record for the same
    /// canonical URL already exists; the stored record is kept.
    ///
    /// # Errors
    /// Returns `Io` or `Json` if the record cannot be written.
    fn insert(&self, record: &CacheRecord) -> Result<bool>;

    /// All records, newest first.
    ///
    /// # Errors
    /// Returns `Io` if the store cannot be read.
    fn list(&self) -> Result<Vec<CacheRecord>>;

    /// Delete every record whose input or canonical word is `word`.
    /// Returns the number of deleted records.
    ///
    /// # Errors
    /// Returns `Io` if a record cannot be removed.
    fn delete(&self, word: &str) -> Result<usize>;
}

/// File-backed cache store.
#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Open a cache rooted at `root`. Nothing is created until the first
    /// insert.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entries_dir(&self) -> PathBuf {
        self.root.join(ENTRIES_DIR)
    }

    fn record_path(&self, canonical_url: &str) -> PathBuf {
        self.entries_dir().join(format!("{}.json", record_key(canonical_url)))
    }

    /// Read every record with its file path. Unreadable files are skipped.
    fn records(&self) -> Result<Vec<(PathBuf, CacheRecord)>> {
        let dir = self.entries_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match read_record(&path) {
                Ok(record) => records.push((path, record)),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable cache record"
                    );
                }
            }
        }
        records.sort_by(|(_, a), (_, b)| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

impl CacheStore for FileCache {
    fn find(&self, word: &str, source: Source) -> Result<Option<CacheRecord>> {
        let found = self
            .records()?
            .into_iter()
            .map(|(_, record)| record)
            .find(|record| record.matches(word, source));
        tracing::debug!(word, source = %source, hit = found.is_some(), "Cache lookup");
        Ok(found)
    }

    fn insert(&self, record: &CacheRecord) -> Result<bool> {
        let dir = self.entries_dir();
        fs::create_dir_all(&dir)?;
        let path = self.record_path(&record.canonical_url);

        let mut staged = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut staged, record)?;
        staged.as_file_mut().flush()?;

        match staged.persist_noclobber(&path) {
            Ok(_) => {}
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                if read_record(&path).is_ok() {
                    tracing::debug!(
                        url = %record.canonical_url,
                        "Cache record already exists, discarding duplicate"
                    );
                    return Ok(false);
                }
                tracing::warn!(
                    url = %record.canonical_url,
                    path = %path.display(),
                    "Replacing unreadable cache record"
                );
                e.file.persist(&path).map_err(|e| e.error)?;
            }
            Err(e) => return Err(e.error.into()),
        }

        tracing::debug!(url = %record.canonical_url, path = %path.display(), "Cached entry");
        Ok(true)
    }

    fn list(&self) -> Result<Vec<CacheRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .map(|(_, record)| record)
            .collect())
    }

    fn delete(&self, word: &str) -> Result<usize> {
        let mut deleted = 0;
        for (path, record) in self.records()? {
            if record.matches_word(word) {
                fs::remove_file(&path)?;
                tracing::debug!(word, path = %path.display(), "Deleted cache record");
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

fn read_record(path: &Path) -> Result<CacheRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Hex SHA-256 of a canonical URL.
#[must_use]
pub fn record_key(canonical_url: &str) -> String {
    hex::encode(Sha256::digest(canonical_url.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extraction;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn record(word: &str, url: &str, source: Source) -> CacheRecord {
        let extraction = Extraction {
            source,
            canonical_word: word.to_string(),
            events: Vec::new(),
            serialized_entry: format!("<title>{word}</title>"),
        };
        CacheRecord::new(word, url, &extraction)
    }

    #[test]
    fn test_insert_and_find() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path());

        assert!(cache.find("example", Source::Cambridge).unwrap().is_none());
        let stored = record(
            "example",
            "https://dictionary.cambridge.org/dictionary/english/example",
            Source::Cambridge,
        );
        assert!(cache.insert(&stored).unwrap());

        assert_eq!(cache.find("Example", Source::Cambridge).unwrap(), Some(stored));
        assert!(cache.find("example", Source::Webster).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_insert_keeps_first_record() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path());
        let url = "https://www.merriam-webster.com/dictionary/example";

        let first = record("example", url, Source::Webster);
        let mut second = record("examples", url, Source::Webster);
        second.serialized_entry = "<title>other</title>".to_string();

        assert!(cache.insert(&first).unwrap());
        assert!(!cache.insert(&second).unwrap());
        assert_eq!(cache.list().unwrap(), vec![first]);
    }

    #[test]
    fn test_insert_replaces_truncated_record() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path());
        let url = "https://www.merriam-webster.com/dictionary/example";

        // Left behind by a process that died mid-write.
        fs::create_dir_all(cache.entries_dir()).unwrap();
        fs::write(cache.record_path(url), "").unwrap();
        assert!(cache.find("example", Source::Webster).unwrap().is_none());

        let stored = record("example", url, Source::Webster);
        assert!(cache.insert(&stored).unwrap());
        assert_eq!(cache.find("example", Source::Webster).unwrap(), Some(stored));
        assert_eq!(cache.delete("example").unwrap(), 1);
        assert!(cache.insert(&record("example", url, Source::Webster)).unwrap());
    }

    #[test]
    fn test_insert_leaves_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path());
        let url = "https://www.merriam-webster.com/dictionary/example";

        cache.insert(&record("example", url, Source::Webster)).unwrap();
        cache.insert(&record("examples", url, Source::Webster)).unwrap();

        let files: Vec<PathBuf> = fs::read_dir(cache.entries_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files, vec![cache.record_path(url)]);
    }

    #[test]
    fn test_list_newest_first_and_delete() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path());

        let base = "https://www.merriam-webster.com/dictionary/";
        let mut old = record("sample", &format!("{base}sample"), Source::Webster);
        old.created_at = Utc::now() - Duration::days(1);
        let new = record("example", &format!("{base}example"), Source::Webster);
        cache.insert(&old).unwrap();
        cache.insert(&new).unwrap();

        let words: Vec<String> = cache
            .list()
            .unwrap()
            .into_iter()
            .map(|record| record.input_word)
            .collect();
        assert_eq!(words, ["example", "sample"]);

        assert_eq!(cache.delete("SAMPLE").unwrap(), 1);
        assert_eq!(cache.delete("missing").unwrap(), 0);
        assert_eq!(cache.list().unwrap().len(), 1);
    }

    #[test]
    fn test_matching_folds_non_ascii_case() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path());
        let stored = record(
            "Éclair",
            "https://dictionary.cambridge.org/dictionary/english/eclair",
            Source::Cambridge,
        );
        cache.insert(&stored).unwrap();

        assert_eq!(cache.find("éclair", Source::Cambridge).unwrap(), Some(stored));
        assert_eq!(cache.delete("ÉCLAIR").unwrap(), 1);
    }

    #[test]
    fn test_record_key_is_stable_hex() {
        let url = "https://dictionary.cambridge.org/dictionary/english/example";
        let key = record_key(url);
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key, record_key(url));
        assert_ne!(key, record_key("https://www.merriam-webster.com/dictionary/example"));
    }
}
