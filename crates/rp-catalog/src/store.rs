//! `MetaStore` — cached per-book counts.
//!
//! # File format (`FileStore`)
//!
//! One `{code}.txt` per book, three labelled lines:
//!
//! ```text
//! Book name: Genesis
//! Chapter count: 50
//! Verse count: 1533
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{BookCode, CatalogError, CatalogResult};

const NAME_LABEL: &str = "Book name";
const CHAPTER_LABEL: &str = "Chapter count";
const VERSE_LABEL: &str = "Verse count";

/// Counts remembered for one book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedMeta {
    pub name:     String,
    pub chapters: u32,
    pub verses:   u32,
}

/// Key-value store of [`CachedMeta`] by [`BookCode`].
pub trait MetaStore {
    /// `Ok(None)` on a miss.
    fn get(&self, code: &BookCode) -> CatalogResult<Option<CachedMeta>>;

    /// Insert or overwrite the entry for `code`.
    fn put(&mut self, code: &BookCode, meta: &CachedMeta) -> CatalogResult<()>;
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// A `HashMap`-backed store that lives as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<BookCode, CachedMeta>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetaStore for MemoryStore {
    fn get(&self, code: &BookCode) -> CatalogResult<Option<CachedMeta>> {
        Ok(self.entries.get(code).cloned())
    }

    fn put(&mut self, code: &BookCode, meta: &CachedMeta) -> CatalogResult<()> {
        self.entries.insert(code.clone(), meta.clone());
        Ok(())
    }
}

// ── On-disk ───────────────────────────────────────────────────────────────────

/// A directory of `{code}.txt` report files.
///
/// The directory is created on the first `put`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the cache file for `code`.
    pub fn path_for(&self, code: &BookCode) -> PathBuf {
        self.dir.join(format!("{code}.txt"))
    }
}

impl MetaStore for FileStore {
    fn get(&self, code: &BookCode) -> CatalogResult<Option<CachedMeta>> {
        let path = self.path_for(code);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        parse_report(&text)
            .map(Some)
            .map_err(|reason| CatalogError::CacheFormat { path, reason })
    }

    fn put(&mut self, code: &BookCode, meta: &CachedMeta) -> CatalogResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(code), format_report(meta))?;
        Ok(())
    }
}

// ── Report format ─────────────────────────────────────────────────────────────

fn format_report(meta: &CachedMeta) -> String {
    format!(
        "{NAME_LABEL}: {}\n{CHAPTER_LABEL}: {}\n{VERSE_LABEL}: {}\n",
        meta.name, meta.chapters, meta.verses
    )
}

fn parse_report(text: &str) -> Result<CachedMeta, String> {
    let mut lines = text.lines();
    let name = labelled(lines.next(), NAME_LABEL)?.to_owned();
    let chapters = count(labelled(lines.next(), CHAPTER_LABEL)?, CHAPTER_LABEL)?;
    let verses = count(labelled(lines.next(), VERSE_LABEL)?, VERSE_LABEL)?;
    Ok(CachedMeta { name, chapters, verses })
}

fn labelled<'a>(line: Option<&'a str>, label: &str) -> Result<&'a str, String> {
    let line = line.ok_or_else(|| format!("missing {label:?} line"))?;
    line.split_once(": ")
        .filter(|(l, _)| *l == label)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| format!("expected {label:?}, found {line:?}"))
}

fn count(value: &str, label: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{label} {value:?} is not a non-negative integer"))
}
