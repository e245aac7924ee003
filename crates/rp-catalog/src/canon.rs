//! The bundled 66-book Protestant canon (King James Version counts).
//!
//! Used when no remote catalog is configured.  Codes are the three-character
//! book identifiers used by the online scripture catalog, so cache files
//! written from either source are interchangeable.

use std::fmt;

use crate::{BookCounts, CatalogError, CatalogResult, MetaSource};

// ── BookCode ──────────────────────────────────────────────────────────────────

/// A catalog book identifier such as `GEN`, `1SA`, or `REV`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookCode(String);

impl BookCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book as listed by a catalog: identifier plus display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookRef {
    pub code: BookCode,
    pub name: String,
}

// ── Canon ─────────────────────────────────────────────────────────────────────

/// (code, name, chapters, verses)
const KJV: [(&str, &str, u32, u32); 66] = [
    ("GEN", "Genesis",          50, 1533),
    ("EXO", "Exodus",           40, 1213),
    ("LEV", "Leviticus",        27,  859),
    ("NUM", "Numbers",          36, 1288),
    ("DEU", "Deuteronomy",      34,  959),
    ("JOS", "Joshua",           24,  658),
    ("JDG", "Judges",           21,  618),
    ("RUT", "Ruth",              4,   85),
    ("1SA", "1 Samuel",         31,  810),
    ("2SA", "2 Samuel",         24,  695),
    ("1KI", "1 Kings",          22,  816),
    ("2KI", "2 Kings",          25,  719),
    ("1CH", "1 Chronicles",     29,  942),
    ("2CH", "2 Chronicles",     36,  822),
    ("EZR", "Ezra",             10,  280),
    ("NEH", "Nehemiah",         13,  406),
    ("EST", "Esther",           10,  167),
    ("JOB", "Job",              42, 1070),
    ("PSA", "Psalms",          150, 2461),
    ("PRO", "Proverbs",         31,  915),
    ("ECC", "Ecclesiastes",     12,  222),
    ("SNG", "Song of Solomon",   8,  117),
    ("ISA", "Isaiah",           66, 1292),
    ("JER", "Jeremiah",         52, 1364),
    ("LAM", "Lamentations",      5,  154),
    ("EZK", "Ezekiel",          48, 1273),
    ("DAN", "Daniel",           12,  357),
    ("HOS", "Hosea",            14,  197),
    ("JOL", "Joel",              3,   73),
    ("AMO", "Amos",              9,  146),
    ("OBA", "Obadiah",           1,   21),
    ("JON", "Jonah",             4,   48),
    ("MIC", "Micah",             7,  105),
    ("NAM", "Nahum",             3,   47),
    ("HAB", "Habakkuk",          3,   56),
    ("ZEP", "Zephaniah",         3,   53),
    ("HAG", "Haggai",            2,   38),
    ("ZEC", "Zechariah",        14,  211),
    ("MAL", "Malachi",           4,   55),
    ("MAT", "Matthew",          28, 1071),
    ("MRK", "Mark",             16,  678),
    ("LUK", "Luke",             24, 1151),
    ("JHN", "John",             21,  879),
    ("ACT", "Acts",             28, 1007),
    ("ROM", "Romans",           16,  433),
    ("1CO", "1 Corinthians",    16,  437),
    ("2CO", "2 Corinthians",    13,  257),
    ("GAL", "Galatians",         6,  149),
    ("EPH", "Ephesians",         6,  155),
    ("PHP", "Philippians",       4,  104),
    ("COL", "Colossians",        4,   95),
    ("1TH", "1 Thessalonians",   5,   89),
    ("2TH", "2 Thessalonians",   3,   47),
    ("1TI", "1 Timothy",         6,  113),
    ("2TI", "2 Timothy",         4,   83),
    ("TIT", "Titus",             3,   46),
    ("PHM", "Philemon",          1,   25),
    ("HEB", "Hebrews",          13,  303),
    ("JAS", "James",             5,  108),
    ("1PE", "1 Peter",           5,  105),
    ("2PE", "2 Peter",           3,   61),
    ("1JN", "1 John",            5,  105),
    ("2JN", "2 John",            1,   13),
    ("3JN", "3 John",            1,   14),
    ("JUD", "Jude",              1,   25),
    ("REV", "Revelation",       22,  404),
];

/// Number of Old Testament books at the front of the canon.
const OLD_TESTAMENT_LEN: usize = 39;

/// Offline [`MetaSource`] backed by a compiled-in book table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Canon;

impl Canon {
    /// Names of every book, in canonical order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        KJV.iter().map(|&(_, name, _, _)| name)
    }

    pub fn old_testament() -> impl Iterator<Item = &'static str> {
        Self::names().take(OLD_TESTAMENT_LEN)
    }

    pub fn new_testament() -> impl Iterator<Item = &'static str> {
        Self::names().skip(OLD_TESTAMENT_LEN)
    }
}

impl MetaSource for Canon {
    fn list_books(&self) -> CatalogResult<Vec<BookRef>> {
        Ok(KJV
            .iter()
            .map(|&(code, name, _, _)| BookRef { code: BookCode::new(code), name: name.to_owned() })
            .collect())
    }

    fn fetch_counts(&self, book: &BookRef) -> CatalogResult<BookCounts> {
        KJV.iter()
            .find(|&&(code, _, _, _)| code == book.code.as_str())
            .map(|&(_, _, chapters, verses)| BookCounts { chapters, verses })
            .ok_or_else(|| CatalogError::UnknownCode(book.code.to_string()))
    }
}
