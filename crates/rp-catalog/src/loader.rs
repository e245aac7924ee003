//! CSV book-list loader.
//!
//! Lets a plan run over any ordered list of containers, not just the bundled
//! canon.  Row order is reading order.
//!
//! ```csv
//! name,chapters,verses
//! Ruth,4,85
//! Jonah,4,48
//! Jude,1,25
//! ```
//!
//! The `verses` column may be omitted or left blank (read as 0).

use std::io::Read;
use std::path::Path;

use rp_core::Book;
use serde::Deserialize;

use crate::CatalogError;

#[derive(Deserialize)]
struct BookRecord {
    name:     String,
    chapters: u32,
    #[serde(default)]
    verses:   Option<u32>,
}

/// Load an ordered book list from a CSV file.
pub fn load_books_csv(path: &Path) -> Result<Vec<Book>, CatalogError> {
    let file = std::fs::File::open(path)?;
    load_books_reader(file)
}

/// Like [`load_books_csv`] but accepts any `Read` source.
pub fn load_books_reader<R: Read>(reader: R) -> Result<Vec<Book>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut books = Vec::new();
    for (row, result) in csv_reader.deserialize::<BookRecord>().enumerate() {
        let r = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let book = Book::try_new(r.name, r.chapters, r.verses.unwrap_or(0))
            .map_err(|e| CatalogError::Parse(format!("row {}: {e}", row + 1)))?;
        books.push(book);
    }

    if books.is_empty() {
        return Err(CatalogError::EmptySelection);
    }
    Ok(books)
}
