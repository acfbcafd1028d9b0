use std::{fs::File, io::Read, path::Path};

use crate::error::{Error, Result};

/// Title column of the bundled dataset.
pub const DEFAULT_TITLE_COLUMN: &str = "Product Name";

/// Reads the title column out of a CSV dataset with a header row.
///
/// The column is validated against the header before any row is read, so
/// a missing column fails fast with `Error::MissingColumn`. Cell contents
/// are taken verbatim; cleaning happens later in the normalizer.
pub fn load_titles(path: impl AsRef<Path>, title_column: &str) -> Result<Vec<String>> {
    let file = File::open(path)?;
    titles_from_reader(file, title_column)
}

pub fn titles_from_reader<R: Read>(reader: R, title_column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(reader);

    let column = reader
        .headers()?
        .iter()
        .position(|header| header == title_column)
        .ok_or_else(|| Error::MissingColumn(title_column.to_string()))?;

    let mut titles = Vec::new();
    for record in reader.records() {
        let record = record?;
        // A short row yields an empty title, not an error; it normalizes
        // to an empty token sequence downstream.
        titles.push(record.get(column).unwrap_or("").to_string());
    }

    Ok(titles)
}
