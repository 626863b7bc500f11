// src/loader.rs

use crate::domain::HotelRecord;
use csv::ReaderBuilder;
use std::error::Error;
use std::fmt;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Csv(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "could not read input: {msg}"),
            LoadError::Csv(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for LoadError {}

/// Parses delimited text with a header row into hotel records.
///
/// All or nothing: the first malformed row fails the whole batch. Blank lines
/// are skipped and short rows are allowed (missing cells become `None`).
pub fn parse_hotels<R: Read>(input: R) -> Result<Vec<HotelRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut hotels = Vec::new();
    for (row, record) in reader.deserialize::<HotelRecord>().enumerate() {
        let hotel = record.map_err(|e| LoadError::Csv(format!("row {}: {e}", row + 1)))?;
        hotels.push(hotel);
    }

    Ok(hotels)
}

pub fn load_hotels_file(path: &Path) -> Result<Vec<HotelRecord>, LoadError> {
    let file = std::fs::File::open(path)
        .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?;
    parse_hotels(file)
}
