//! Delimited-table codec.
//!
//! Audit logs are comma-separated tables with a header row. Fields that
//! contain the delimiter, quotes or newlines are quoted. Ragged rows are a
//! parse error, never silently padded.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::StoreError;

/// A header row plus string cells, before any schema interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    #[must_use]
    pub const fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a table from `path`.
    ///
    /// # Errors
    ///
    /// `MissingFile` when `path` does not exist, `Read` for other I/O
    /// failures, `Parse` when the content is not a rectangular table.
    pub fn read_path(path: &Path) -> Result<Self, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_reader(file, path)
    }

    /// Read a table from any reader. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// `Parse` when there is no header row, a row's width differs from the
    /// header's, or the content is not valid UTF-8.
    pub fn from_reader<R: io::Read>(reader: R, path: &Path) -> Result<Self, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|error| read_error(path, error))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(StoreError::parse(path, "no header row"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|error| read_error(path, error))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Write the table to a file that must not exist yet.
    ///
    /// # Errors
    ///
    /// `Write` if the file already exists or any write fails.
    pub fn write_new(&self, path: &Path) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|error| StoreError::write(path, error))?;

        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(&self.headers)
            .map_err(|error| write_error(path, error))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|error| write_error(path, error))?;
        }
        writer
            .flush()
            .map_err(|error| StoreError::write(path, error))
    }

    /// Index of the first column named `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of data rows (the header is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn read_error(path: &Path, error: csv::Error) -> StoreError {
    let reason = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => StoreError::Read {
            path: path.to_path_buf(),
            source,
        },
        _ => StoreError::parse(path, reason),
    }
}

fn write_error(path: &Path, error: csv::Error) -> StoreError {
    let reason = error.to_string();
    let source = match error.into_kind() {
        csv::ErrorKind::Io(source) => source,
        _ => io::Error::other(reason),
    };
    StoreError::write(path, source)
}
