//! Calendar export payloads and their file metadata.

use std::io::Error as IoError;
use std::string::FromUtf8Error;

use ::csv::Error as CsvError;
use serde::{Deserialize, Serialize};

use crate::model::Zone;

/// Google Calendar spreadsheet-import encoder.
pub mod csv;
/// iCalendar interchange encoder.
pub mod ics;

/// File name prefix used when none is configured.
pub const DEFAULT_FILE_PREFIX: &str = "maplewood_recycling";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Supported export formats.
pub enum ExportFormat {
    /// Comma separated spreadsheet import.
    Csv,
    /// iCalendar interchange.
    Ics,
}

impl ExportFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Ics => "ics",
        }
    }

    /// MIME type served or written alongside the payload.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Ics => "text/calendar",
        }
    }
}

/// File name in the form `<prefix>_<zone>_<year>.<ext>`.
#[must_use]
pub fn export_file_name(prefix: &str, zone: Zone, year: i32, format: ExportFormat) -> String {
    format!("{prefix}_{zone}_{year}.{}", format.extension())
}

#[derive(thiserror::Error, Debug)]
/// Errors raised while encoding an export payload.
pub enum ExportError {
    /// The spreadsheet writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),
    /// Flushing the in-memory buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
    /// Encoded bytes were not valid UTF-8.
    #[error("Encoding error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Encoded export ready to be written or downloaded.
pub struct ExportFile {
    /// Suggested file name.
    pub file_name: String,
    /// Format of `contents`.
    pub format: ExportFormat,
    /// Encoded payload.
    pub contents: String,
}
