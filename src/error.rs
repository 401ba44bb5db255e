//! Error types for the upgrade report converter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading the HTML report and its embedded payload.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the HTML file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No `<script id="reportsData">` element in the document.
    #[error("<script> element with id='reportsData' not found in the HTML file")]
    MissingDataBlock,

    /// The embedded JSON could not be decoded.
    #[error("malformed report payload at line {line}, column {column}: {source}")]
    MalformedPayload {
        line: usize,
        column: usize,
        source: serde_json::Error,
    },

    /// The CSS selector used to locate the data block failed to compile.
    #[error("invalid selector: {message}")]
    Selector { message: String },
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file or directory.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },

    /// Failed to build or save the workbook.
    #[error("XLSX write failed: {source}")]
    Xlsx {
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Any failure of the end-to-end conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
