//! Error types for sql2struct

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading DDL sources or writing generated code
#[derive(Error, Debug)]
pub enum Sql2StructError {
    #[error("Failed to read DDL source: {path}")]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DDL source {path} is neither valid UTF-8 nor Windows-1252")]
    InvalidEncoding { path: PathBuf },

    #[error("Invalid input pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No DDL files matched the given inputs: {inputs}")]
    NoInputFiles { inputs: String },

    #[error("No CREATE TABLE statement found in {inputs}")]
    NoTables { inputs: String },

    #[error("Output {path} must be a directory when generating {count} tables")]
    AmbiguousOutput { path: PathBuf, count: usize },

    #[error("Table name '{table}' cannot be used as an output file name")]
    InvalidOutputName { table: String },

    #[error("Tables from {first} and {second} would both be written to {path}")]
    DuplicateOutput {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to write generated code to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
