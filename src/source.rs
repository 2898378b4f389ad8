//! DDL source discovery and reading
//!
//! Inputs may be plain files, directories (searched recursively for `.sql`
//! files), glob patterns, or `-` for standard input.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::error::Sql2StructError;

/// Input name that stands for standard input
pub const STDIN_INPUT: &str = "-";

/// Expand CLI inputs into an ordered, de-duplicated list of DDL sources
pub fn collect_ddl_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Sql2StructError> {
    let mut files = Vec::new();

    for input in inputs {
        let input_str = input.to_string_lossy();
        if input_str == STDIN_INPUT {
            files.push(input.clone());
        } else if input_str.contains(['*', '?', '[']) {
            let paths = glob::glob(&input_str).map_err(|e| Sql2StructError::InvalidGlob {
                pattern: input_str.to_string(),
                source: e,
            })?;
            for entry in paths {
                let entry = entry.map_err(|e| Sql2StructError::SourceReadError {
                    path: e.path().to_path_buf(),
                    source: e.into_error(),
                })?;
                if entry.is_file() {
                    files.push(entry);
                }
            }
        } else if input.is_dir() {
            files.extend(find_sql_files(input));
        } else {
            // Missing files surface as read errors
            files.push(input.clone());
        }
    }

    let mut seen = HashSet::new();
    files.retain(|f| seen.insert(f.clone()));

    if files.is_empty() {
        return Err(Sql2StructError::NoInputFiles {
            inputs: inputs
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }
    Ok(files)
}

/// All `.sql` files below a directory, in a stable order
fn find_sql_files(dir: &Path) -> Vec<PathBuf> {
    let mut sql_files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
        })
        .collect();
    sql_files.sort();
    sql_files
}

/// Read a DDL source (a file, or stdin for `-`) as text
pub fn read_ddl(path: &Path) -> Result<String, Sql2StructError> {
    let read_error = |source: std::io::Error| Sql2StructError::SourceReadError {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path.as_os_str() == STDIN_INPUT {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(read_error)?;
        buf
    } else {
        std::fs::read(path).map_err(read_error)?
    };

    decode_ddl(&bytes, path)
}

/// Decode DDL bytes.
///
/// A byte order mark selects UTF-8 or UTF-16. Without one the text is read
/// as UTF-8, falling back to Windows-1252. Input holding NUL bytes but no BOM
/// (UTF-16 without a mark, or a binary file) is rejected.
pub fn decode_ddl(bytes: &[u8], path: &Path) -> Result<String, Sql2StructError> {
    let invalid = || Sql2StructError::InvalidEncoding {
        path: path.to_path_buf(),
    };

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .map(|text| text.into_owned())
            .ok_or_else(invalid);
    }

    if bytes.contains(&0) {
        return Err(invalid());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    // Older MySQL dumps are often latin1 / Windows-1252
    let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    Ok(decoded.into_owned())
}
