//! sql2struct: generate Go model structs from MySQL DDL
//!
//! This library parses `CREATE TABLE` statements into a table model and
//! renders each table as a Go struct with optional `json`/`gorm` tags and a
//! `TableName()` method.

pub mod codegen;
pub mod error;
pub mod model;
pub mod parser;
pub mod source;
mod util;

use std::collections::HashMap;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use tracing::{info, warn};

pub use codegen::{generate, GenConfig};
pub use error::Sql2StructError;
pub use model::Table;
pub use parser::{parse_table, parse_tables};

/// Number of input files at which conversion switches to rayon.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// DDL files, directories, glob patterns or `-` for stdin
    pub inputs: Vec<PathBuf>,
    /// Output `.go` file or directory; stdout when `None`
    pub output: Option<PathBuf>,
    pub config: GenConfig,
}

/// Go source generated for one table
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Table name as written in the DDL
    pub table: String,
    /// DDL source the table came from
    pub source: PathBuf,
    pub code: String,
}

/// Parse a single `CREATE TABLE` statement and generate its Go source
pub fn generate_code(ddl: &str, config: &GenConfig) -> String {
    generate(&parse_table(ddl), config)
}

/// Generate Go sources for every table in a DDL text
pub fn generate_all(ddl: &str, config: &GenConfig) -> Vec<(Table, String)> {
    parse_tables(ddl)
        .into_iter()
        .filter_map(|table| {
            let code = generate(&table, config);
            (!code.is_empty()).then_some((table, code))
        })
        .collect()
}

/// Run a full generation: discover inputs, convert them and write the results
pub fn generate_structs(options: GenerateOptions) -> Result<Vec<GeneratedFile>> {
    // Step 1: Expand inputs into DDL files
    let files = source::collect_ddl_files(&options.inputs)?;
    info!(count = files.len(), "found DDL sources");

    // Step 2: Parse and generate
    let generated = convert_files(&files, &options.config)?;
    if generated.is_empty() {
        return Err(Sql2StructError::NoTables {
            inputs: display_paths(&files),
        }
        .into());
    }

    // Step 3: Write
    write_output(&generated, options.output.as_deref())?;

    Ok(generated)
}

/// Convert DDL files into generated sources, keeping input order
pub fn convert_files(files: &[PathBuf], config: &GenConfig) -> Result<Vec<GeneratedFile>> {
    let results: Vec<Result<Vec<GeneratedFile>>> = if files.len() >= PARALLEL_THRESHOLD {
        files
            .par_iter()
            .map(|file| convert_file(file, config))
            .collect()
    } else {
        files.iter().map(|file| convert_file(file, config)).collect()
    };

    let mut generated = Vec::with_capacity(files.len());
    for result in results {
        generated.extend(result?);
    }
    Ok(generated)
}

/// Convert every table of one DDL file
pub fn convert_file(path: &Path, config: &GenConfig) -> Result<Vec<GeneratedFile>> {
    let ddl = source::read_ddl(path)?;

    let generated: Vec<GeneratedFile> = generate_all(&ddl, config)
        .into_iter()
        .map(|(table, code)| GeneratedFile {
            table: table.raw_name,
            source: path.to_path_buf(),
            code,
        })
        .collect();

    if generated.is_empty() {
        warn!(path = %path.display(), "no CREATE TABLE statement found");
    }
    Ok(generated)
}

/// Write generated sources to stdout, a single `.go` file, or a directory
pub fn write_output(generated: &[GeneratedFile], output: Option<&Path>) -> Result<()> {
    let Some(output) = output else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let joined = generated
            .iter()
            .map(|g| g.code.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        handle
            .write_all(joined.as_bytes())
            .map_err(|e| Sql2StructError::OutputWriteError {
                path: PathBuf::from("<stdout>"),
                source: e,
            })?;
        return Ok(());
    };

    let is_file_target =
        !output.is_dir() && output.extension().is_some_and(|ext| ext == "go");

    if is_file_target {
        if generated.len() != 1 {
            return Err(Sql2StructError::AmbiguousOutput {
                path: output.to_path_buf(),
                count: generated.len(),
            }
            .into());
        }
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir(parent)?;
        }
        return write_file(output, &generated[0].code);
    }

    let targets = output_paths(generated, output)?;
    create_dir(output)?;
    for (path, file) in targets.iter().zip(generated) {
        write_file(path, &file.code)?;
    }
    Ok(())
}

/// Resolve `<dir>/<table>.go` for every generated file before anything is written.
///
/// A table name must be a single plain file name, and no two tables may land
/// on the same file.
fn output_paths(generated: &[GeneratedFile], dir: &Path) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut paths = Vec::with_capacity(generated.len());

    for file in generated {
        let file_name = format!("{}.go", file.table);
        if !is_plain_file_name(&file_name) {
            return Err(Sql2StructError::InvalidOutputName {
                table: file.table.clone(),
            }
            .into());
        }

        let path = dir.join(file_name);
        if let Some(first) = claimed.insert(path.clone(), &file.source) {
            return Err(Sql2StructError::DuplicateOutput {
                path,
                first: first.to_path_buf(),
                second: file.source.clone(),
            }
            .into());
        }
        paths.push(path);
    }
    Ok(paths)
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    !name.contains(['/', '\\'])
        && matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Sql2StructError::OutputWriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn write_file(path: &Path, code: &str) -> Result<()> {
    std::fs::write(path, code).map_err(|e| Sql2StructError::OutputWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "wrote generated code");
    Ok(())
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
