//! CSV file reading into [`Table`]s.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, SerReader};

use crate::error::{IngestError, Result};
use crate::table::Table;

use super::header::{first_duplicate, parse_csv_line};

/// Maximum file size for CSV loading (16 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped in read_first_line)
    Ok(())
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Reads the first line of a file, without a leading BOM.
fn read_first_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);

    match reader.lines().next() {
        Some(line) => {
            let line = line.map_err(|e| IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(
                line.strip_prefix('\u{feff}').unwrap_or(&line).to_string(),
            ))
        }
        None => Ok(None),
    }
}

/// Returns true if any non-blank line follows the header.
fn has_data_rows(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    for line in BufReader::new(file).lines().skip(1) {
        let line = line.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !line.trim().is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Reads and checks the header row.
///
/// Rejects empty files, blank headers, blank column names, and duplicate
/// column names.
pub fn read_csv_header(path: &Path) -> Result<Vec<String>> {
    let Some(line) = read_first_line(path)? else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    let columns = parse_csv_line(&line);
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    if columns.iter().any(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    if let Some(column) = first_duplicate(&columns) {
        return Err(IngestError::DuplicateColumn {
            column: column.to_string(),
        });
    }

    Ok(columns)
}

/// Reads a single-header CSV file into a [`Table`].
///
/// Numeric columns become `f64` sequences; string columns are kept as labels.
/// A file with a header but no data rows is reported as empty.
pub fn read_table(path: &Path) -> Result<Table> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let header = read_csv_header(path)?;
    if !has_data_rows(path)? {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let table = Table::from_dataframe(&df, Some(path))?;
    tracing::debug!(
        path = %path.display(),
        columns = header.len(),
        rows = table.height(),
        "loaded table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_header() {
        let file = create_temp_csv("Year,pool M,pool F\n2012,10,5\n");
        let header = read_csv_header(file.path()).unwrap();
        assert_eq!(header, vec!["Year", "pool M", "pool F"]);
    }

    #[test]
    fn test_read_csv_header_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_header(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_header_with_bom() {
        let file = create_temp_csv("\u{feff}A,B,C\n1,2,3\n");
        let header = read_csv_header(file.path()).unwrap();
        assert_eq!(header, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_csv_header_duplicate() {
        let file = create_temp_csv("pool M,pool M\n1,2\n");
        let result = read_csv_header(file.path());
        assert!(matches!(result, Err(IngestError::DuplicateColumn { .. })));
    }

    #[test]
    fn test_read_csv_header_blank_name() {
        let file = create_temp_csv("pool M,,pool F\n1,2,3\n");
        let result = read_csv_header(file.path());
        assert!(matches!(result, Err(IngestError::EmptyColumnName { .. })));
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0x00]).unwrap();
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_check_file_size_limit() {
        let file = create_temp_csv("A\n1\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 2),
            Err(IngestError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_table(Path::new("/nonexistent/SRC_stats_2012.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_table() {
        let file = create_temp_csv("Year,pool M,pool F\n2012,10,5\n2014,12,6\n2016,14,7\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 3);
        assert_eq!(table.numeric("pool M").unwrap(), &[10.0, 12.0, 14.0]);
        assert_eq!(table.labels("Year").unwrap(), vec!["2012", "2014", "2016"]);
        assert_eq!(table.source(), Some(file.path()));
    }

    #[test]
    fn test_read_table_header_only() {
        let file = create_temp_csv("pool M,pool F\n");
        let result = read_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_table_text_column() {
        let file = create_temp_csv(
            "Symposium,participants,participants female\n\"Spring, 2016\",40,12\nFall 2016,30,15\n",
        );
        let table = read_table(file.path()).unwrap();
        assert_eq!(
            table.labels("Symposium").unwrap(),
            vec!["Spring, 2016", "Fall 2016"]
        );
        assert_eq!(table.numeric("participants female").unwrap(), &[12.0, 15.0]);
    }
}
