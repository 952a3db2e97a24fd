use std::path::Path;

use crate::errors::AppError;

/// Splits a line into its first two whitespace-delimited fields.
///
/// Both the mapping file and the data file are two-column records; anything
/// past the second field is ignored. A line with fewer than two fields is
/// fatal for the run, reported with the file name and 1-based line number.
pub fn split_fields<'a>(
    line: &'a str,
    file: &Path,
    line_no: usize,
) -> Result<(&'a str, &'a str), AppError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        (first, _) => Err(AppError::MalformedLine {
            file: file.to_path_buf(),
            line: line_no,
            found: first.map_or(0, |_| 1),
        }),
    }
}
