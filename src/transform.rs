use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::AppError;
use crate::mapping::MappingTable;
use crate::record;

/// Rewrites the coded input file line by line, replacing the first field via
/// the mapping table and passing the second field through unchanged.
///
/// The output file is created or truncated up front. Lines are emitted in
/// input order; if the run fails partway, lines already written remain.
pub fn rewrite(table: &MappingTable, infile: &Path, outfile: &Path) -> Result<(), AppError> {
    let out = File::create(outfile).map_err(|source| AppError::Open {
        file: outfile.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(out);

    let input = File::open(infile).map_err(|source| AppError::Open {
        file: infile.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(input);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let (code, payload) = record::split_fields(&line, infile, idx + 1)?;
        writeln!(writer, "{} {}", table.resolve(code), payload)?;
    }

    // BufWriter's drop swallows flush errors; surface them here.
    writer.flush()?;
    Ok(())
}
