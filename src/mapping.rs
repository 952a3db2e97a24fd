use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::AppError;
use crate::record;

/// Key of the synthetic fallback entry inserted after loading.
pub const DEFAULT_KEY: &str = "0";

/// Dictionary from pattern number to pattern name, loaded once per run and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    /// Loads the mapping file: one record per line, first field is the key,
    /// second field is the value. Storage is positional; the two columns are
    /// not reordered. A duplicate key keeps the later value.
    ///
    /// After the last line, the entry `"0" -> <count>` is inserted, where
    /// `<count>` is the number of entries present before this insertion. It
    /// overwrites any `"0"` record loaded from the file. An empty mapping
    /// file yields the single entry `"0" -> "0"`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|source| AppError::Open {
            file: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut entries = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let (key, value) = record::split_fields(&line, path, idx + 1)?;
            entries.insert(key.to_string(), value.to_string());
        }

        let fallback = entries.len().to_string();
        entries.insert(DEFAULT_KEY.to_string(), fallback);

        Ok(Self { entries })
    }

    /// Resolves a code to its mapped value, or the empty string when the code
    /// has no entry. A miss is part of the contract, not an error.
    pub fn resolve(&self, code: &str) -> &str {
        self.entries.get(code).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
